//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod threshold;
pub mod timestamp;

pub use config::{LogConfig, SinkKind};
pub use error::{LoggerError, Result};
pub use log_level::Severity;
pub use logger::{FileLog, Log};
pub use metrics::{metrics, LoggerMetrics};
pub use sink::{install_sink, installed_sink, Sink};
pub use threshold::{global_threshold, reporting_level, set_reporting_level, Threshold};
pub use timestamp::now_time;
