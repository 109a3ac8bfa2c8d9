pub mod config;
pub mod decoder;
pub mod listener;
pub mod logging;
pub mod report;
pub mod sender;
pub mod telemetry;
