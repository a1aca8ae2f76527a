pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod planner;
pub mod postprocess;
pub mod report;
pub mod resize;
pub mod throttle;
