pub mod chain;
pub mod config;
pub mod dashboard;
pub mod refresher;
pub mod rewards;
pub mod service;
pub mod shutdown;
pub mod tasks;
pub mod types;
