pub mod backup;
pub mod config;
pub mod log;
pub mod mark;
pub mod register;
pub mod report;
pub mod resolver;
pub mod views;
