pub mod backup;
pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod register;
pub mod report;
pub mod students;
pub mod token;
