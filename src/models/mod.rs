pub mod attendance;
pub mod status;
pub mod student;
