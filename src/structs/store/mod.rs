pub mod assignment;
pub mod student_repo;
pub mod analysis_log;
pub mod database;
