pub mod dashboard_stats;
pub mod assignment_analytics;
pub mod student_row;
pub mod score_stats;
