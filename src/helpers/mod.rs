pub mod config_helper;
pub mod prompt_generator;
pub mod bulk_import;
pub mod date_helper;
