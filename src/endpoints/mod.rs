pub mod admin_stats;
pub mod create_note;
pub mod echo;
pub mod not_found;
