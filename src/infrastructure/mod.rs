pub mod api;
pub mod fs;
pub mod sqlite;
