pub mod migrations;
pub mod profile_repo;
