// Library for tests to access modules

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod shutdown;
pub mod sysinfo_repo;
pub mod tui;
pub mod version;
