// Build-time identity from Cargo.toml

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `name version`, as logged at startup.
pub fn describe() -> String {
    format!("{NAME} {VERSION}")
}
