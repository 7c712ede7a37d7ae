mod config;
mod theme;

pub use config::ConfigError;
pub use theme::ThemeError;
