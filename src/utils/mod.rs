pub mod host;
mod mailto;
mod theme_controller;
mod theme_state;

pub use host::{ host_controller, HostThemeController };
pub use mailto::mailto;
pub use theme_controller::{ ThemePreferenceController, STORAGE_KEY };
pub use theme_state::ThemeState;
