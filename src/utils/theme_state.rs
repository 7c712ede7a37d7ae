/// Effective light/dark mode of the page.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    /// Stored string form. Only `"true"` reads back as dark.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark { "true" } else { "false" }
    }

    pub fn from_stored(value: &str) -> Self {
        Self { is_dark: value == "true" }
    }

    pub fn label(self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }
}

impl From<bool> for ThemeState {
    fn from(is_dark: bool) -> Self {
        Self { is_dark }
    }
}
