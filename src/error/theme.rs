use std::fmt::{ Display, Formatter };

/// Failures reported by the theme host backends.
///
/// None of these ever reach the user. The controller collapses each one to a
/// default at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    StorageUnavailable(String),
    SystemPreferenceUnavailable,
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::SystemPreferenceUnavailable => {
                write!(f, "System color-scheme preference unavailable")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let msg = match value.dyn_into::<js_sys::Error>() {
            Ok(err) => String::from(err.message()),
            Err(other) => format!("{:?}", other),
        };
        ThemeError::StorageUnavailable(msg)
    }
}
