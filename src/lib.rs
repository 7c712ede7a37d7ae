mod views;
mod components;
mod utils;
mod routes;
mod configs;
#[cfg(test)]
mod tests;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ Contact, MailTemplate, Profile, Project };
pub use crate::error::{ ConfigError, ThemeError };
