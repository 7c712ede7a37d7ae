use serde::{ Deserialize, Serialize };

use crate::error::ConfigError;
use crate::utils::mailto;

const PROFILE_JSON: &str = include_str!("../../assets/profile.json");

/// Everything the page says about its owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub owner: String,
    pub role: String,
    pub tagline: String,
    pub greeting: String,
    pub pitch: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub projects_intro: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact_intro: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub email: String,
    pub inquiry: MailTemplate,
    #[serde(default)]
    pub footer_stack: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default = "Project::default_url")]
    pub url: String,
}

impl Project {
    fn default_url() -> String {
        "#".to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Subject and body of the contact form's email. `{owner}` in the body is
/// replaced with the owner's name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MailTemplate {
    pub subject: String,
    pub body: String,
}

impl Profile {
    /// Loads the profile compiled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(PROFILE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        log::debug!(
            "Loaded profile for {} ({} projects, {} skills)",
            profile.owner,
            profile.projects.len(),
            profile.skills.len()
        );
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::Invalid("owner must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(ConfigError::Invalid(format!("email {:?} has no '@'", self.email)));
        }
        Ok(())
    }

    /// Avatar letter.
    pub fn initial(&self) -> char {
        self.owner.trim().chars().next().unwrap_or('?')
    }

    pub fn inquiry_link(&self) -> String {
        let body = self.inquiry.body.replace("{owner}", &self.owner);
        mailto(&self.email, &self.inquiry.subject, &body)
    }

    pub fn headline(&self) -> String {
        format!("{} — {}", self.owner, self.role)
    }

    pub fn footer_line(&self, year: i32) -> String {
        let mut line = format!("© {} {}", year, self.owner);
        for item in &self.footer_stack {
            line.push_str(" • ");
            line.push_str(item);
        }
        line
    }
}
