#[cfg(test)]
mod tests {
    use crate::configs::Profile;
    use crate::error::ConfigError;
    use crate::tests::common::setup;

    const MINIMAL: &str = r#"{
        "owner": "Sam",
        "role": "Developer",
        "tagline": "t",
        "greeting": "g",
        "pitch": "p",
        "about": "a",
        "projects_intro": "pi",
        "projects": [{ "title": "Bare", "description": "no links" }],
        "contact_intro": "ci",
        "email": "sam@example.com",
        "inquiry": { "subject": "Website Inquiry", "body": "Hi {owner},\n\nHello" }
    }"#;

    #[test]
    fn test_embedded_profile_loads() {
        setup();
        let profile = Profile::load().expect("embedded profile should parse");
        assert!(!profile.owner.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(profile.inquiry_link().starts_with("mailto:"));
    }

    #[test]
    fn test_project_defaults() {
        setup();
        let profile = Profile::from_json(MINIMAL).unwrap();
        let project = &profile.projects[0];
        assert!(project.tech.is_empty());
        assert_eq!(project.url, "#");
        assert!(profile.contacts.is_empty());
    }

    #[test]
    fn test_inquiry_link() {
        setup();
        let profile = Profile::from_json(MINIMAL).unwrap();
        assert_eq!(
            profile.inquiry_link(),
            "mailto:sam@example.com?subject=Website%20Inquiry&body=Hi%20Sam%2C%0A%0AHello"
        );
    }

    #[test]
    fn test_rejects_empty_owner() {
        setup();
        let json = MINIMAL.replace("\"owner\": \"Sam\"", "\"owner\": \"  \"");
        assert!(matches!(Profile::from_json(&json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_email_without_at() {
        setup();
        let json = MINIMAL.replace("sam@example.com", "sam.example.com");
        assert!(matches!(Profile::from_json(&json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        setup();
        assert!(matches!(Profile::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_initial_and_footer() {
        setup();
        let mut profile = Profile::from_json(MINIMAL).unwrap();
        assert_eq!(profile.initial(), 'S');
        profile.footer_stack = vec!["Rust".to_string(), "Dioxus".to_string()];
        assert_eq!(profile.footer_line(2026), "© 2026 Sam • Rust • Dioxus");
        assert_eq!(profile.headline(), "Sam — Developer");
    }
}
