mod profile;

pub use profile::{ Contact, MailTemplate, Profile, Project };
