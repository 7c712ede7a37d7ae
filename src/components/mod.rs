mod contact_card;
mod contact_form;
mod project_card;
mod skill;

pub use contact_card::ContactCard;
pub use contact_form::ContactForm;
pub use project_card::ProjectCard;
pub use skill::Skill;
