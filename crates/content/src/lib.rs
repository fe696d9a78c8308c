mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::{
    Certification, Education, Experience, GalleryImage, PersonalInfo, Project, Proficiency, Skill,
    SkillCategory, SocialLink,
};
