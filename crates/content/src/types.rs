use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// A portfolio project card.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub featured: bool,
}

#[derive(
    EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Database,
}

impl SkillCategory {
    /// Section heading used on the skills grid and in the API grouping.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Language => "Languages",
            Self::Framework => "Frameworks",
            Self::Tool => "Tools",
            Self::Database => "Databases",
        }
    }
}

#[derive(
    EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Fill level for the proficiency bar, out of 100.
    pub fn percent(&self) -> u8 {
        match self {
            Self::Beginner => 25,
            Self::Intermediate => 50,
            Self::Advanced => 75,
            Self::Expert => 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// `None` means the position is current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub profile_image: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}
