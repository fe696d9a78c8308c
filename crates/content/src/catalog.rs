use strum::VariantArray;

use crate::types::{
    Certification, Education, Experience, GalleryImage, PersonalInfo, Proficiency, Project, Skill,
    SkillCategory, SocialLink,
};

/// Everything the informational sections render. One value, built at
/// startup and shared read-only by the views and the JSON API.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub personal: PersonalInfo,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub gallery: Vec<GalleryImage>,
}

impl Catalog {
    /// Distinct project categories, first-seen order.
    pub fn project_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(&project.category);
            }
        }
        categories
    }

    /// Distinct technologies across all projects, first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut technologies: Vec<&str> = Vec::new();
        for project in &self.projects {
            for tech in &project.technologies {
                if !technologies.contains(&tech.as_str()) {
                    technologies.push(tech);
                }
            }
        }
        technologies
    }

    /// Projects in one category; `"All"` (or empty) passes everything.
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category.is_empty() || category == "All" || p.category == category)
            .collect()
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Skills grouped by category, category-declaration order, skipping
    /// categories with nothing in them.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::VARIANTS
            .iter()
            .filter_map(|&category| {
                let skills: Vec<&Skill> =
                    self.skills.iter().filter(|s| s.category == category).collect();
                if skills.is_empty() {
                    None
                } else {
                    Some((category, skills))
                }
            })
            .collect()
    }

    /// The shipped portfolio content.
    pub fn sample() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Jordan Avery".to_owned(),
                title: "Full-Stack Developer".to_owned(),
                tagline: "Building fast, accessible web applications".to_owned(),
                bio: "Full-stack developer with a soft spot for small, well-made tools. \
                      I spend most of my time on web services and the occasional systems \
                      project, and I like shipping things that are fast by default and \
                      simple to operate."
                    .to_owned(),
                location: "Leipzig, Germany".to_owned(),
                email: "hello@jordanavery.dev".to_owned(),
                phone: None,
                profile_image: "/static/images/profile.svg".to_owned(),
                social_links: vec![
                    SocialLink {
                        platform: "GitHub".to_owned(),
                        url: "https://github.com/javery-dev".to_owned(),
                        username: Some("javery-dev".to_owned()),
                    },
                    SocialLink {
                        platform: "LinkedIn".to_owned(),
                        url: "https://linkedin.com/in/jordan-avery-dev".to_owned(),
                        username: None,
                    },
                    SocialLink {
                        platform: "Mastodon".to_owned(),
                        url: "https://hachyderm.io/@javery".to_owned(),
                        username: Some("@javery".to_owned()),
                    },
                ],
            },
            projects: vec![
                Project {
                    id: "1".to_owned(),
                    title: "Shelfmark".to_owned(),
                    description: "Self-hosted reading tracker: import your library, log \
                                  sessions, and get yearly reading reports. Server-rendered \
                                  with a deliberately tiny JavaScript footprint."
                        .to_owned(),
                    technologies: vec![
                        "Rust".to_owned(),
                        "Axum".to_owned(),
                        "SQLite".to_owned(),
                        "Askama".to_owned(),
                    ],
                    category: "Full Stack".to_owned(),
                    thumbnail: "/static/images/shelfmark.svg".to_owned(),
                    images: vec![
                        "/static/images/shelfmark.svg".to_owned(),
                        "/static/images/shelfmark-reports.svg".to_owned(),
                    ],
                    live_url: Some("https://shelfmark.jordanavery.dev".to_owned()),
                    source_url: Some("https://github.com/javery-dev/shelfmark".to_owned()),
                    featured: true,
                },
                Project {
                    id: "2".to_owned(),
                    title: "Pegboard".to_owned(),
                    description: "Kanban board for one. Drag-free keyboard-first UI, \
                                  offline-capable, syncs through a small REST backend."
                        .to_owned(),
                    technologies: vec![
                        "TypeScript".to_owned(),
                        "React".to_owned(),
                        "Node.js".to_owned(),
                        "PostgreSQL".to_owned(),
                    ],
                    category: "Frontend".to_owned(),
                    thumbnail: "/static/images/pegboard.svg".to_owned(),
                    images: vec!["/static/images/pegboard.svg".to_owned()],
                    live_url: None,
                    source_url: Some("https://github.com/javery-dev/pegboard".to_owned()),
                    featured: true,
                },
                Project {
                    id: "3".to_owned(),
                    title: "tidegauge".to_owned(),
                    description: "CLI that scrapes public tide tables and renders them as \
                                  sparklines in the terminal. Written as an excuse to learn \
                                  proper error handling in Rust."
                        .to_owned(),
                    technologies: vec!["Rust".to_owned(), "Clap".to_owned()],
                    category: "CLI".to_owned(),
                    thumbnail: "/static/images/tidegauge.svg".to_owned(),
                    images: vec![],
                    live_url: None,
                    source_url: Some("https://github.com/javery-dev/tidegauge".to_owned()),
                    featured: false,
                },
            ],
            skills: vec![
                Skill {
                    name: "Rust".to_owned(),
                    category: SkillCategory::Language,
                    proficiency: Proficiency::Advanced,
                    years_of_experience: Some(4.0),
                },
                Skill {
                    name: "TypeScript".to_owned(),
                    category: SkillCategory::Language,
                    proficiency: Proficiency::Advanced,
                    years_of_experience: Some(6.0),
                },
                Skill {
                    name: "SQL".to_owned(),
                    category: SkillCategory::Language,
                    proficiency: Proficiency::Intermediate,
                    years_of_experience: Some(7.0),
                },
                Skill {
                    name: "Axum".to_owned(),
                    category: SkillCategory::Framework,
                    proficiency: Proficiency::Advanced,
                    years_of_experience: Some(2.5),
                },
                Skill {
                    name: "React".to_owned(),
                    category: SkillCategory::Framework,
                    proficiency: Proficiency::Intermediate,
                    years_of_experience: Some(5.0),
                },
                Skill {
                    name: "Git".to_owned(),
                    category: SkillCategory::Tool,
                    proficiency: Proficiency::Expert,
                    years_of_experience: Some(9.0),
                },
                Skill {
                    name: "Docker".to_owned(),
                    category: SkillCategory::Tool,
                    proficiency: Proficiency::Intermediate,
                    years_of_experience: Some(4.0),
                },
                Skill {
                    name: "SQLite".to_owned(),
                    category: SkillCategory::Database,
                    proficiency: Proficiency::Advanced,
                    years_of_experience: Some(3.0),
                },
                Skill {
                    name: "PostgreSQL".to_owned(),
                    category: SkillCategory::Database,
                    proficiency: Proficiency::Intermediate,
                    years_of_experience: Some(5.0),
                },
            ],
            experiences: vec![
                Experience {
                    id: "1".to_owned(),
                    company: "Ferroline Systems".to_owned(),
                    position: "Backend Engineer".to_owned(),
                    start_date: "2023-04-01".to_owned(),
                    end_date: None,
                    description: "Building and operating logistics APIs in Rust. Owned the \
                                  migration of the quoting service from a nightly batch job \
                                  to an always-on axum service."
                        .to_owned(),
                    technologies: vec![
                        "Rust".to_owned(),
                        "Axum".to_owned(),
                        "PostgreSQL".to_owned(),
                        "Docker".to_owned(),
                    ],
                },
                Experience {
                    id: "2".to_owned(),
                    company: "Brightgrove Media".to_owned(),
                    position: "Web Developer".to_owned(),
                    start_date: "2019-09-01".to_owned(),
                    end_date: Some("2023-03-31".to_owned()),
                    description: "Client work across a dozen content-heavy sites: design \
                                  systems, accessibility audits, and the gradual replacement \
                                  of a legacy PHP stack with typed services."
                        .to_owned(),
                    technologies: vec![
                        "TypeScript".to_owned(),
                        "React".to_owned(),
                        "Node.js".to_owned(),
                        "PHP".to_owned(),
                    ],
                },
            ],
            education: vec![Education {
                id: "1".to_owned(),
                institution: "Leipzig University of Applied Sciences".to_owned(),
                degree: "B.Sc. Computer Science".to_owned(),
                field: Some("Computer Science".to_owned()),
                start_date: "2015-10-01".to_owned(),
                end_date: Some("2019-07-31".to_owned()),
                description: None,
            }],
            certifications: vec![Certification {
                id: "1".to_owned(),
                name: "AWS Certified Developer – Associate".to_owned(),
                issuer: "Amazon Web Services".to_owned(),
                issue_date: "2022-05-01".to_owned(),
                certificate_url: None,
                description: None,
            }],
            gallery: vec![
                GalleryImage {
                    src: "/static/images/gallery-desk.svg".to_owned(),
                    alt: "Desk setup with two monitors".to_owned(),
                    caption: "Where most of the work happens".to_owned(),
                },
                GalleryImage {
                    src: "/static/images/gallery-talk.svg".to_owned(),
                    alt: "Speaking at a local meetup".to_owned(),
                    caption: "Rust meetup, spring 2025".to_owned(),
                },
                GalleryImage {
                    src: "/static/images/gallery-hike.svg".to_owned(),
                    alt: "Hiking trail above the valley".to_owned(),
                    caption: "Offline time".to_owned(),
                },
            ],
        }
    }
}
