use axum::extract::{Query, State};
use axum::response::IntoResponse;
use portfolio_content::{
    Certification, Education, Experience, GalleryImage, PersonalInfo, Project, Skill,
};
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::Template;
use crate::theme::Theme;

pub struct SkillGroup<'a> {
    pub heading: &'static str,
    pub skills: Vec<&'a Skill>,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub theme: Theme,
    pub personal: &'a PersonalInfo,
    pub projects: Vec<&'a Project>,
    pub categories: Vec<String>,
    pub active_category: String,
    pub skill_groups: Vec<SkillGroup<'a>>,
    pub experiences: &'a [Experience],
    pub education: &'a [Education],
    pub certifications: &'a [Certification],
    pub gallery: &'a [GalleryImage],
}

#[derive(Deserialize)]
pub struct IndexParams {
    pub category: Option<String>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(params): Query<IndexParams>,
) -> impl IntoResponse {
    let content = app.content.as_ref();
    let active_category = params.category.unwrap_or_else(|| "All".to_owned());

    template.render(IndexTemplate {
        theme: template.theme(),
        personal: &content.personal,
        projects: content.projects_in(&active_category),
        categories: content
            .project_categories()
            .into_iter()
            .map(String::from)
            .collect(),
        active_category,
        skill_groups: content
            .skills_by_category()
            .into_iter()
            .map(|(category, skills)| SkillGroup {
                heading: category.heading(),
                skills,
            })
            .collect(),
        experiences: &content.experiences,
        education: &content.education,
        certifications: &content.certifications,
        gallery: &content.gallery,
    })
}
