use serde::{Deserialize, Serialize};

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, PatchField, Record, RecordFilter, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planning,
}

/// Portfolio entry shown on the projects page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub status: ProjectStatus,
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub link: PatchField<String>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
}

impl Record for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const KIND: &'static str = "Project";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            category: draft.category,
            technologies: draft.technologies,
            link: draft.link,
            status: draft.status,
            featured: draft.featured,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.image, patch.image);
        merge(&mut self.category, patch.category);
        merge(&mut self.technologies, patch.technologies);
        patch.link.apply_to(&mut self.link);
        merge(&mut self.status, patch.status);
        merge(&mut self.featured, patch.featured);
    }
}

/// `?search=&category=&status=&featured=`; category is matched exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
}

impl RecordFilter<Project> for ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        if let Some(term) = non_blank(self.search.as_deref()) {
            let fields = [project.title.as_str(), project.description.as_str()]
                .into_iter()
                .chain(project.technologies.iter().map(String::as_str));
            if !any_contains(fields, term) {
                return false;
            }
        }

        non_blank(self.category.as_deref()).map_or(true, |c| project.category == c)
            && self.status.map_or(true, |s| project.status == s)
            && self.featured.map_or(true, |f| project.featured == f)
    }
}
