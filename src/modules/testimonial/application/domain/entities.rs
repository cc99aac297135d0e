use serde::{Deserialize, Serialize};

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, Record, RecordFilter, RecordId};

/// Client quote. `rating` is expected to be 1 to 5 but is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
    pub avatar: Option<String>,
}

impl Record for Testimonial {
    type Draft = TestimonialDraft;
    type Patch = TestimonialPatch;

    const KIND: &'static str = "Testimonial";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: TestimonialDraft) -> Self {
        Self {
            id,
            name: draft.name,
            role: draft.role,
            company: draft.company,
            content: draft.content,
            rating: draft.rating,
            avatar: draft.avatar,
        }
    }

    fn apply_patch(&mut self, patch: TestimonialPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.role, patch.role);
        merge(&mut self.company, patch.company);
        merge(&mut self.content, patch.content);
        merge(&mut self.rating, patch.rating);
        merge(&mut self.avatar, patch.avatar);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialFilter {
    pub search: Option<String>,
    pub min_rating: Option<u8>,
}

impl RecordFilter<Testimonial> for TestimonialFilter {
    fn matches(&self, t: &Testimonial) -> bool {
        let text_ok = non_blank(self.search.as_deref()).map_or(true, |term| {
            any_contains([t.name.as_str(), t.company.as_str(), t.content.as_str()], term)
        });

        text_ok && self.min_rating.map_or(true, |min| t.rating >= min)
    }
}

/// Mean rating, 0.0 for an empty slice.
pub fn average_rating(testimonials: &[Testimonial]) -> f64 {
    if testimonials.is_empty() {
        return 0.0;
    }
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
    f64::from(total) / testimonials.len() as f64
}
