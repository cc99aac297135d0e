use serde::{Deserialize, Serialize};

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, PatchField, Record, RecordFilter, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    /// Display text such as "Starting at $2,999".
    pub price: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub price: PatchField<String>,
}

impl Record for Service {
    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    const KIND: &'static str = "Service";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ServiceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            icon: draft.icon,
            features: draft.features,
            price: draft.price,
        }
    }

    fn apply_patch(&mut self, patch: ServicePatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.icon, patch.icon);
        merge(&mut self.features, patch.features);
        patch.price.apply_to(&mut self.price);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFilter {
    pub search: Option<String>,
}

impl RecordFilter<Service> for ServiceFilter {
    fn matches(&self, service: &Service) -> bool {
        let Some(term) = non_blank(self.search.as_deref()) else {
            return true;
        };

        let fields = [service.title.as_str(), service.description.as_str()]
            .into_iter()
            .chain(service.features.iter().map(String::as_str));
        any_contains(fields, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design() -> Service {
        Service::from_draft(
            RecordId::from("s1"),
            ServiceDraft {
                title: "UI/UX Design".to_string(),
                description: "Interfaces people enjoy".to_string(),
                icon: "palette".to_string(),
                features: vec!["User Research".to_string(), "Prototyping".to_string()],
                price: Some("Starting at $1,999".to_string()),
            },
        )
    }

    #[test]
    fn test_search_matches_features() {
        let filter = ServiceFilter {
            search: Some("PROTOTYP".to_string()),
        };
        assert!(filter.matches(&design()));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let filter = ServiceFilter {
            search: Some("   ".to_string()),
        };
        assert!(filter.matches(&design()));
    }

    #[test]
    fn test_price_can_be_cleared() {
        let mut service = design();
        let patch: ServicePatch = serde_json::from_str(r#"{"price":null}"#).unwrap();

        service.apply_patch(patch);

        assert_eq!(service.price, None);
        assert_eq!(service.icon, "palette");
    }
}
