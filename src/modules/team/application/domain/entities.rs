use serde::{Deserialize, Serialize};

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, Record, RecordFilter, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDraft {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub social: SocialLinks,
}

/// `social` is replaced as a whole when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub social: Option<SocialLinks>,
}

impl Record for TeamMember {
    type Draft = TeamMemberDraft;
    type Patch = TeamMemberPatch;

    const KIND: &'static str = "TeamMember";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: TeamMemberDraft) -> Self {
        Self {
            id,
            name: draft.name,
            role: draft.role,
            bio: draft.bio,
            image: draft.image,
            social: draft.social,
        }
    }

    fn apply_patch(&mut self, patch: TeamMemberPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.role, patch.role);
        merge(&mut self.bio, patch.bio);
        merge(&mut self.image, patch.image);
        merge(&mut self.social, patch.social);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberFilter {
    pub search: Option<String>,
}

impl RecordFilter<TeamMember> for TeamMemberFilter {
    fn matches(&self, member: &TeamMember) -> bool {
        non_blank(self.search.as_deref()).map_or(true, |term| {
            any_contains(
                [member.name.as_str(), member.role.as_str(), member.bio.as_str()],
                term,
            )
        })
    }
}
