//! The canonical resume record.
//!
//! Field names in the serialized form are the wire contract: the renderer,
//! migration scripts, and any persistence layer all consume exactly this
//! shape. Every array is always present and `profile` always carries all
//! seven keys — missing data is an empty string, never an omitted key.

use serde::{Deserialize, Serialize};

/// Contact and identity fields. All default to `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub linkedin: String,
    pub summary: String,
}

/// One employment entry. Insertion order is chronological order as supplied
/// by the caller — entries are never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub major: String,
    pub duration: String,
}

/// A named group of skills. Sources with no category concept get a single
/// synthetic group (see the normalizer's skills handling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub details: String,
}

/// Catch-all for legacy top-level sections without a first-class field
/// (awards, certifications, publications, languages, hobbies, volunteer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

/// The unified resume schema. Produced fresh on every normalization call and
/// immutable once constructed — the renderer only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalResume {
    pub profile: Profile,
    pub work_experience: Vec<WorkEntry>,
    pub project_experience: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub custom_sections: Vec<CustomSection>,
}

impl CanonicalResume {
    /// The empty skeleton: the degraded-but-valid output for any input the
    /// normalizer cannot make sense of.
    pub fn empty() -> Self {
        Self::default()
    }
}
