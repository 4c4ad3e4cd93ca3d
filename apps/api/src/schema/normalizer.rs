//! Schema normalizer — converts resume data in any historical shape into a
//! `CanonicalResume`.
//!
//! ARCHITECTURAL RULE: normalization is total. There is no input — null,
//! malformed JSON text, a bare number, an object from any schema generation —
//! that makes this module return an error or panic. Unrecognizable input
//! degrades to the empty skeleton, which is itself a valid canonical record.

use serde_json::Value;

use crate::schema::canonical::{
    CanonicalResume, CustomSection, EducationEntry, Profile, ProjectEntry, SkillGroup, WorkEntry,
};
use crate::schema::paths::{
    alias_string, first_array, first_string, COMPANY_ALIASES, DEGREE_ALIASES,
    DESCRIPTION_ALIASES, DURATION_ALIASES, EDUCATION_DURATION_ALIASES, EDUCATION_KEYS,
    MAJOR_ALIASES, POSITION_ALIASES, PROFILE_FIELD_PATHS, PROJECT_KEYS, PROJECT_NAME_ALIASES,
    PROJECT_ROLE_ALIASES, SCHOOL_ALIASES, URL_ALIASES, WORK_KEYS,
};

/// Synthetic category label for skill lists that had no category concept.
const GENERIC_SKILL_CATEGORY: &str = "Skills";

/// Legacy top-level keys harvested into `customSections`, with their fixed
/// display titles. Harvest order is emission order.
const CUSTOM_SECTION_KEYS: &[(&str, &str)] = &[
    ("awards", "Awards"),
    ("certifications", "Certifications"),
    ("publications", "Publications"),
    ("languages", "Languages"),
    ("hobbies", "Hobbies"),
    ("volunteer", "Volunteer Experience"),
];

/// Normalizes an arbitrary JSON value into the canonical record.
///
/// A `Value::String` is treated as serialized JSON and parsed first; parse
/// failure yields the empty skeleton. Idempotent on its own output: the
/// canonical key shapes are the top-priority candidates in every lookup
/// table, so normalizing an already-canonical record is a no-op.
pub fn normalize(input: &Value) -> CanonicalResume {
    let parsed;
    let source = match input {
        Value::Object(_) => input,
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => {
                parsed = Value::Object(map);
                &parsed
            }
            _ => return CanonicalResume::empty(),
        },
        _ => return CanonicalResume::empty(),
    };

    CanonicalResume {
        profile: extract_profile(source),
        work_experience: extract_work(source),
        project_experience: extract_projects(source),
        education: extract_education(source),
        skills: extract_skills(source),
        custom_sections: extract_custom_sections(source),
    }
}

/// Convenience wrapper for raw text input (e.g. a stored JSON column).
pub fn normalize_str(input: &str) -> CanonicalResume {
    normalize(&Value::String(input.to_string()))
}

fn profile_field(source: &Value, field: &str) -> String {
    PROFILE_FIELD_PATHS
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| first_string(source, entry.candidates))
        .unwrap_or_default()
}

fn extract_profile(source: &Value) -> Profile {
    Profile {
        name: profile_field(source, "name"),
        email: profile_field(source, "email"),
        phone: profile_field(source, "phone"),
        location: profile_field(source, "location"),
        portfolio: profile_field(source, "portfolio"),
        linkedin: profile_field(source, "linkedin"),
        summary: profile_field(source, "summary"),
    }
}

fn extract_work(source: &Value) -> Vec<WorkEntry> {
    let Some(items) = first_array(source, WORK_KEYS) else {
        return vec![];
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| WorkEntry {
            company: alias_string(item, COMPANY_ALIASES),
            position: alias_string(item, POSITION_ALIASES),
            duration: alias_string(item, DURATION_ALIASES),
            description: alias_string(item, DESCRIPTION_ALIASES),
        })
        .collect()
}

fn extract_projects(source: &Value) -> Vec<ProjectEntry> {
    let Some(items) = first_array(source, PROJECT_KEYS) else {
        return vec![];
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| ProjectEntry {
            name: alias_string(item, PROJECT_NAME_ALIASES),
            role: alias_string(item, PROJECT_ROLE_ALIASES),
            duration: alias_string(item, DURATION_ALIASES),
            description: alias_string(item, DESCRIPTION_ALIASES),
            url: alias_string(item, URL_ALIASES),
        })
        .collect()
}

fn extract_education(source: &Value) -> Vec<EducationEntry> {
    let Some(items) = first_array(source, EDUCATION_KEYS) else {
        return vec![];
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| EducationEntry {
            school: alias_string(item, SCHOOL_ALIASES),
            degree: alias_string(item, DEGREE_ALIASES),
            major: alias_string(item, MAJOR_ALIASES),
            duration: alias_string(item, EDUCATION_DURATION_ALIASES),
        })
        .collect()
}

/// Skills is the one field with genuine shape polymorphism across schema
/// generations: already-categorized object arrays, plain string arrays,
/// or a single bare string.
fn extract_skills(source: &Value) -> Vec<SkillGroup> {
    match source.get("skills") {
        Some(Value::Array(items)) => {
            if items.is_empty() {
                return vec![];
            }
            let categorized = items
                .first()
                .map(|first| first.get("category").is_some())
                .unwrap_or(false);
            if categorized {
                items
                    .iter()
                    .map(|item| SkillGroup {
                        category: alias_string(item, &["category", "name"]),
                        details: skill_details(item),
                    })
                    .collect()
            } else {
                vec![SkillGroup {
                    category: GENERIC_SKILL_CATEGORY.to_string(),
                    details: join_values(items),
                }]
            }
        }
        Some(Value::String(text)) if !text.is_empty() => vec![SkillGroup {
            category: GENERIC_SKILL_CATEGORY.to_string(),
            details: text.clone(),
        }],
        _ => vec![],
    }
}

/// Details for a categorized skill entry: a `details` string, or a legacy
/// `items` array comma-joined.
fn skill_details(entry: &Value) -> String {
    if let Some(details) = entry.get("details").and_then(Value::as_str) {
        return details.to_string();
    }
    if let Some(items) = entry.get("items").and_then(Value::as_array) {
        return join_values(items);
    }
    String::new()
}

fn extract_custom_sections(source: &Value) -> Vec<CustomSection> {
    let mut sections = Vec::new();

    // Canonical customSections pass through first, keeping normalization
    // idempotent for records that already carry them.
    if let Some(items) = source.get("customSections").and_then(Value::as_array) {
        for item in items {
            let title = alias_string(item, &["title", "name"]);
            let content = match item.get("content") {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Array(values)) => join_values(values),
                _ => String::new(),
            };
            if !title.is_empty() || !content.is_empty() {
                sections.push(CustomSection { title, content });
            }
        }
    }

    for &(key, title) in CUSTOM_SECTION_KEYS {
        let content = match source.get(key) {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::Array(values)) if !values.is_empty() => join_values(values),
            _ => continue,
        };
        sections.push(CustomSection {
            title: title.to_string(),
            content,
        });
    }

    sections
}

/// Comma-joins mixed array values. Strings pass through; objects fall back
/// to their `name` key, then to raw JSON text; scalars use their JSON form.
fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(stringify_value)
        .collect::<Vec<_>>()
        .join(", ")
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}
