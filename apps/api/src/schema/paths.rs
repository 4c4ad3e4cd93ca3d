//! Declarative field lookup — ordered candidate paths per canonical field.
//!
//! Historical schema generations scattered the same data across many key
//! shapes (bare keys, nested `personalInfo`, snake_case plurals). Each
//! canonical field gets an explicit priority list, resolved by a small
//! dotted-path walker. The lists are pure data: adding a newly discovered
//! legacy alias means appending to a table, not touching control flow.
//!
//! Ordering rule: the canonical key shape always comes first. That is what
//! makes normalization idempotent, and why `profile.name` beats a bare
//! legacy `name` key when an input carries both.

use serde_json::Value;

/// Candidate dotted paths for one profile field, highest priority first.
pub struct ProfileFieldPaths {
    pub field: &'static str,
    pub candidates: &'static [&'static str],
}

pub const PROFILE_FIELD_PATHS: &[ProfileFieldPaths] = &[
    ProfileFieldPaths {
        field: "name",
        candidates: &["profile.name", "personalInfo.name", "name"],
    },
    ProfileFieldPaths {
        field: "email",
        candidates: &["profile.email", "personalInfo.email", "email"],
    },
    ProfileFieldPaths {
        field: "phone",
        candidates: &["profile.phone", "personalInfo.phone", "phone", "mobile"],
    },
    ProfileFieldPaths {
        field: "location",
        candidates: &[
            "profile.location",
            "personalInfo.location",
            "location",
            "address",
        ],
    },
    ProfileFieldPaths {
        field: "portfolio",
        candidates: &[
            "profile.portfolio",
            "personalInfo.portfolio",
            "portfolio",
            "website",
        ],
    },
    ProfileFieldPaths {
        field: "linkedin",
        candidates: &["profile.linkedin", "personalInfo.linkedin", "linkedin"],
    },
    ProfileFieldPaths {
        field: "summary",
        candidates: &[
            "profile.summary",
            "personalInfo.summary",
            "summary",
            "objective",
        ],
    },
];

/// Top-level key candidates for the work experience list.
pub const WORK_KEYS: &[&str] = &[
    "workExperience",
    "workExperiences",
    "work_experience",
    "work_experiences",
    "experience",
];

/// Top-level key candidates for the project list.
pub const PROJECT_KEYS: &[&str] = &[
    "projectExperience",
    "projectExperiences",
    "projects",
    "project_experience",
];

/// Top-level key candidates for the education list.
pub const EDUCATION_KEYS: &[&str] = &[
    "education",
    "educations",
    "education_history",
    "educationList",
];

// Per-entry key aliases, highest priority first. The canonical entry key is
// always the first alias.
pub const COMPANY_ALIASES: &[&str] = &["company", "employer", "organization"];
pub const POSITION_ALIASES: &[&str] = &["position", "title", "role"];
pub const DURATION_ALIASES: &[&str] = &["duration", "period", "time"];
pub const DESCRIPTION_ALIASES: &[&str] = &["description", "details", "summary"];
pub const PROJECT_NAME_ALIASES: &[&str] = &["name", "title"];
pub const PROJECT_ROLE_ALIASES: &[&str] = &["role", "position"];
pub const URL_ALIASES: &[&str] = &["url", "link", "github"];
pub const SCHOOL_ALIASES: &[&str] = &["school", "institution", "university"];
pub const DEGREE_ALIASES: &[&str] = &["degree"];
pub const MAJOR_ALIASES: &[&str] = &["major", "field", "fieldOfStudy"];
pub const EDUCATION_DURATION_ALIASES: &[&str] = &["duration", "period", "time", "year"];

/// Walks a dotted path (`"personalInfo.name"`) through a JSON value.
/// Returns `None` as soon as any intermediate segment is missing or not an
/// object.
pub fn walk_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolves an ordered candidate path list to the first non-empty string.
pub fn first_string(value: &Value, candidates: &[&str]) -> String {
    for path in candidates {
        if let Some(found) = walk_path(value, path).and_then(Value::as_str) {
            if !found.is_empty() {
                return found.to_string();
            }
        }
    }
    String::new()
}

/// Resolves an ordered candidate key list to the first value that is an
/// array. A key holding a non-array value does not shadow a lower-priority
/// key that holds a real array.
pub fn first_array<'a>(value: &'a Value, candidates: &[&str]) -> Option<&'a Vec<Value>> {
    for key in candidates {
        if let Some(array) = value.get(*key).and_then(Value::as_array) {
            return Some(array);
        }
    }
    None
}

/// First non-empty string among flat key aliases on a single entry object.
pub fn alias_string(entry: &Value, aliases: &[&str]) -> String {
    for key in aliases {
        if let Some(found) = entry.get(*key).and_then(Value::as_str) {
            if !found.is_empty() {
                return found.to_string();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_walk_path_single_segment() {
        let v = json!({"name": "Ada"});
        assert_eq!(walk_path(&v, "name").unwrap(), "Ada");
    }

    #[test]
    fn test_walk_path_nested() {
        let v = json!({"personalInfo": {"name": "Ada"}});
        assert_eq!(walk_path(&v, "personalInfo.name").unwrap(), "Ada");
    }

    #[test]
    fn test_walk_path_missing_intermediate_is_none() {
        let v = json!({"profile": "not-an-object"});
        assert!(walk_path(&v, "profile.name").is_none());
        assert!(walk_path(&v, "missing.name").is_none());
    }

    #[test]
    fn test_first_string_takes_priority_order() {
        let v = json!({"name": "A", "profile": {"name": "B"}});
        let paths = &["profile.name", "personalInfo.name", "name"];
        assert_eq!(first_string(&v, paths), "B");
    }

    #[test]
    fn test_first_string_skips_empty_candidates() {
        let v = json!({"name": "A", "profile": {"name": ""}});
        let paths = &["profile.name", "name"];
        assert_eq!(first_string(&v, paths), "A");
    }

    #[test]
    fn test_first_string_all_missing_yields_empty() {
        let v = json!({});
        assert_eq!(first_string(&v, &["profile.name", "name"]), "");
    }

    #[test]
    fn test_first_array_skips_non_array_values() {
        let v = json!({"workExperience": "oops", "work_experience": [{"company": "Co"}]});
        let found = first_array(&v, WORK_KEYS).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_first_array_canonical_key_wins() {
        let v = json!({"workExperience": [1, 2], "experience": [3]});
        assert_eq!(first_array(&v, WORK_KEYS).unwrap().len(), 2);
    }

    #[test]
    fn test_alias_string_first_nonempty_wins() {
        let entry = json!({"position": "", "title": "Engineer", "role": "IC"});
        assert_eq!(alias_string(&entry, POSITION_ALIASES), "Engineer");
    }

    #[test]
    fn test_profile_tables_cover_all_seven_fields() {
        let fields: Vec<&str> = PROFILE_FIELD_PATHS.iter().map(|p| p.field).collect();
        assert_eq!(
            fields,
            vec!["name", "email", "phone", "location", "portfolio", "linkedin", "summary"]
        );
    }

    /// Every profile field's top-priority candidate must be the canonical
    /// `profile.*` path, otherwise normalization stops being idempotent.
    #[test]
    fn test_canonical_paths_have_top_priority() {
        for entry in PROFILE_FIELD_PATHS {
            assert_eq!(
                entry.candidates[0],
                format!("profile.{}", entry.field),
                "canonical path must lead for {}",
                entry.field
            );
        }
    }
}
