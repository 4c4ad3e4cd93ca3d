//! Schema validator — a structural predicate over candidate canonical
//! records. Used by tests and migration callers that want to assert
//! correctness; the rendering path never needs it because the normalizer is
//! total.

use serde::Serialize;
use serde_json::Value;

/// Outcome of a structural check. Never an `Err`, never a panic — callers
/// branch on `valid` and report `error` when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}

const LIST_FIELDS: &[&str] = &[
    "workExperience",
    "projectExperience",
    "education",
    "skills",
    "customSections",
];

/// Checks a candidate record, short-circuiting on the first failure.
///
/// A list field that is absent is not an error — callers may validate
/// partially-built records — but when present it must be an array. A fully
/// normalized record always carries all five.
pub fn validate(candidate: &Value) -> ValidationResult {
    let Some(map) = candidate.as_object() else {
        return ValidationResult::fail("resume data must be a non-null object");
    };

    match map.get("profile") {
        Some(profile) if profile.is_object() => {}
        Some(_) => return ValidationResult::fail("profile must be an object"),
        None => return ValidationResult::fail("profile is missing"),
    }

    for field in LIST_FIELDS {
        if let Some(value) = map.get(*field) {
            if !value.is_array() {
                return ValidationResult::fail(format!("{field} must be an array"));
            }
        }
    }

    ValidationResult::ok()
}
