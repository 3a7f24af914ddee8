//! Alternatives and criteria - the two axes of a decision matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, CriterionId};

/// An option being ranked.
///
/// Identity is the id; the name is a display label and never takes part in
/// any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default = "AlternativeId::generate")]
    pub id: AlternativeId,
    pub name: String,
}

impl Alternative {
    /// Creates an alternative with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AlternativeId::generate(),
            name: name.into(),
        }
    }

    /// Creates an alternative with a known id.
    pub fn with_id(id: AlternativeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A dimension alternatives are scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(default = "CriterionId::generate")]
    pub id: CriterionId,
    pub name: String,
}

impl Criterion {
    /// Creates a criterion with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CriterionId::generate(),
            name: name.into(),
        }
    }

    /// Creates a criterion with a known id.
    pub fn with_id(id: CriterionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alternatives_get_distinct_ids() {
        let a = Alternative::new("Tokyo");
        let b = Alternative::new("Tokyo");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn criterion_without_id_gets_one_on_deserialize() {
        let criterion: Criterion = serde_json::from_str(r#"{"name": "Price"}"#).unwrap();
        assert_eq!(criterion.name, "Price");
        assert!(!criterion.id.as_str().is_empty());
    }

    #[test]
    fn alternative_keeps_supplied_id() {
        let alt: Alternative = serde_json::from_str(r#"{"id": "a1", "name": "Oslo"}"#).unwrap();
        assert_eq!(alt.id.as_str(), "a1");
    }
}
