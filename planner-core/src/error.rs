//! Error kinds surfaced by the store.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Required fields missing or blank on create/update. The store is
    /// left untouched; `missing` names every offending field.
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// Operation referenced an id the store does not hold.
    #[error("no task with id {0}")]
    NotFound(u64),

    /// Import payload was not a sequence of task records.
    #[error("invalid import payload: {0}")]
    Format(String),
}

impl StoreError {
    pub(crate) fn missing(missing: Vec<&'static str>) -> Self {
        StoreError::Validation { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_fields() {
        let err = StoreError::missing(vec!["title", "dueDate"]);
        assert_eq!(err.to_string(), "missing required fields: title, dueDate");
    }
}
