//! Presence checks for request payloads.
//!
//! A field counts as present when it was supplied and is not the zero
//! value of its type: an empty name or a parent id of `0` is rejected the
//! same way as a missing one.

use crate::error::CoreError;
use crate::types::DbId;

/// Reject an empty name.
pub fn require_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("Field 'name' is required".to_string()));
    }
    Ok(())
}

/// Reject a zero parent reference such as `continent_id` or `country_id`.
pub fn require_id(field: &'static str, id: DbId) -> Result<(), CoreError> {
    if id == 0 {
        return Err(CoreError::Validation(format!("Field '{field}' is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn name_present() {
        assert!(require_name("Europe").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert_matches!(require_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_id_rejected_with_field_name() {
        let err = require_id("continent_id", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Field 'continent_id' is required"
        );
    }

    #[test]
    fn non_zero_id_accepted() {
        assert!(require_id("country_id", 7).is_ok());
        assert!(require_id("country_id", -3).is_ok());
    }
}
