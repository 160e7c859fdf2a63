// Unit Tests for the Request Field Types
//
// UNIT UNDER TEST: RequestSlot, RequestInfo
//
// TEST COVERAGE:
//   - Presence semantics of Missing / Null / Present
//   - Conversion from Option
//   - Serialized form

use crate::core_types::request::{RequestInfo, RequestSlot};
use crate::tests::helpers::create_test_request_info;

#[cfg(test)]
mod request_slot_tests {
    use super::*;

    #[test]
    fn test_presence_by_state() {
        // Test verifies only Missing counts as absent

        // Assert
        assert!(!RequestSlot::Missing.is_present());
        assert!(RequestSlot::Null.is_present());
        assert!(RequestSlot::Present(create_test_request_info()).is_present());
        assert_eq!(RequestSlot::default(), RequestSlot::Missing);
    }

    #[test]
    fn test_from_option() {
        // Test verifies None maps to the null sentinel, not to Missing

        // Arrange
        let info = create_test_request_info();

        // Assert
        assert_eq!(RequestSlot::from(None), RequestSlot::Null);
        assert_eq!(
            RequestSlot::from(Some(info.clone())),
            RequestSlot::Present(info)
        );
    }

    #[test]
    fn test_serialized_form() {
        // Test verifies the tagged JSON layout used in structured logs

        // Arrange
        let present = RequestSlot::Present(RequestInfo::new("openai", "gpt-4", "req-7"));

        // Act
        let null_json = serde_json::to_value(RequestSlot::Null).unwrap();
        let present_json = serde_json::to_value(&present).unwrap();

        // Assert
        assert_eq!(null_json, serde_json::json!({ "state": "null" }));
        assert_eq!(
            present_json,
            serde_json::json!({
                "state": "present",
                "value": { "provider": "openai", "model": "gpt-4", "request_id": "req-7" }
            })
        );
    }
}
