// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, AuthError, translate_core_error, translate_domain_error};
use promo_tracker::CoreError;
use promo_tracker_domain::DomainError;

#[test]
fn test_validation_errors_map_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::InvalidClient(String::from(
        "Client cannot be empty",
    )));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("client"),
            message: String::from("Client cannot be empty"),
        }
    );
}

#[test]
fn test_out_of_range_maps_to_invalid_input() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::StageIndexOutOfRange { index: 9, max: 4 },
    ));

    assert_eq!(
        err.to_string(),
        "Invalid input for field 'stage_index': Stage index 9 is out of range. Must be between 0 and 4"
    );
}

#[test]
fn test_not_found_errors_map_to_resource_not_found() {
    assert!(matches!(
        translate_domain_error(DomainError::ItemNotFound(String::from("P010"))),
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Item"
    ));
    assert!(matches!(
        translate_domain_error(DomainError::StaffNotFound(12)),
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Staff member"
    ));
}

#[test]
fn test_auth_errors_become_authentication_failed() {
    let err: ApiError = AuthError::MissingCredentials.into();

    assert!(matches!(err, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_duplicate_item_id_maps_to_invalid_input() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::DuplicateItemId(String::from("P002")),
    ));

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "item_id"
    ));
}
