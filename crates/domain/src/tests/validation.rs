// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ItemDraft, validate_draft_fields, validate_stage_index};

#[test]
fn test_validate_draft_fields_accepts_valid_draft() {
    let draft: ItemDraft = ItemDraft::new("Tote Bag", "Acme", 3);

    let result: Result<(), DomainError> = validate_draft_fields(&draft);
    assert!(result.is_ok());
}

#[test]
fn test_validate_draft_fields_rejects_empty_name() {
    let draft: ItemDraft = ItemDraft::new("", "Acme", 3);

    let result: Result<(), DomainError> = validate_draft_fields(&draft);
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_draft_fields_rejects_whitespace_name() {
    let draft: ItemDraft = ItemDraft::new("   ", "Acme", 3);

    let result: Result<(), DomainError> = validate_draft_fields(&draft);
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_draft_fields_rejects_empty_client() {
    let draft: ItemDraft = ItemDraft::new("Tote Bag", "", 3);

    let result: Result<(), DomainError> = validate_draft_fields(&draft);
    assert!(matches!(result, Err(DomainError::InvalidClient(_))));
}

#[test]
fn test_validate_draft_fields_reports_name_before_client() {
    let draft: ItemDraft = ItemDraft::new("", "", 3);

    let result: Result<(), DomainError> = validate_draft_fields(&draft);
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_draft_fields_does_not_clamp_quantity() {
    let mut draft: ItemDraft = ItemDraft::new("Tote Bag", "Acme", 3);
    draft.quantity = 0;
    assert!(validate_draft_fields(&draft).is_ok());

    draft.quantity = 50_000;
    assert!(validate_draft_fields(&draft).is_ok());
}

#[test]
fn test_validate_stage_index_bounds() {
    for index in 0..=4 {
        assert!(validate_stage_index(index).is_ok());
    }
    assert_eq!(
        validate_stage_index(5),
        Err(DomainError::StageIndexOutOfRange { index: 5, max: 4 })
    );
    assert_eq!(
        validate_stage_index(7),
        Err(DomainError::StageIndexOutOfRange { index: 7, max: 4 })
    );
}
