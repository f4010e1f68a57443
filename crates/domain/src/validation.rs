// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pipeline::TERMINAL_STAGE_INDEX;
use crate::types::ItemDraft;

/// Validates that a draft's required fields are present.
///
/// This function checks that required fields are not blank.
/// It does NOT check that the manager exists (that requires the staff directory).
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The product name is empty or whitespace
/// - The client is empty or whitespace
pub fn validate_draft_fields(draft: &ItemDraft) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if draft.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: client must not be empty
    if draft.client.trim().is_empty() {
        return Err(DomainError::InvalidClient(String::from(
            "Client cannot be empty",
        )));
    }

    // Quantity is a display constraint only.

    Ok(())
}

/// Validates that a stage index addresses a stage of the fixed pipeline.
///
/// # Errors
///
/// Returns `DomainError::StageIndexOutOfRange` if `index` is greater than the terminal index.
pub const fn validate_stage_index(index: usize) -> Result<(), DomainError> {
    if index > TERMINAL_STAGE_INDEX {
        return Err(DomainError::StageIndexOutOfRange {
            index,
            max: TERMINAL_STAGE_INDEX,
        });
    }
    Ok(())
}
