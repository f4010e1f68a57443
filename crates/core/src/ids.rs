// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::IdAssignment;
use promo_tracker_domain::{DomainError, Item, ItemId};

/// Computes the identifier for the next item appended to `items`.
///
/// Identifiers whose suffix cannot be parsed count as zero.
///
/// # Errors
///
/// Returns `DomainError::ItemIdsExhausted` if the current suffix is already `u32::MAX`.
pub fn next_item_id(items: &[Item], strategy: IdAssignment) -> Result<ItemId, DomainError> {
    let current: u32 = match strategy {
        IdAssignment::LastInserted => items
            .last()
            .and_then(|item| item.id.sequence())
            .unwrap_or(0),
        IdAssignment::MaxSuffix => items
            .iter()
            .filter_map(|item| item.id.sequence())
            .max()
            .unwrap_or(0),
    };
    current
        .checked_add(1)
        .map(ItemId::from_sequence)
        .ok_or_else(|| DomainError::ItemIdsExhausted(ItemId::from_sequence(current).to_string()))
}
