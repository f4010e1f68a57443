// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Item name is empty or invalid.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Client name is empty or invalid.
    #[error("Invalid client: {0}")]
    InvalidClient(String),
    /// A stage index outside the fixed pipeline was addressed.
    #[error("Stage index {index} is out of range (must be between 0 and {max})")]
    StageIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The highest valid index.
        max: usize,
    },
    /// No item with the given identifier exists.
    #[error("Item '{0}' not found")]
    ItemNotFound(String),
    /// No staff member with the given identifier exists.
    #[error("Staff member {0} not found")]
    StaffNotFound(u32),
    /// An item identifier does not have the `P<number>` shape.
    #[error("Invalid item id: {0}")]
    InvalidItemId(String),
    /// A new item would reuse an identifier already in the store.
    #[error("Item id {0} is already in use")]
    DuplicateItemId(String),
    /// No further item identifier can be assigned.
    #[error("Item identifiers are exhausted after {0}")]
    ItemIdsExhausted(String),
    /// A stage name could not be parsed.
    #[error("Invalid stage name: {0}")]
    InvalidStageName(String),
    /// A print type could not be parsed.
    #[error("Invalid print type: {0}")]
    InvalidPrintType(String),
    /// A delivery method could not be parsed.
    #[error("Invalid delivery method: {0}")]
    InvalidDeliveryMethod(String),
}
