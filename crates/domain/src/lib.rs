// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod pipeline;
mod staff;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use pipeline::{
    DeliveryMethod, INTAKE_STAGE_INDEX, PACKAGED_STAGE_INDEX, PrintType, STAGE_COUNT, StageName,
    TERMINAL_STAGE_INDEX,
};
pub use staff::{StaffDirectory, StaffMember, default_roster};
pub use types::{Completion, ITEM_ID_PREFIX, ITEM_ID_WIDTH, Item, ItemDraft, ItemId, StageRecord};
pub use validation::{validate_draft_fields, validate_stage_index};
