// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pipeline::{
    DeliveryMethod, INTAKE_STAGE_INDEX, PACKAGED_STAGE_INDEX, PrintType, STAGE_COUNT, StageName,
    TERMINAL_STAGE_INDEX,
};
use crate::staff::StaffMember;
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Prefix shared by every item identifier.
pub const ITEM_ID_PREFIX: &str = "P";

/// Minimum number of digits in an item identifier.
pub const ITEM_ID_WIDTH: usize = 3;

/// Identifier of a tracked item, e.g. `P004`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId {
    value: String,
}

impl ItemId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Builds the identifier for a sequence number, zero-padded to three digits.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        Self {
            value: format!("{ITEM_ID_PREFIX}{sequence:0width$}", width = ITEM_ID_WIDTH),
        }
    }

    /// Returns the numeric suffix, if the identifier has the `P<digits>` shape.
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.value
            .strip_prefix(ITEM_ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Who completed a stage, and on which day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// The day the stage was marked complete.
    #[serde(with = "iso_date")]
    pub on: Date,
    /// The staff member who marked it.
    pub by: StaffMember,
}

/// One slot in an item's stage sequence.
///
/// The completion date and the attributed staff member travel together:
/// a record either has both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Which pipeline stage this record tracks.
    pub stage: StageName,
    completion: Option<Completion>,
}

impl StageRecord {
    /// Creates an incomplete record.
    #[must_use]
    pub const fn pending(stage: StageName) -> Self {
        Self {
            stage,
            completion: None,
        }
    }

    /// Creates a completed record.
    #[must_use]
    pub const fn completed(stage: StageName, on: Date, by: StaffMember) -> Self {
        Self {
            stage,
            completion: Some(Completion { on, by }),
        }
    }

    /// Returns the record with its completion flipped.
    ///
    /// Completing stamps `on` and `by`. Un-completing discards the previous
    /// attribution entirely.
    #[must_use]
    pub fn toggled(&self, on: Date, by: &StaffMember) -> Self {
        if self.is_completed() {
            Self::pending(self.stage)
        } else {
            Self::completed(self.stage, on, by.clone())
        }
    }

    /// Returns true if the stage is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Returns the completion details, if complete.
    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Returns the day the stage was completed, if complete.
    #[must_use]
    pub fn completed_on(&self) -> Option<Date> {
        self.completion.as_ref().map(|c| c.on)
    }

    /// Returns the staff member who completed the stage, if complete.
    #[must_use]
    pub fn updated_by(&self) -> Option<&StaffMember> {
        self.completion.as_ref().map(|c| &c.by)
    }
}

/// Creation input for a new item, as collected by the order form or an import row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Product name.
    pub name: String,
    /// Ordering client.
    pub client: String,
    /// Number of units. The 1..=10000 range is a form hint only.
    pub quantity: u32,
    /// Branding method.
    pub print_type: PrintType,
    /// Delivery method.
    pub delivery_method: DeliveryMethod,
    /// Id of the staff member managing the order.
    pub manager_id: u32,
}

impl ItemDraft {
    /// Creates a draft with the order form's defaults: one unit, laser print, courier.
    #[must_use]
    pub fn new(name: &str, client: &str, manager_id: u32) -> Self {
        Self {
            name: name.to_string(),
            client: client.to_string(),
            quantity: 1,
            print_type: PrintType::default(),
            delivery_method: DeliveryMethod::default(),
            manager_id,
        }
    }
}

/// A tracked order moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Product name.
    pub name: String,
    /// Ordering client.
    pub client: String,
    /// Number of units.
    pub quantity: u32,
    /// Branding method.
    pub print_type: PrintType,
    /// Delivery method.
    pub delivery_method: DeliveryMethod,
    /// Staff member managing the order.
    pub manager: StaffMember,
    /// One record per pipeline stage, in canonical order.
    pub stages: [StageRecord; STAGE_COUNT],
}

impl Item {
    /// Builds a freshly received item from a draft.
    ///
    /// Intake is stamped as completed by the manager on `today`; every later
    /// stage starts pending.
    #[must_use]
    pub fn received(id: ItemId, draft: ItemDraft, manager: StaffMember, today: Date) -> Self {
        let stages: [StageRecord; STAGE_COUNT] = StageName::ALL.map(|stage| {
            if stage.index() == INTAKE_STAGE_INDEX {
                StageRecord::completed(stage, today, manager.clone())
            } else {
                StageRecord::pending(stage)
            }
        });
        Self {
            id,
            name: draft.name,
            client: draft.client,
            quantity: draft.quantity,
            print_type: draft.print_type,
            delivery_method: draft.delivery_method,
            manager,
            stages,
        }
    }

    /// Returns the record at a pipeline index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StageIndexOutOfRange` if `index` is not a valid stage index.
    pub fn stage(&self, index: usize) -> Result<&StageRecord, DomainError> {
        self.stages
            .get(index)
            .ok_or(DomainError::StageIndexOutOfRange {
                index,
                max: TERMINAL_STAGE_INDEX,
            })
    }

    /// Returns true once the shipment stage is complete.
    #[must_use]
    pub const fn is_shipped(&self) -> bool {
        self.stages[TERMINAL_STAGE_INDEX].is_completed()
    }

    /// Returns true once the packaging stage is complete.
    #[must_use]
    pub const fn is_packaged(&self) -> bool {
        self.stages[PACKAGED_STAGE_INDEX].is_completed()
    }

    /// Returns the day the item shipped, if it has.
    #[must_use]
    pub fn shipped_on(&self) -> Option<Date> {
        self.stages[TERMINAL_STAGE_INDEX].completed_on()
    }

    /// Returns the furthest completed stage, if any.
    #[must_use]
    pub fn latest_completed_stage(&self) -> Option<StageName> {
        self.stages
            .iter()
            .rev()
            .find(|record| record.is_completed())
            .map(|record| record.stage)
    }
}
