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
    clippy::all
)]

#[cfg(test)]
mod tests;

use promo_tracker_domain::{Item, ItemId, StaffMember};
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Represents the staff member performing an action.
///
/// The actor is a stable copy of the staff member's identity at the time of
/// the action, so events stay readable even if the roster changes between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The staff member's id.
    pub staff_id: u32,
    /// The staff member's display name.
    pub name: String,
    /// The staff member's role.
    pub role: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(staff_id: u32, name: String, role: String) -> Self {
        Self {
            staff_id,
            name,
            role,
        }
    }

    /// Creates an Actor from a directory entry.
    #[must_use]
    pub fn from_staff(member: &StaffMember) -> Self {
        Self::new(member.id, member.name.clone(), member.role.clone())
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a state change was initiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, import row).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`CreateItem`", "`ToggleStage`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual snapshot of one item's pipeline progress.
///
/// `progress` has one character per stage in pipeline order: `1` for
/// completed, `0` for pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Captures the progress of an item.
    #[must_use]
    pub fn of_item(item: &Item) -> Self {
        let progress: String = item
            .stages
            .iter()
            .map(|record| if record.is_completed() { '1' } else { '0' })
            .collect();
        Self::new(format!(
            "item={},progress={progress},shipped={}",
            item.id,
            item.is_shipped()
        ))
    }

    /// Snapshot used as the "before" state of a creation.
    #[must_use]
    pub fn absent(item_id: &ItemId) -> Self {
        Self::new(format!("item={item_id},absent"))
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change must produce exactly one audit event.
/// Audit events are immutable once created and capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The item's progress before and after the transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position in the audit log, assigned when the event is recorded.
    /// `None` for events that have not been recorded yet.
    pub event_id: Option<u64>,
    /// The item the action applied to.
    pub item_id: ItemId,
    /// The day the action took effect.
    #[serde(with = "iso_date")]
    pub recorded_on: Date,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new, not yet recorded `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `item_id` - The item the action applied to
    /// * `recorded_on` - The day the action took effect
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        item_id: ItemId,
        recorded_on: Date,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            item_id,
            recorded_on,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns this event stamped with its position in the audit log.
    #[must_use]
    pub fn recorded(self, event_id: u64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}
