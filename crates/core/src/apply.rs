// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::ids::next_item_id;
use crate::state::{ShipmentEffect, State, TransitionResult};
use promo_tracker_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use promo_tracker_domain::{
    DomainError, Item, ItemDraft, ItemId, StaffDirectory, StaffMember, StageName, StageRecord,
    validate_draft_fields, validate_stage_index,
};
use time::Date;

/// Applies a command to the current state, producing the transition to commit.
///
/// The state is not modified; the caller commits the returned result.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `directory` - Staff directory used to resolve managers and actors
/// * `config` - Store behaviour options
/// * `command` - The command to apply
/// * `cause` - The cause or reason for this action
/// * `today` - The date stamped on completed stages
///
/// # Errors
///
/// Returns an error if:
/// - A required draft field is empty
/// - The stage index is outside the pipeline
/// - The item, manager, or actor does not exist
pub fn apply(
    state: &State,
    directory: &StaffDirectory,
    config: &StoreConfig,
    command: Command,
    cause: Cause,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateItem { draft } => create_item(state, directory, config, draft, cause, today),
        Command::ToggleStage {
            item_id,
            stage_index,
            actor_id,
        } => {
            // Validate index before lookups so a bad index never depends on store contents
            validate_stage_index(stage_index)?;
            let item: &Item = state
                .find(&item_id)
                .ok_or_else(|| DomainError::ItemNotFound(item_id.value().to_string()))?;
            let actor: &StaffMember = directory.require(actor_id)?;
            toggle_stage(item, stage_index, actor, cause, today)
        }
    }
}

/// Builds a new item from a draft.
///
/// # Errors
///
/// Returns an error if the draft's name or client is empty, its manager is unknown,
/// or the assigned identifier is already taken.
fn create_item(
    state: &State,
    directory: &StaffDirectory,
    config: &StoreConfig,
    draft: ItemDraft,
    cause: Cause,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    // Validate draft field constraints
    validate_draft_fields(&draft)?;

    let manager: StaffMember = directory.require(draft.manager_id)?.clone();
    let item_id: ItemId = next_item_id(&state.items, config.id_assignment)?;
    if state.find(&item_id).is_some() {
        return Err(DomainError::DuplicateItemId(item_id.value().to_string()).into());
    }

    let before: StateSnapshot = StateSnapshot::absent(&item_id);
    let item: Item = Item::received(item_id.clone(), draft, manager.clone(), today);
    let after: StateSnapshot = StateSnapshot::of_item(&item);

    let action: Action = Action::new(
        String::from("CreateItem"),
        Some(format!(
            "Received '{}' for client '{}' as {}",
            item.name, item.client, item_id
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(
        item_id,
        today,
        Actor::from_staff(&manager),
        cause,
        action,
        before,
        after,
    );

    Ok(TransitionResult {
        item,
        shipment: ShipmentEffect::None,
        audit_event,
    })
}

/// Flips one stage of an item and derives the effect on the recent-shipments register.
///
/// Completing a stage stamps `today` and `actor`; un-completing clears both.
/// Only the terminal stage produces a register effect.
///
/// # Arguments
///
/// * `item` - The item as currently stored
/// * `stage_index` - Pipeline index of the stage to flip
/// * `actor` - The staff member performing the toggle
/// * `cause` - The cause or reason for this action
/// * `today` - The date stamped if the stage becomes complete
///
/// # Errors
///
/// Returns `DomainError::StageIndexOutOfRange` if `stage_index` is greater than 4.
pub fn toggle_stage(
    item: &Item,
    stage_index: usize,
    actor: &StaffMember,
    cause: Cause,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    let stage: StageName = StageName::from_index(stage_index)?;
    let current: &StageRecord = item.stage(stage_index)?;
    let toggled: StageRecord = current.toggled(today, actor);
    let completed: bool = toggled.is_completed();

    let before: StateSnapshot = StateSnapshot::of_item(item);
    let mut updated: Item = item.clone();
    updated.stages[stage_index] = toggled;
    let after: StateSnapshot = StateSnapshot::of_item(&updated);

    let shipment: ShipmentEffect = if !stage.is_terminal() {
        ShipmentEffect::None
    } else if completed {
        ShipmentEffect::Shipped(updated.clone())
    } else {
        ShipmentEffect::Unshipped(updated.id.clone())
    };

    let verb: &str = if completed { "Completed" } else { "Reopened" };
    let action: Action = Action::new(
        String::from("ToggleStage"),
        Some(format!("{verb} stage '{stage}' of {}", updated.id)),
    );
    let audit_event: AuditEvent = AuditEvent::new(
        updated.id.clone(),
        today,
        Actor::from_staff(actor),
        cause,
        action,
        before,
        after,
    );

    Ok(TransitionResult {
        item: updated,
        shipment,
        audit_event,
    })
}
