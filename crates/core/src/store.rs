// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The item store: current state, the audit log, and the clock and roster
//! needed to apply commands.

use crate::apply::apply;
use crate::clock::{Clock, SystemClock};
use crate::command::Command;
use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use crate::views;
use promo_tracker_audit::{AuditEvent, Cause};
use promo_tracker_domain::{
    DomainError, Item, ItemDraft, ItemId, StaffDirectory, StaffMember, default_roster,
};
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

/// Where a committed item lands in the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Append,
    Replace,
}

/// Owns the tracked items and applies commands to them.
///
/// Every successful mutation appends exactly one event to the audit log.
/// A failed command leaves items, register, and log untouched.
pub struct ItemStore {
    state: State,
    audit_log: Vec<AuditEvent>,
    next_event_id: u64,
    directory: StaffDirectory,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.state.items.len())
            .field("recent_shipments", &self.state.recent_shipments.len())
            .field("audit_events", &self.audit_log.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new(default_roster(), Arc::new(SystemClock))
    }
}

impl ItemStore {
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new(directory: StaffDirectory, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(directory, clock, StoreConfig::default())
    }

    /// Creates an empty store with explicit configuration.
    #[must_use]
    pub fn with_config(
        directory: StaffDirectory,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
    ) -> Self {
        Self {
            state: State::new(),
            audit_log: Vec::new(),
            next_event_id: 1,
            directory,
            config,
            clock,
        }
    }

    /// Creates a store pre-populated with `items`.
    ///
    /// The recent-shipments register is seeded from the shipped items according
    /// to `config.register_seed`. Seeding does not write audit events.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidItemId` if two items share an id.
    pub fn with_items(
        directory: StaffDirectory,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
        items: Vec<Item>,
    ) -> Result<Self, CoreError> {
        for (idx, item) in items.iter().enumerate() {
            if items[..idx].iter().any(|earlier| earlier.id == item.id) {
                return Err(DomainError::InvalidItemId(format!(
                    "duplicate id {}",
                    item.id
                ))
                .into());
            }
        }
        let state: State = State::from_items(items, config.register_seed);
        info!(
            items = state.items.len(),
            recent_shipments = state.recent_shipments.len(),
            "Item store seeded"
        );
        Ok(Self {
            state,
            audit_log: Vec::new(),
            next_event_id: 1,
            directory,
            config,
            clock,
        })
    }

    /// Applies a command and commits its result.
    ///
    /// # Errors
    ///
    /// Returns the validation or lookup error raised by the command; the store is unchanged.
    pub fn execute(&mut self, command: Command, cause: Cause) -> Result<&Item, CoreError> {
        let today: Date = self.clock.today();
        let placement: Placement = match command {
            Command::CreateItem { .. } => Placement::Append,
            Command::ToggleStage { .. } => Placement::Replace,
        };
        let result: TransitionResult = apply(
            &self.state,
            &self.directory,
            &self.config,
            command,
            cause,
            today,
        )?;
        self.commit(result, placement)
    }

    /// Creates a new item from a draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or client is blank, the manager is unknown,
    /// or the next identifier is already in use.
    pub fn create_item(&mut self, draft: ItemDraft, cause: Cause) -> Result<&Item, CoreError> {
        self.execute(Command::CreateItem { draft }, cause)
    }

    /// Flips the completion of one stage of an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage index is out of range, or the item or actor is unknown.
    pub fn toggle_stage(
        &mut self,
        item_id: &ItemId,
        stage_index: usize,
        actor_id: u32,
        cause: Cause,
    ) -> Result<&Item, CoreError> {
        self.execute(
            Command::ToggleStage {
                item_id: item_id.clone(),
                stage_index,
                actor_id,
            },
            cause,
        )
    }

    fn commit(
        &mut self,
        result: TransitionResult,
        placement: Placement,
    ) -> Result<&Item, CoreError> {
        let item_id: ItemId = result.item.id.clone();
        let idx: usize = match placement {
            Placement::Append => self.state.insert(result.item, result.shipment),
            Placement::Replace => self
                .state
                .replace(result.item, result.shipment)
                .ok_or_else(|| DomainError::ItemNotFound(item_id.value().to_string()))?,
        };
        let event_id: u64 = self.next_event_id;
        self.next_event_id += 1;
        let event: AuditEvent = result.audit_event.recorded(event_id);
        info!(
            event_id,
            item_id = %event.item_id,
            action = %event.action.name,
            actor = %event.actor.name,
            "Committed transition"
        );
        self.audit_log.push(event);
        debug!(
            recent_shipments = self.state.recent_shipments.len(),
            "Register after commit"
        );
        Ok(&self.state.items[idx])
    }

    /// Looks up an item by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no item has this id.
    pub fn get_item(&self, item_id: &ItemId) -> Result<&Item, CoreError> {
        self.state
            .find(item_id)
            .ok_or_else(|| DomainError::ItemNotFound(item_id.value().to_string()).into())
    }

    /// Returns every item in insertion order.
    pub fn list_items(&self) -> impl Iterator<Item = &Item> {
        self.state.items.iter()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.items.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Items whose shipment stage is not yet complete.
    pub fn in_progress(&self) -> impl Iterator<Item = &Item> {
        views::in_progress(&self.state.items)
    }

    /// Items that are packaged but not yet shipped.
    pub fn awaiting_shipment_only(&self) -> impl Iterator<Item = &Item> {
        views::awaiting_shipment_only(&self.state.items)
    }

    /// Recently shipped snapshots, most recent first.
    #[must_use]
    pub fn recent_shipments(&self) -> &[Item] {
        self.state.recent_shipments.entries()
    }

    /// Every recorded audit event, oldest first.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditEvent] {
        &self.audit_log
    }

    /// The staff roster used to resolve managers and actors.
    #[must_use]
    pub const fn directory(&self) -> &StaffDirectory {
        &self.directory
    }

    /// Resolves a staff id against the roster.
    #[must_use]
    pub fn resolve_staff(&self, staff_id: u32) -> Option<&StaffMember> {
        self.directory.resolve(staff_id)
    }

    /// The active store options.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }
}
