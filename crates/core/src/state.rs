// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::RegisterSeed;
use crate::register::RecentShipments;
use promo_tracker_audit::AuditEvent;
use promo_tracker_domain::{Item, ItemId};

/// All tracked items plus the recent-shipments register.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// Items in insertion order.
    pub items: Vec<Item>,
    /// Snapshots of recently shipped items.
    pub recent_shipments: RecentShipments,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            recent_shipments: RecentShipments::new(),
        }
    }

    /// Creates a state from existing items, seeding the register from those already shipped.
    #[must_use]
    pub fn from_items(items: Vec<Item>, seed: RegisterSeed) -> Self {
        let recent_shipments: RecentShipments = RecentShipments::seeded(&items, seed);
        Self {
            items,
            recent_shipments,
        }
    }

    /// Returns the position of an item in insertion order.
    #[must_use]
    pub fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == item_id)
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn find(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    /// Appends a newly created item.
    ///
    /// The caller has already checked that the id is unused. Returns the item's position.
    pub(crate) fn insert(&mut self, item: Item, shipment: ShipmentEffect) -> usize {
        self.items.push(item);
        self.apply_shipment(shipment);
        self.items.len() - 1
    }

    /// Replaces an existing item with its updated version.
    ///
    /// Returns the item's position, or `None` without changing anything if no
    /// item has this id.
    pub(crate) fn replace(&mut self, item: Item, shipment: ShipmentEffect) -> Option<usize> {
        let idx: usize = self.position(&item.id)?;
        self.items[idx] = item;
        self.apply_shipment(shipment);
        Some(idx)
    }

    fn apply_shipment(&mut self, shipment: ShipmentEffect) {
        match shipment {
            ShipmentEffect::None => {}
            ShipmentEffect::Shipped(snapshot) => self.recent_shipments.upsert(snapshot),
            ShipmentEffect::Unshipped(item_id) => self.recent_shipments.remove(&item_id),
        }
    }
}

/// What a transition does to the recent-shipments register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipmentEffect {
    /// The register is untouched.
    None,
    /// The item just shipped; register this snapshot.
    Shipped(Item),
    /// The item's shipment was cancelled; drop it from the register.
    Unshipped(ItemId),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The created or updated item.
    pub item: Item,
    /// The effect on the recent-shipments register.
    pub shipment: ShipmentEffect,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
