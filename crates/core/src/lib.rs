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

mod apply;
mod clock;
mod command;
mod config;
mod error;
mod fixtures;
mod ids;
mod register;
mod state;
mod store;
mod views;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, toggle_stage};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use config::{IdAssignment, RegisterSeed, StoreConfig};
pub use error::CoreError;
pub use fixtures::seed_items;
pub use ids::next_item_id;
pub use register::{RECENT_SHIPMENTS_CAPACITY, RecentShipments};
pub use state::{ShipmentEffect, State, TransitionResult};
pub use store::ItemStore;
pub use views::{awaiting_shipment_only, in_progress};
