// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, ItemStore, StoreConfig, seed_items};
use promo_tracker_audit::Cause;
use promo_tracker_domain::{
    DeliveryMethod, Item, ItemDraft, ItemId, PrintType, STAGE_COUNT, StaffDirectory, StaffMember,
    StageName, StageRecord, default_roster,
};
use std::sync::Arc;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 03 - 09);

pub fn create_test_directory() -> StaffDirectory {
    default_roster()
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Stage board click"))
}

pub fn create_test_draft() -> ItemDraft {
    ItemDraft::new("에코백", "카카오", 3)
}

pub fn create_empty_store() -> ItemStore {
    ItemStore::new(create_test_directory(), Arc::new(FixedClock::new(TODAY)))
}

pub fn create_seeded_store() -> ItemStore {
    create_seeded_store_with(StoreConfig::default())
}

pub fn create_seeded_store_with(config: StoreConfig) -> ItemStore {
    let directory: StaffDirectory = create_test_directory();
    let items: Vec<Item> = seed_items(&directory).unwrap();
    ItemStore::with_items(directory, Arc::new(FixedClock::new(TODAY)), config, items).unwrap()
}

/// Builds an item whose first `completed` stages are done on `on` by staff 1.
pub fn create_test_item(sequence: u32, completed: usize, on: Date) -> Item {
    let directory: StaffDirectory = create_test_directory();
    let staff: StaffMember = directory.resolve(1).unwrap().clone();
    let stages: [StageRecord; STAGE_COUNT] = StageName::ALL.map(|stage| {
        if stage.index() < completed {
            StageRecord::completed(stage, on, staff.clone())
        } else {
            StageRecord::pending(stage)
        }
    });
    Item {
        id: ItemId::from_sequence(sequence),
        name: format!("Item {sequence}"),
        client: String::from("Client"),
        quantity: 10,
        print_type: PrintType::Laser,
        delivery_method: DeliveryMethod::Courier,
        manager: staff,
        stages,
    }
}
