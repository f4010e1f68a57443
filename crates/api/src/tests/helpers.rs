// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CreateItemRequest;
use promo_tracker::{FixedClock, ItemStore, StoreConfig, seed_items};
use promo_tracker_audit::Cause;
use promo_tracker_domain::{Item, StaffDirectory, default_roster};
use std::sync::Arc;
use time::macros::date;

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-1"), String::from("API request"))
}

pub fn create_test_store() -> ItemStore {
    let directory: StaffDirectory = default_roster();
    let items: Vec<Item> = seed_items(&directory).unwrap();
    ItemStore::with_items(
        directory,
        Arc::new(FixedClock::new(date!(2026 - 03 - 09))),
        StoreConfig::default(),
        items,
    )
    .unwrap()
}

pub fn create_test_request(name: &str, client: &str) -> CreateItemRequest {
    CreateItemRequest {
        name: name.to_string(),
        client: client.to_string(),
        quantity: None,
        print_type: None,
        delivery_method: None,
        manager_id: 2,
    }
}
