// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_item;
use crate::{awaiting_shipment_only, in_progress};
use promo_tracker_domain::Item;
use time::macros::date;

fn create_mixed_items() -> Vec<Item> {
    let on = date!(2024 - 03 - 01);
    vec![
        create_test_item(1, 5, on),
        create_test_item(2, 1, on),
        create_test_item(3, 4, on),
        create_test_item(4, 3, on),
    ]
}

#[test]
fn test_in_progress_excludes_shipped() {
    let items: Vec<Item> = create_mixed_items();

    let ids: Vec<&str> = in_progress(&items).map(|i| i.id.value()).collect();

    assert_eq!(ids, vec!["P002", "P003", "P004"]);
}

#[test]
fn test_awaiting_shipment_only_requires_packaging() {
    let items: Vec<Item> = create_mixed_items();

    let ids: Vec<&str> = awaiting_shipment_only(&items)
        .map(|i| i.id.value())
        .collect();

    assert_eq!(ids, vec!["P003"]);
}

#[test]
fn test_awaiting_is_subset_of_in_progress() {
    let items: Vec<Item> = create_mixed_items();
    let progressing: Vec<&Item> = in_progress(&items).collect();

    assert!(awaiting_shipment_only(&items).all(|item| progressing.contains(&item)));
}

#[test]
fn test_views_on_empty_list() {
    let items: Vec<Item> = Vec::new();

    assert_eq!(in_progress(&items).count(), 0);
    assert_eq!(awaiting_shipment_only(&items).count(), 0);
}
