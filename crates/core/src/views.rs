// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived views over the item list. These hold no state of their own.

use promo_tracker_domain::Item;

/// Items whose shipment stage is not complete, in store order.
pub fn in_progress(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().filter(|item| !item.is_shipped())
}

/// Items that are packaged but not yet shipped, in store order.
///
/// Always a subset of [`in_progress`].
pub fn awaiting_shipment_only(items: &[Item]) -> impl Iterator<Item = &Item> {
    items
        .iter()
        .filter(|item| item.is_packaged() && !item.is_shipped())
}
