// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_tracker_domain::{ItemDraft, ItemId};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a newly received order.
    CreateItem {
        /// The order details.
        draft: ItemDraft,
    },
    /// Flip the completion of one pipeline stage.
    ToggleStage {
        /// The item to update.
        item_id: ItemId,
        /// Pipeline index of the stage, 0 through 4.
        stage_index: usize,
        /// Staff id of the person performing the toggle.
        actor_id: u32,
    },
}
