// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use std::str::FromStr;

/// How the next item identifier is derived from the existing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAssignment {
    /// Increment the suffix of the most recently inserted item.
    ///
    /// Only correct while items are appended in increasing-id order and
    /// never removed or reordered.
    #[default]
    LastInserted,
    /// Increment the largest suffix among all items.
    MaxSuffix,
}

impl IdAssignment {
    /// Returns the command-line spelling of this option.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LastInserted => "last-inserted",
            Self::MaxSuffix => "max-suffix",
        }
    }
}

impl FromStr for IdAssignment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-inserted" => Ok(Self::LastInserted),
            "max-suffix" => Ok(Self::MaxSuffix),
            _ => Err(CoreError::InvalidConfig {
                option: "id assignment",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the recent-shipments register is filled when a store is built from existing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterSeed {
    /// Shipped items in store order, no date comparison.
    #[default]
    StoreOrder,
    /// Shipped items ordered by shipment date, newest first.
    ShippedDateDesc,
}

impl RegisterSeed {
    /// Returns the command-line spelling of this option.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StoreOrder => "store-order",
            Self::ShippedDateDesc => "shipped-date-desc",
        }
    }
}

impl FromStr for RegisterSeed {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store-order" => Ok(Self::StoreOrder),
            "shipped-date-desc" => Ok(Self::ShippedDateDesc),
            _ => Err(CoreError::InvalidConfig {
                option: "register seed",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RegisterSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tunable behaviour of an [`ItemStore`](crate::ItemStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Identifier derivation for new items.
    pub id_assignment: IdAssignment,
    /// Ordering used when seeding the recent-shipments register.
    pub register_seed: RegisterSeed,
}
