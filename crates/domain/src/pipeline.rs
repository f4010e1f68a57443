// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed production pipeline and its companion enumerations.
//!
//! Every item passes through the same five stages in the same order.
//! The stage list is never extended, reordered, or shortened at runtime.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of stages in the pipeline.
pub const STAGE_COUNT: usize = 5;

/// Index of the intake stage, completed when an item is created.
pub const INTAKE_STAGE_INDEX: usize = 0;

/// Index of the packaging stage.
pub const PACKAGED_STAGE_INDEX: usize = 3;

/// Index of the terminal (shipment) stage.
pub const TERMINAL_STAGE_INDEX: usize = STAGE_COUNT - 1;

/// A checkpoint in the production pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    /// Goods received at the workshop
    Received,
    /// Client signed off on the print proof
    PrintApproved,
    /// Printing is underway
    Printing,
    /// Goods are packed
    Packaged,
    /// Goods left the workshop
    Shipped,
}

impl StageName {
    /// All stages in canonical pipeline order.
    pub const ALL: [Self; STAGE_COUNT] = [
        Self::Received,
        Self::PrintApproved,
        Self::Printing,
        Self::Packaged,
        Self::Shipped,
    ];

    /// Returns the stage at the given pipeline index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StageIndexOutOfRange` if `index` is not a valid stage index.
    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::StageIndexOutOfRange {
                index,
                max: TERMINAL_STAGE_INDEX,
            })
    }

    /// Returns this stage's position in the pipeline.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Received => 0,
            Self::PrintApproved => 1,
            Self::Printing => 2,
            Self::Packaged => 3,
            Self::Shipped => 4,
        }
    }

    /// Returns true for the shipment stage.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Shipped)
    }

    /// Returns the wire representation of the stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::PrintApproved => "print_approved",
            Self::Printing => "printing",
            Self::Packaged => "packaged",
            Self::Shipped => "shipped",
        }
    }

    /// Returns the label shown to workshop staff.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Received => "입고",
            Self::PrintApproved => "인쇄 컨펌",
            Self::Printing => "인쇄 중",
            Self::Packaged => "포장",
            Self::Shipped => "발송",
        }
    }

    /// Returns the icon name the front end renders for this stage.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Received => "warehouse",
            Self::PrintApproved => "check-circle",
            Self::Printing => "printer",
            Self::Packaged => "package",
            Self::Shipped => "truck",
        }
    }
}

impl FromStr for StageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s || stage.label() == s)
            .ok_or_else(|| DomainError::InvalidStageName(s.to_string()))
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the client's branding is applied to the goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintType {
    /// Laser engraving
    #[default]
    Laser,
    /// Heat transfer
    Transfer,
    /// Plain goods, no branding
    NoPrint,
    /// Screen printing
    Screen,
    /// Digital printing
    Digital,
}

impl PrintType {
    /// All print types in display order.
    pub const ALL: [Self; 5] = [
        Self::Laser,
        Self::Transfer,
        Self::NoPrint,
        Self::Screen,
        Self::Digital,
    ];

    /// Returns the wire representation of the print type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::Transfer => "transfer",
            Self::NoPrint => "no_print",
            Self::Screen => "screen",
            Self::Digital => "digital",
        }
    }

    /// Returns the label shown to workshop staff.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Laser => "레이저 인쇄",
            Self::Transfer => "전사 인쇄",
            Self::NoPrint => "인쇄 없음",
            Self::Screen => "스크린 인쇄",
            Self::Digital => "디지털 인쇄",
        }
    }

    /// Returns the icon name the front end renders for this print type.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Laser | Self::Screen | Self::Digital => "printer",
            Self::Transfer => "info",
            Self::NoPrint => "x",
        }
    }
}

impl FromStr for PrintType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed) || kind.label() == trimmed)
            .ok_or_else(|| DomainError::InvalidPrintType(s.to_string()))
    }
}

impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How finished goods reach the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Client collects in person
    DirectPickup,
    /// Parcel courier
    #[default]
    Courier,
    /// Same-day motorbike courier
    QuickService,
}

impl DeliveryMethod {
    /// All delivery methods in display order.
    pub const ALL: [Self; 3] = [Self::DirectPickup, Self::Courier, Self::QuickService];

    /// Returns the wire representation of the delivery method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DirectPickup => "direct_pickup",
            Self::Courier => "courier",
            Self::QuickService => "quick_service",
        }
    }

    /// Returns the label shown to workshop staff.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DirectPickup => "직접 인수",
            Self::Courier => "택배",
            Self::QuickService => "퀵 서비스",
        }
    }

    /// Returns the icon name the front end renders for this delivery method.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::DirectPickup => "shopping-bag",
            Self::Courier => "truck",
            Self::QuickService => "map-pin",
        }
    }
}

impl FromStr for DeliveryMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| {
                method.as_str().eq_ignore_ascii_case(trimmed) || method.label() == trimmed
            })
            .ok_or_else(|| DomainError::InvalidDeliveryMethod(s.to_string()))
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
