// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A member of the workshop staff.
///
/// Staff members are reference data: they are loaded once at startup and
/// are never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffMember {
    /// Stable numeric identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Job title or team.
    pub role: String,
}

impl StaffMember {
    /// Creates a new `StaffMember`.
    #[must_use]
    pub fn new(id: u32, name: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}

/// Registry of the staff members known to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaffDirectory {
    members: Vec<StaffMember>,
}

impl StaffDirectory {
    /// Creates a directory from a list of members.
    ///
    /// If two members share an id, the first one wins on lookup.
    #[must_use]
    pub const fn new(members: Vec<StaffMember>) -> Self {
        Self { members }
    }

    /// Looks up a staff member by id.
    #[must_use]
    pub fn resolve(&self, id: u32) -> Option<&StaffMember> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Looks up a staff member by id, failing if unknown.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StaffNotFound` if no member has this id.
    pub fn require(&self, id: u32) -> Result<&StaffMember, DomainError> {
        self.resolve(id).ok_or(DomainError::StaffNotFound(id))
    }

    /// Finds the first member, in roster order, whose name equals or contains `query`.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<&StaffMember> {
        if query.is_empty() {
            return None;
        }
        self.members
            .iter()
            .find(|member| member.name == query || member.name.contains(query))
    }

    /// Returns all members in roster order.
    #[must_use]
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the directory has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The workshop's staff roster.
#[must_use]
pub fn default_roster() -> StaffDirectory {
    StaffDirectory::new(vec![
        StaffMember::new(1, "신흥철", "이사"),
        StaffMember::new(2, "장정금", "실장"),
        StaffMember::new(3, "신종우", "대표"),
        StaffMember::new(4, "조재호", "디자인팀장"),
        StaffMember::new(5, "이현주", "OP매니저"),
        StaffMember::new(6, "효선", "OP팀"),
        StaffMember::new(7, "앰버", "OP팀"),
    ])
}
