// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidClient(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid client: test");

    let err: DomainError = DomainError::StageIndexOutOfRange { index: 7, max: 4 };
    assert_eq!(
        format!("{err}"),
        "Stage index 7 is out of range (must be between 0 and 4)"
    );

    let err: DomainError = DomainError::ItemNotFound(String::from("P042"));
    assert_eq!(format!("{err}"), "Item 'P042' not found");

    let err: DomainError = DomainError::StaffNotFound(99);
    assert_eq!(format!("{err}"), "Staff member 99 not found");

    let err: DomainError = DomainError::InvalidItemId(String::from("X1"));
    assert_eq!(format!("{err}"), "Invalid item id: X1");

    let err: DomainError = DomainError::DuplicateItemId(String::from("P002"));
    assert_eq!(format!("{err}"), "Item id P002 is already in use");
}
