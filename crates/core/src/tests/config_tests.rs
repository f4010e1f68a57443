// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, IdAssignment, RegisterSeed, StoreConfig};

#[test]
fn test_defaults_preserve_literal_behaviour() {
    let config: StoreConfig = StoreConfig::default();

    assert_eq!(config.id_assignment, IdAssignment::LastInserted);
    assert_eq!(config.register_seed, RegisterSeed::StoreOrder);
}

#[test]
fn test_options_parse_from_their_display_form() {
    for option in [IdAssignment::LastInserted, IdAssignment::MaxSuffix] {
        assert_eq!(option.to_string().parse::<IdAssignment>(), Ok(option));
    }
    for option in [RegisterSeed::StoreOrder, RegisterSeed::ShippedDateDesc] {
        assert_eq!(option.to_string().parse::<RegisterSeed>(), Ok(option));
    }
}

#[test]
fn test_unknown_option_is_rejected() {
    let result: Result<IdAssignment, CoreError> = "newest".parse();

    assert_eq!(
        result,
        Err(CoreError::InvalidConfig {
            option: "id assignment",
            value: String::from("newest"),
        })
    );
}
