// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_tracker_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A store option could not be parsed.
    #[error("Invalid configuration value '{value}' for {option}")]
    InvalidConfig {
        /// The option being set.
        option: &'static str,
        /// The rejected value.
        value: String,
    },
}
