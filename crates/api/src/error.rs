// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use promo_tracker::CoreError;
use promo_tracker_domain::DomainError;
use thiserror::Error;

/// Credential check failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username or password was left blank.
    #[error("Authentication failed: username and password are both required")]
    MissingCredentials,
    /// No staff member matched, or the passcode was wrong.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The uploaded CSV could not be read as a whole.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::AuthenticationFailed {
                reason: String::from("username and password are both required"),
            },
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidClient(msg) => ApiError::InvalidInput {
            field: String::from("client"),
            message: msg,
        },
        DomainError::StageIndexOutOfRange { index, max } => ApiError::InvalidInput {
            field: String::from("stage_index"),
            message: format!("Stage index {index} is out of range. Must be between 0 and {max}"),
        },
        DomainError::ItemNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Item"),
            message: format!("Item '{id}' does not exist"),
        },
        DomainError::StaffNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff member"),
            message: format!("Staff member {id} does not exist"),
        },
        DomainError::InvalidItemId(msg) => ApiError::InvalidInput {
            field: String::from("item_id"),
            message: msg,
        },
        DomainError::DuplicateItemId(id) => ApiError::InvalidInput {
            field: String::from("item_id"),
            message: format!("Item id {id} is already in use; reorder or renumber the items"),
        },
        DomainError::ItemIdsExhausted(id) => ApiError::InvalidInput {
            field: String::from("item_id"),
            message: format!("No item id is available after {id}"),
        },
        DomainError::InvalidStageName(msg) => ApiError::InvalidInput {
            field: String::from("stage"),
            message: msg,
        },
        DomainError::InvalidPrintType(msg) => ApiError::InvalidInput {
            field: String::from("print_type"),
            message: msg,
        },
        DomainError::InvalidDeliveryMethod(msg) => ApiError::InvalidInput {
            field: String::from("delivery_method"),
            message: msg,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidConfig { option, value } => ApiError::InvalidInput {
            field: option.to_string(),
            message: format!("Unrecognised value '{value}'"),
        },
    }
}
