// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod csv_import;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{CredentialCheck, DEFAULT_PASSCODE, RosterCredentials};
pub use csv_import::{
    CsvImportFailure, CsvImportResult, CsvPreviewResult, CsvRowResult, CsvRowStatus,
    import_csv_items, preview_csv_items,
};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    audit_log, awaiting_shipment, create_item, get_item, in_progress, list_items, list_staff,
    login, recent_shipments, toggle_stage,
};
pub use request_response::{
    AuditEventResponse, AuditLogResponse, CreateItemRequest, ItemListResponse, ItemResponse,
    LoginRequest, LoginResponse, StaffListResponse, StaffResponse, StageResponse,
    ToggleStageResponse,
};
