// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over an [`ItemStore`].
//!
//! Each operation translates request DTOs into domain types, calls the core,
//! and translates the outcome back into response DTOs.

use promo_tracker::ItemStore;
use promo_tracker_audit::Cause;
use promo_tracker_domain::{
    DeliveryMethod, Item, ItemDraft, ItemId, PrintType, StaffDirectory, StaffMember,
};
use tracing::info;

use crate::auth::CredentialCheck;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AuditEventResponse, AuditLogResponse, CreateItemRequest, ItemListResponse, ItemResponse,
    LoginRequest, LoginResponse, StaffListResponse, StaffResponse, StageResponse,
    ToggleStageResponse,
};

/// Authenticates a staff member.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials are rejected.
pub fn login(
    credentials: &dyn CredentialCheck,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let member: StaffMember = credentials.authenticate(&request.username, &request.password)?;
    Ok(LoginResponse {
        message: format!("Logged in as {} ({})", member.name, member.role),
        staff: StaffResponse::from(&member),
    })
}

/// Lists the staff roster.
#[must_use]
pub fn list_staff(directory: &StaffDirectory) -> StaffListResponse {
    StaffListResponse {
        staff: directory.members().iter().map(StaffResponse::from).collect(),
    }
}

/// Lists every item in insertion order.
#[must_use]
pub fn list_items(store: &ItemStore) -> ItemListResponse {
    store.list_items().collect()
}

/// Fetches one item.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no item has this id.
pub fn get_item(store: &ItemStore, item_id: &str) -> Result<ItemResponse, ApiError> {
    store
        .get_item(&ItemId::new(item_id))
        .map(ItemResponse::from)
        .map_err(translate_core_error)
}

/// Registers a newly received order.
///
/// # Errors
///
/// Returns an error if:
/// - The name or client is blank
/// - The print type or delivery method is not recognised
/// - The manager does not exist
pub fn create_item(
    store: &mut ItemStore,
    request: CreateItemRequest,
    cause: Cause,
) -> Result<ItemResponse, ApiError> {
    // Translate API request into domain types
    let mut draft: ItemDraft = ItemDraft::new(&request.name, &request.client, request.manager_id);
    if let Some(quantity) = request.quantity {
        draft.quantity = quantity;
    }
    if let Some(raw) = request.print_type.as_deref() {
        draft.print_type = raw.parse::<PrintType>().map_err(translate_domain_error)?;
    }
    if let Some(raw) = request.delivery_method.as_deref() {
        draft.delivery_method = raw
            .parse::<DeliveryMethod>()
            .map_err(translate_domain_error)?;
    }

    let item: &Item = store
        .create_item(draft, cause)
        .map_err(translate_core_error)?;

    info!(item_id = %item.id, manager_id = item.manager.id, "Item created");
    Ok(ItemResponse::from(item))
}

/// Flips one stage of an item on behalf of a staff member.
///
/// # Errors
///
/// Returns an error if the stage index is out of range, or the item or actor is unknown.
pub fn toggle_stage(
    store: &mut ItemStore,
    item_id: &str,
    stage_index: usize,
    actor_id: u32,
    cause: Cause,
) -> Result<ToggleStageResponse, ApiError> {
    let item: ItemResponse = store
        .toggle_stage(&ItemId::new(item_id), stage_index, actor_id, cause)
        .map(ItemResponse::from)
        .map_err(translate_core_error)?;

    let event_id: Option<u64> = store.audit_log().last().and_then(|event| event.event_id);
    let stage: &StageResponse = &item.stages[stage_index];
    let stage_name: String = stage.stage.clone();
    let completed: bool = stage.completed;

    info!(
        item_id,
        stage = %stage_name,
        completed,
        actor_id,
        "Stage toggled"
    );

    Ok(ToggleStageResponse {
        message: format!(
            "Stage '{stage_name}' of {item_id} is now {}",
            if completed { "complete" } else { "pending" }
        ),
        item,
        stage: stage_name,
        completed,
        event_id,
    })
}

/// Items not yet shipped.
#[must_use]
pub fn in_progress(store: &ItemStore) -> ItemListResponse {
    store.in_progress().collect()
}

/// Items packaged and waiting for shipment.
#[must_use]
pub fn awaiting_shipment(store: &ItemStore) -> ItemListResponse {
    store.awaiting_shipment_only().collect()
}

/// The recent-shipments register, most recent first.
#[must_use]
pub fn recent_shipments(store: &ItemStore) -> ItemListResponse {
    store.recent_shipments().iter().collect()
}

/// The full audit log, oldest first.
#[must_use]
pub fn audit_log(store: &ItemStore) -> AuditLogResponse {
    AuditLogResponse {
        events: store
            .audit_log()
            .iter()
            .map(AuditEventResponse::from)
            .collect(),
    }
}
