// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use promo_tracker_audit::AuditEvent;
use promo_tracker_domain::{Item, StaffMember, StageRecord};
use serde::{Deserialize, Serialize};

/// API request to log in as a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Full or partial staff name.
    pub username: String,
    /// The shared passcode.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The staff member now acting.
    pub staff: StaffResponse,
    /// A success message.
    pub message: String,
}

/// A staff member as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffResponse {
    /// Staff id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Role title.
    pub role: String,
}

impl From<&StaffMember> for StaffResponse {
    fn from(member: &StaffMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
        }
    }
}

/// API response listing the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffListResponse {
    /// Staff members in roster order.
    pub staff: Vec<StaffResponse>,
}

/// API request to register a newly received order.
///
/// Enumerations are accepted by wire name (`laser`) or display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateItemRequest {
    /// Product name.
    pub name: String,
    /// Ordering client.
    pub client: String,
    /// Number of units; defaults to 1.
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Branding method; defaults to laser.
    #[serde(default)]
    pub print_type: Option<String>,
    /// Delivery method; defaults to courier.
    #[serde(default)]
    pub delivery_method: Option<String>,
    /// Staff id of the order manager.
    pub manager_id: u32,
}

/// One pipeline stage of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResponse {
    /// Pipeline index, 0 through 4.
    pub index: usize,
    /// Wire name of the stage.
    pub stage: String,
    /// Display label.
    pub label: String,
    /// Display icon.
    pub icon: String,
    /// Whether the stage is complete.
    pub completed: bool,
    /// Completion day as `YYYY-MM-DD`.
    pub completed_on: Option<String>,
    /// Who completed the stage.
    pub updated_by: Option<StaffResponse>,
}

impl StageResponse {
    fn from_record(index: usize, record: &StageRecord) -> Self {
        Self {
            index,
            stage: record.stage.as_str().to_string(),
            label: record.stage.label().to_string(),
            icon: record.stage.icon().to_string(),
            completed: record.is_completed(),
            completed_on: record.completed_on().map(|on| on.to_string()),
            updated_by: record.updated_by().map(StaffResponse::from),
        }
    }
}

/// A tracked item as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Item id, e.g. `P004`.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Ordering client.
    pub client: String,
    /// Number of units.
    pub quantity: u32,
    /// Wire name of the print type.
    pub print_type: String,
    /// Display label of the print type.
    pub print_type_label: String,
    /// Display icon of the print type.
    pub print_type_icon: String,
    /// Wire name of the delivery method.
    pub delivery_method: String,
    /// Display label of the delivery method.
    pub delivery_method_label: String,
    /// Display icon of the delivery method.
    pub delivery_method_icon: String,
    /// Order manager.
    pub manager: StaffResponse,
    /// Furthest completed stage.
    pub current_stage: Option<String>,
    /// Whether the shipment stage is complete.
    pub shipped: bool,
    /// All five stages in pipeline order.
    pub stages: Vec<StageResponse>,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.value().to_string(),
            name: item.name.clone(),
            client: item.client.clone(),
            quantity: item.quantity,
            print_type: item.print_type.as_str().to_string(),
            print_type_label: item.print_type.label().to_string(),
            print_type_icon: item.print_type.icon().to_string(),
            delivery_method: item.delivery_method.as_str().to_string(),
            delivery_method_label: item.delivery_method.label().to_string(),
            delivery_method_icon: item.delivery_method.icon().to_string(),
            manager: StaffResponse::from(&item.manager),
            current_stage: item
                .latest_completed_stage()
                .map(|stage| stage.as_str().to_string()),
            shipped: item.is_shipped(),
            stages: item
                .stages
                .iter()
                .enumerate()
                .map(|(index, record)| StageResponse::from_record(index, record))
                .collect(),
        }
    }
}

/// API response listing items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListResponse {
    /// The items, in the order of the underlying view.
    pub items: Vec<ItemResponse>,
    /// Number of items.
    pub count: usize,
}

impl<'a> FromIterator<&'a Item> for ItemListResponse {
    fn from_iter<I: IntoIterator<Item = &'a Item>>(iter: I) -> Self {
        let items: Vec<ItemResponse> = iter.into_iter().map(ItemResponse::from).collect();
        let count: usize = items.len();
        Self { items, count }
    }
}

/// API response for a successful stage toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleStageResponse {
    /// The updated item.
    pub item: ItemResponse,
    /// The stage that was flipped.
    pub stage: String,
    /// Whether the stage is now complete.
    pub completed: bool,
    /// Id of the audit event recording the toggle.
    pub event_id: Option<u64>,
    /// A success message.
    pub message: String,
}

/// An audit event as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventResponse {
    /// Position in the audit log.
    pub event_id: Option<u64>,
    /// The affected item.
    pub item_id: String,
    /// Day of the change as `YYYY-MM-DD`.
    pub recorded_on: String,
    /// Staff id of the actor.
    pub actor_id: u32,
    /// Name of the actor.
    pub actor_name: String,
    /// The cause identifier.
    pub cause_id: String,
    /// The cause description.
    pub cause_description: String,
    /// The action name.
    pub action_name: String,
    /// Optional action details.
    pub action_details: Option<String>,
    /// Snapshot before the change.
    pub before_snapshot: String,
    /// Snapshot after the change.
    pub after_snapshot: String,
}

impl From<&AuditEvent> for AuditEventResponse {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            item_id: event.item_id.value().to_string(),
            recorded_on: event.recorded_on.to_string(),
            actor_id: event.actor.staff_id,
            actor_name: event.actor.name.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action_name: event.action.name.clone(),
            action_details: event.action.details.clone(),
            before_snapshot: event.before.data.clone(),
            after_snapshot: event.after.data.clone(),
        }
    }
}

/// API response listing the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogResponse {
    /// Events, oldest first.
    pub events: Vec<AuditEventResponse>,
}
