// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and bulk import of received orders.
//!
//! Preview parses and validates without touching the store. Import previews
//! first, then creates one item per valid row.

use csv::StringRecord;
use promo_tracker::ItemStore;
use promo_tracker_audit::Cause;
use promo_tracker_domain::{DeliveryMethod, ItemDraft, PrintType, StaffDirectory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed product name (if present).
    pub name: Option<String>,
    /// The parsed client (if present).
    pub client: Option<String>,
    /// The parsed quantity (if valid).
    pub quantity: Option<u32>,
    /// The parsed print type (if valid).
    pub print_type: Option<PrintType>,
    /// The parsed delivery method (if valid).
    pub delivery_method: Option<DeliveryMethod>,
    /// The manager id given in the row, if any.
    pub manager_id: Option<u32>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

impl CsvRowResult {
    /// Builds the creation draft for a valid row.
    ///
    /// Rows without a manager are assigned to `default_manager`.
    /// Returns `None` for invalid rows.
    #[must_use]
    pub fn to_draft(&self, default_manager: u32) -> Option<ItemDraft> {
        if self.status != CsvRowStatus::Valid {
            return None;
        }
        let (Some(name), Some(client)) = (&self.name, &self.client) else {
            return None;
        };
        let mut draft: ItemDraft =
            ItemDraft::new(name, client, self.manager_id.unwrap_or(default_manager));
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(print_type) = self.print_type {
            draft.print_type = print_type;
        }
        if let Some(delivery_method) = self.delivery_method {
            draft.delivery_method = delivery_method;
        }
        Some(draft)
    }
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// A row that was not imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvImportFailure {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// Why the row was skipped.
    pub errors: Vec<String>,
}

/// Result of a bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvImportResult {
    /// Ids of the created items, in row order.
    pub created: Vec<String>,
    /// Rows that were skipped.
    pub failures: Vec<CsvImportFailure>,
    /// Total number of data rows.
    pub total_rows: usize,
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["name", "client"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
///
/// `Print Type`, `print_type` and `printType` all normalize to `print_type`.
fn normalize_header(header: &str) -> String {
    let mut normalized: String = String::with_capacity(header.len() + 4);
    let mut prev: Option<char> = None;
    for ch in header.trim().chars() {
        if ch == ' ' || ch == '-' {
            if !normalized.ends_with('_') {
                normalized.push('_');
            }
        } else if ch.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                normalized.push('_');
            }
            normalized.extend(ch.to_lowercase());
        } else {
            normalized.push(ch);
        }
        prev = Some(ch);
    }
    normalized
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Extracts a required field, recording an error if it is missing or blank.
fn parse_required_field(
    get_field: &impl Fn(&str) -> Option<String>,
    field_name: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    let value: Option<String> = get_field(field_name);
    if value.is_none() {
        errors.push(format!("{field_name}: required field is missing or empty"));
    }
    value
}

/// Parses one data row, collecting every problem rather than stopping at the first.
fn parse_csv_row(
    row_number: usize,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    directory: &StaffDirectory,
) -> CsvRowResult {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let name: Option<String> = parse_required_field(&get_field, "name", &mut errors);
    let client: Option<String> = parse_required_field(&get_field, "client", &mut errors);

    let quantity: Option<u32> = get_field("quantity").and_then(|raw| match raw.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("quantity: '{raw}' is not a whole number"));
            None
        }
    });

    let print_type: Option<PrintType> =
        get_field("print_type").and_then(|raw| match raw.parse::<PrintType>() {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(translate_domain_error(e).to_string());
                None
            }
        });

    let delivery_method: Option<DeliveryMethod> =
        get_field("delivery_method").and_then(|raw| match raw.parse::<DeliveryMethod>() {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(translate_domain_error(e).to_string());
                None
            }
        });

    let manager_id: Option<u32> = get_field("manager_id").and_then(|raw| match raw.parse::<u32>() {
        Ok(id) => {
            if let Err(e) = directory.require(id) {
                errors.push(translate_domain_error(e).to_string());
            }
            Some(id)
        }
        Err(_) => {
            errors.push(format!("manager_id: '{raw}' is not a staff id"));
            None
        }
    });

    let status: CsvRowStatus = if errors.is_empty() {
        CsvRowStatus::Valid
    } else {
        CsvRowStatus::Invalid
    };

    CsvRowResult {
        row_number,
        name,
        client,
        quantity,
        print_type,
        delivery_method,
        manager_id,
        status,
        errors,
    }
}

/// Previews and validates CSV order data without creating anything.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
/// * `directory` - The roster used to check manager ids
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row is unreadable or lacks
/// a required column. Problems in individual rows are reported per row instead.
pub fn preview_csv_items(
    csv_content: &str,
    directory: &StaffDirectory,
) -> Result<CsvPreviewResult, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    // Get and validate headers
    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        match result {
            Ok(record) => rows.push(parse_csv_row(row_number, &record, &header_map, directory)),
            Err(e) => rows.push(CsvRowResult {
                row_number,
                name: None,
                client: None,
                quantity: None,
                print_type: None,
                delivery_method: None,
                manager_id: None,
                status: CsvRowStatus::Invalid,
                errors: vec![format!("CSV parse error: {e}")],
            }),
        }
    }

    let valid_count: usize = rows
        .iter()
        .filter(|row| row.status == CsvRowStatus::Valid)
        .count();
    let total_rows: usize = rows.len();

    Ok(CsvPreviewResult {
        rows,
        total_rows,
        valid_count,
        invalid_count: total_rows - valid_count,
    })
}

/// Creates one item per valid CSV row.
///
/// Rows that fail preview, or that the store rejects, are reported in
/// `failures`; they do not stop the remaining rows.
///
/// # Arguments
///
/// * `store` - The item store to create into
/// * `csv_content` - The raw CSV content as a string
/// * `actor_id` - Staff id of the importer, used as manager for rows without one
/// * `cause` - The cause recorded on every created item
///
/// # Errors
///
/// Returns an error if the importer is unknown or the CSV header is invalid.
pub fn import_csv_items(
    store: &mut ItemStore,
    csv_content: &str,
    actor_id: u32,
    cause: &Cause,
) -> Result<CsvImportResult, ApiError> {
    store
        .directory()
        .require(actor_id)
        .map_err(translate_domain_error)?;

    let preview: CsvPreviewResult = preview_csv_items(csv_content, store.directory())?;

    let mut created: Vec<String> = Vec::new();
    let mut failures: Vec<CsvImportFailure> = Vec::new();

    for row in &preview.rows {
        let Some(draft) = row.to_draft(actor_id) else {
            failures.push(CsvImportFailure {
                row_number: row.row_number,
                errors: row.errors.clone(),
            });
            continue;
        };
        let row_cause: Cause = Cause::new(
            format!("{}#row{}", cause.id, row.row_number),
            cause.description.clone(),
        );
        match store.create_item(draft, row_cause) {
            Ok(item) => created.push(item.id.value().to_string()),
            Err(e) => {
                let err: ApiError = translate_core_error(e);
                warn!(row = row.row_number, error = %err, "Import row rejected");
                failures.push(CsvImportFailure {
                    row_number: row.row_number,
                    errors: vec![err.to_string()],
                });
            }
        }
    }

    info!(
        actor_id,
        created = created.len(),
        failed = failures.len(),
        "CSV import finished"
    );

    Ok(CsvImportResult {
        created,
        failures,
        total_rows: preview.total_rows,
    })
}
