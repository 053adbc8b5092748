//! Response helpers for handlers that return entity records.

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::common::pii::{mask_json, should_mask, EntityType};
use crate::common::Role;

/// Serialize `payload` to JSON, masking PII when the caller's role requires it.
///
/// `payload` may be a single record or a list of records; anything that
/// doesn't serialize to an object or array is returned as-is.
pub fn masked_json<T: Serialize>(
    role: Option<Role>,
    entity_type: EntityType,
    payload: &T,
) -> Result<Json<Value>, serde_json::Error> {
    let value = serde_json::to_value(payload)?;

    if should_mask(role) {
        Ok(Json(mask_json(value, entity_type)))
    } else {
        Ok(Json(value))
    }
}
