use axum::{extract::Path, Extension, Json};
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::pii::{mask_json, should_mask, EntityType};
use crate::server::middleware::AuthUser;

/// Return the posted record(s) exactly as the caller's role would be served them.
///
/// Accepts a single JSON object or an array of objects. An unrecognized
/// entity type leaves the payload unmasked.
pub async fn preview_handler(
    Path(entity_type): Path<String>,
    auth_user: Option<Extension<AuthUser>>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    let role = auth_user.map(|Extension(user)| user.role);

    if !should_mask(role) {
        debug!(entity_type = %entity_type, "Caller sees unmasked records");
        return Json(payload);
    }

    match entity_type.parse::<EntityType>() {
        Ok(entity_type) => Json(mask_json(payload, entity_type)),
        Err(e) => {
            warn!(error = %e, "Skipping PII masking for unrecognized entity type");
            Json(payload)
        }
    }
}
