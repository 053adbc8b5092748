use axum::{Extension, Json};
use serde::Serialize;

use crate::common::pii::should_mask;
use crate::common::Role;
use crate::server::middleware::AuthUser;

#[derive(Serialize)]
pub struct MeResponse {
    role: Option<Role>,
    pii_masked: bool,
}

/// Report the caller's resolved role and whether their responses are masked
pub async fn me_handler(auth_user: Option<Extension<AuthUser>>) -> Json<MeResponse> {
    let role = auth_user.map(|Extension(user)| user.role);

    Json(MeResponse {
        role,
        pii_masked: should_mask(role),
    })
}
