use crate::common::{AuthError, Role};
use axum::{
    http::HeaderName,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Authenticated caller as resolved by the fronting auth proxy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub role: Role,
}

/// Role resolution middleware
///
/// Reads the caller's role from `role_header` and adds AuthUser to request extensions.
/// If the header is missing, request continues without AuthUser.
/// An unrecognized role is rejected outright rather than served unmasked.
pub async fn role_auth_middleware(
    role_header: Arc<HeaderName>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match extract_auth_user(&request, &role_header) {
        Ok(Some(user)) => {
            debug!("Resolved caller role: {}", user.role);
            request.extensions_mut().insert(user);
        }
        Ok(None) => debug!("No caller role on request"),
        Err(e) => {
            debug!(error = %e, "Rejecting request with unrecognized role");
            return e.into_response();
        }
    }

    next.run(request).await
}

/// Extract the caller's role from the request headers
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    role_header: &HeaderName,
) -> Result<Option<AuthUser>, AuthError> {
    let Some(value) = request.headers().get(role_header) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::UnknownRole("<non-ascii header value>".to_string()))?;
    let role = value.parse::<Role>()?;

    Ok(Some(AuthUser { role }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderName {
        HeaderName::from_static("x-atlas-role")
    }

    #[test]
    fn test_extract_role() {
        let request = axum::http::Request::builder()
            .header("x-atlas-role", "volunteer")
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &header()).unwrap();
        assert_eq!(auth_user, Some(AuthUser { role: Role::Volunteer }));
    }

    #[test]
    fn test_no_role_header() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &header()).unwrap();
        assert!(auth_user.is_none());
    }

    #[test]
    fn test_other_header_ignored() {
        let request = axum::http::Request::builder()
            .header("x-role", "admin")
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &header()).unwrap();
        assert!(auth_user.is_none());
    }

    #[test]
    fn test_unknown_role() {
        let request = axum::http::Request::builder()
            .header("x-atlas-role", "superuser")
            .body(axum::body::Body::empty())
            .unwrap();

        let result = extract_auth_user(&request, &header());
        assert_eq!(result, Err(AuthError::UnknownRole("superuser".to_string())));
    }
}
