use crate::common::auth::Role;

/// Whether records must be masked before they reach a caller with `role`.
///
/// Only volunteers get masked data. The decision depends on the role alone so
/// it can be made once per request and applied to every record in it.
pub fn should_mask(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Volunteer))
}
