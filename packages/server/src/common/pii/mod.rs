//! PII (Personally Identifiable Information) masking for restricted roles
//!
//! Volunteers see contact details in a partially masked form so they can
//! still recognize a record without holding the underlying email, phone or
//! street address.
//!
//! # Layers
//!
//! - **Field maskers**: one rule per kind of value (email, phone, address, name)
//! - **Entity masker**: which fields of a person, request, submission or
//!   appointment record get which masker
//! - **Role gate**: only the `volunteer` role is masked
//! - **Collection masker**: the entity masker over a list of records
//!
//! Masking never fails. Malformed values collapse to a fixed placeholder.
//!
//! # Examples
//!
//! ```rust
//! use atlas_core::common::auth::Role;
//! use atlas_core::common::pii::{mask_collection, should_mask, EntityType, Record};
//! use serde_json::json;
//!
//! let rows: Vec<Record> = vec![json!({ "primary_email": "john@example.com" })
//!     .as_object()
//!     .cloned()
//!     .unwrap()];
//!
//! if should_mask(Some(Role::Volunteer)) {
//!     let masked = mask_collection(&rows, EntityType::Person);
//!     assert_eq!(masked[0]["primary_email"], "j***@example.com");
//! }
//! ```

pub mod entity;
pub mod maskers;
pub mod policy;

pub use entity::{
    mask_collection, mask_entity, mask_entity_named, mask_json, EntityType, EntityTypeError,
    FieldKind, Record,
};
pub use maskers::{mask_address, mask_email, mask_name, mask_phone};
pub use policy::should_mask;
