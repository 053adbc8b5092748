use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::maskers::{
    mask_address, mask_email, mask_name, mask_phone, EMAIL_PLACEHOLDER, OPAQUE_PLACEHOLDER,
    PHONE_PLACEHOLDER,
};

/// A row as handed to us by the data layer: field name -> JSON value
pub type Record = Map<String, Value>;

/// Entity types whose records carry contact information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Request,
    Submission,
    Appointment,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown entity type: {0}")]
pub struct EntityTypeError(pub String);

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Request => "request",
            EntityType::Submission => "submission",
            EntityType::Appointment => "appointment",
        }
    }

    /// Fields that get masked for this entity type, and how
    pub fn masked_fields(&self) -> &'static [(&'static str, FieldKind)] {
        match self {
            EntityType::Person => PERSON_FIELDS,
            EntityType::Request => REQUEST_FIELDS,
            EntityType::Submission => SUBMISSION_FIELDS,
            EntityType::Appointment => APPOINTMENT_FIELDS,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = EntityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(EntityType::Person),
            "request" => Ok(EntityType::Request),
            "submission" => Ok(EntityType::Submission),
            "appointment" => Ok(EntityType::Appointment),
            other => Err(EntityTypeError(other.to_string())),
        }
    }
}

/// Kind of PII a field holds, which picks the masker applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
    Address,
    Name,
}

impl FieldKind {
    fn mask_text(&self, text: &str) -> Option<String> {
        match self {
            FieldKind::Email => mask_email(Some(text)),
            FieldKind::Phone => mask_phone(Some(text)),
            FieldKind::Address => mask_address(Some(text)),
            FieldKind::Name => mask_name(Some(text)),
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Email => EMAIL_PLACEHOLDER,
            FieldKind::Phone => PHONE_PLACEHOLDER,
            FieldKind::Address | FieldKind::Name => OPAQUE_PLACEHOLDER,
        }
    }

    /// Mask a JSON value found on a field of this kind.
    ///
    /// Numbers are masked through their decimal text. Booleans, arrays and
    /// objects can't be inspected and are replaced by the placeholder.
    pub fn mask_value(&self, value: &Value) -> Value {
        let masked = match value {
            Value::Null => return Value::Null,
            Value::String(text) => self.mask_text(text),
            Value::Number(number) => self.mask_text(&number.to_string()),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Some(self.placeholder().to_string())
            }
        };

        masked.map(Value::String).unwrap_or(Value::Null)
    }
}

const PERSON_FIELDS: &[(&str, FieldKind)] = &[
    ("primary_email", FieldKind::Email),
    ("email", FieldKind::Email),
    ("secondary_email", FieldKind::Email),
    ("primary_phone", FieldKind::Phone),
    ("phone", FieldKind::Phone),
    ("secondary_phone", FieldKind::Phone),
    ("address", FieldKind::Address),
];

const REQUEST_FIELDS: &[(&str, FieldKind)] = &[
    ("requester_email", FieldKind::Email),
    ("contact_email", FieldKind::Email),
    ("requester_phone", FieldKind::Phone),
    ("contact_phone", FieldKind::Phone),
];

const SUBMISSION_FIELDS: &[(&str, FieldKind)] = &[
    ("email", FieldKind::Email),
    ("phone", FieldKind::Phone),
    ("submitter_name", FieldKind::Name),
    ("cats_address", FieldKind::Address),
];

const APPOINTMENT_FIELDS: &[(&str, FieldKind)] = &[
    ("owner_email", FieldKind::Email),
    ("owner_phone", FieldKind::Phone),
];

/// Return a copy of `record` with the entity type's contact fields masked.
///
/// Keys are never added or removed; fields outside the entity's list are
/// copied untouched.
pub fn mask_entity(record: &Record, entity_type: EntityType) -> Record {
    let mut masked = record.clone();

    for (field, kind) in entity_type.masked_fields() {
        if let Some(value) = masked.get_mut(*field) {
            *value = kind.mask_value(value);
        }
    }

    masked
}

/// Like [`mask_entity`], for callers holding the entity type as text.
///
/// An unknown type name leaves the copy unmasked rather than failing the
/// request.
pub fn mask_entity_named(record: &Record, entity_type: &str) -> Record {
    match entity_type.parse::<EntityType>() {
        Ok(entity_type) => mask_entity(record, entity_type),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping PII masking for unrecognized entity type");
            record.clone()
        }
    }
}

/// Mask every record in order. Output has the same length and order as the input.
pub fn mask_collection(records: &[Record], entity_type: EntityType) -> Vec<Record> {
    tracing::debug!(
        entity_type = %entity_type,
        count = records.len(),
        "Masking PII in record collection"
    );

    records
        .iter()
        .map(|record| mask_entity(record, entity_type))
        .collect()
}

/// Mask an arbitrary JSON payload: an object is one record, an array is a
/// collection of records. Anything else is returned unchanged.
pub fn mask_json(value: Value, entity_type: EntityType) -> Value {
    match value {
        Value::Object(record) => Value::Object(mask_entity(&record, entity_type)),
        Value::Array(items) => {
            tracing::debug!(
                entity_type = %entity_type,
                count = items.len(),
                "Masking PII in JSON array"
            );
            Value::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(record) => Value::Object(mask_entity(&record, entity_type)),
                        other => other,
                    })
                    .collect(),
            )
        }
        other => other,
    }
}
