//! Behavioral tests for PII masking of volunteer-facing records.

use atlas_core::common::auth::Role;
use atlas_core::common::pii::{
    mask_address, mask_collection, mask_email, mask_entity, mask_name, mask_phone, should_mask,
    EntityType, Record,
};
use serde_json::{json, Value};

const ALL_ENTITY_TYPES: [EntityType; 4] = [
    EntityType::Person,
    EntityType::Request,
    EntityType::Submission,
    EntityType::Appointment,
];

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("record fixture must be an object")
}

fn kitchen_sink() -> Record {
    record(json!({
        "id": "c0ffee",
        "primary_email": "pat@example.com",
        "email": "pat.alt@example.com",
        "secondary_email": null,
        "primary_phone": "707-555-1234",
        "phone": "(707) 555-4321",
        "secondary_phone": "",
        "address": "100 River Rd, Guerneville, CA",
        "requester_email": "req@example.com",
        "requester_phone": "1-707-555-0000",
        "contact_email": "c@example.com",
        "contact_phone": "555",
        "submitter_name": "Pat Q Public",
        "cats_address": "7 Orchard Ln",
        "owner_email": "own@example.com",
        "owner_phone": "7075559999",
        "is_active": true,
        "cat_count": 4,
        "notes": { "text": "feeds at dusk" },
    }))
}

#[test]
fn absent_values_mask_to_none() {
    assert_eq!(mask_email(None), None);
    assert_eq!(mask_phone(None), None);
    assert_eq!(mask_address(None), None);
    assert_eq!(mask_name(None), None);

    assert_eq!(mask_email(Some("")), None);
    assert_eq!(mask_phone(Some("")), None);
    assert_eq!(mask_address(Some("")), None);
    assert_eq!(mask_name(Some("")), None);
}

#[test]
fn email_keeps_domain_and_first_character() {
    assert_eq!(
        mask_email(Some("john.smith@example.com")).as_deref(),
        Some("j***@example.com")
    );
    assert_eq!(mask_email(Some("a@b.com")).as_deref(), Some("***@b.com"));
    assert_eq!(mask_email(Some("no-at-sign")).as_deref(), Some("***@***.***"));
    assert_eq!(mask_email(Some("two@at@signs.com")).as_deref(), Some("***@***.***"));
}

#[test]
fn phone_keeps_area_code_and_last_two_digits() {
    assert_eq!(mask_phone(Some("707-555-1234")).as_deref(), Some("707-***-**34"));
    assert_eq!(mask_phone(Some("1-707-555-1234")).as_deref(), Some("707-***-**34"));
    assert_eq!(mask_phone(Some("555-1234")).as_deref(), Some("***-***-**34"));
    assert_eq!(mask_phone(Some("123456")).as_deref(), Some("***-****"));
}

#[test]
fn phone_fallback_covers_unusual_digit_counts() {
    let cases = [
        ("5551234", "***-***-**34"),         // 7
        ("55512345", "***-***-**45"),        // 8
        ("555123456", "***-***-**56"),       // 9
        ("27075551234", "***-***-**34"),     // 11 without country code
        ("447075551234", "***-***-**34"),    // 12
        ("4470755512345678", "***-***-**78"), // 16
    ];

    for (input, expected) in cases {
        assert_eq!(mask_phone(Some(input)).as_deref(), Some(expected), "input {input}");
    }
}

#[test]
fn address_hides_house_number_only() {
    assert_eq!(
        mask_address(Some("123 Main St, Santa Rosa, CA 95401")).as_deref(),
        Some("*** Main St, Santa Rosa, CA 95401")
    );
    assert_eq!(mask_address(Some("Main St")).as_deref(), Some("Main St"));
}

#[test]
fn name_becomes_initials() {
    assert_eq!(mask_name(Some("John Smith")).as_deref(), Some("J. S."));
    assert_eq!(mask_name(Some("Madonna")).as_deref(), Some("M."));
}

#[test]
fn record_without_masked_fields_is_unchanged() {
    let cat = record(json!({
        "cat_id": "a1",
        "name": "Whiskers",
        "microchip": "985112003456789",
        "altered": true,
        "weight_lbs": 9.5,
    }));

    for entity_type in ALL_ENTITY_TYPES {
        assert_eq!(mask_entity(&cat, entity_type), cat);
    }
}

#[test]
fn masking_preserves_keys_and_their_order() {
    let input = kitchen_sink();
    let input_keys: Vec<&String> = input.keys().collect();

    for entity_type in ALL_ENTITY_TYPES {
        let masked = mask_entity(&input, entity_type);
        let masked_keys: Vec<&String> = masked.keys().collect();
        assert_eq!(masked_keys, input_keys, "{entity_type}");
    }
}

#[test]
fn unlisted_fields_pass_through() {
    let input = kitchen_sink();

    for entity_type in ALL_ENTITY_TYPES {
        let masked = mask_entity(&input, entity_type);
        let listed: Vec<&str> = entity_type
            .masked_fields()
            .iter()
            .map(|(field, _)| *field)
            .collect();

        for (key, value) in &input {
            if !listed.contains(&key.as_str()) {
                assert_eq!(&masked[key], value, "{entity_type}.{key}");
            }
        }
    }
}

#[test]
fn person_view_for_volunteers() {
    let masked = mask_entity(&kitchen_sink(), EntityType::Person);

    assert_eq!(masked["primary_email"], "p***@example.com");
    assert_eq!(masked["email"], "p***@example.com");
    assert_eq!(masked["secondary_email"], Value::Null);
    assert_eq!(masked["primary_phone"], "707-***-**34");
    assert_eq!(masked["phone"], "707-***-**21");
    assert_eq!(masked["secondary_phone"], Value::Null);
    assert_eq!(masked["address"], "*** River Rd, Guerneville, CA");
    // Submission-only field stays raw on a person
    assert_eq!(masked["submitter_name"], "Pat Q Public");
}

#[test]
fn collection_preserves_length_and_order() {
    let records: Vec<Record> = (0..5)
        .map(|i| record(json!({ "seq": i, "owner_phone": format!("707555{:04}", 1000 + i) })))
        .collect();

    let masked = mask_collection(&records, EntityType::Appointment);

    assert_eq!(masked.len(), records.len());
    for (i, (original, out)) in records.iter().zip(&masked).enumerate() {
        assert_eq!(out["seq"], i);
        assert_eq!(*out, mask_entity(original, EntityType::Appointment));
    }
    assert_eq!(masked[3]["owner_phone"], "707-***-**03");
}

#[test]
fn empty_collection() {
    assert!(mask_collection(&[], EntityType::Request).is_empty());
}

#[test]
fn collection_keeps_duplicates() {
    let row = record(json!({ "requester_email": "same@example.com" }));
    let masked = mask_collection(&[row.clone(), row], EntityType::Request);

    assert_eq!(masked.len(), 2);
    assert_eq!(masked[0], masked[1]);
}

#[test]
fn role_gate() {
    assert!(should_mask(Some(Role::Volunteer)));
    assert!(!should_mask(Some(Role::Admin)));
    assert!(!should_mask(Some(Role::Staff)));
    assert!(!should_mask(None));
}

#[test]
fn remasking_degrades_emails_and_phones() {
    let email = mask_email(Some("john.smith@example.com"));
    assert_eq!(email.as_deref(), Some("j***@example.com"));
    // Still one '@', so it masks again to the same shape
    assert_eq!(mask_email(email.as_deref()).as_deref(), Some("j***@example.com"));

    let short_local = mask_email(Some("a@b.com"));
    assert_eq!(short_local.as_deref(), Some("***@b.com"));
    assert_eq!(mask_email(short_local.as_deref()).as_deref(), Some("****@b.com"));

    let phone = mask_phone(Some("707-555-1234"));
    assert_eq!(phone.as_deref(), Some("707-***-**34"));
    // Only 5 digits survive the first pass
    assert_eq!(mask_phone(phone.as_deref()).as_deref(), Some("***-****"));
}

#[test]
fn caller_record_is_not_mutated() {
    let input = kitchen_sink();
    let snapshot = input.clone();

    let _ = mask_collection(std::slice::from_ref(&input), EntityType::Person);

    assert_eq!(input, snapshot);
}
