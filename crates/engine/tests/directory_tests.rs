//! End-to-end behavior tests for the Directory
//!
//! Exercises the full mutation/lookup surface: round trips, uniqueness
//! conflicts, index scrubbing on delete, phone rekeying, malformed
//! addresses, token exactness, and query validation.

use rolodex_engine::{ContactPatch, Directory, Error, ValidationError};

const ADA_ADDR: &str = "1 Main St, Springfield, IL, 62701, USA";

fn directory_with_ada() -> Directory {
    let directory = Directory::new();
    directory
        .create("Ada", "Lovelace", "5551234567", Some(ADA_ADDR))
        .unwrap();
    directory
}

// ============================================================================
// Create / lookup round trips
// ============================================================================

#[test]
fn test_create_then_lookup_by_phone_returns_exact_fields() {
    let directory = directory_with_ada();

    let contact = directory.lookup_by_phone("5551234567").unwrap();
    assert_eq!(contact.first_name, "Ada");
    assert_eq!(contact.last_name, "Lovelace");
    assert_eq!(contact.phone.as_str(), "5551234567");
    assert_eq!(contact.address.as_deref(), Some(ADA_ADDR));
}

#[test]
fn test_create_without_address() {
    let directory = Directory::new();
    directory.create("Grace", "Hopper", "5559876543", None).unwrap();

    let contact = directory.lookup_by_phone("5559876543").unwrap();
    assert!(contact.address.is_none());
    assert!(directory.lookup_by_city("Springfield").is_empty());
}

#[test]
fn test_lookup_by_phone_unknown_or_malformed_is_none() {
    let directory = directory_with_ada();

    assert!(directory.lookup_by_phone("5550000000").is_none());
    assert!(directory.lookup_by_phone("not-a-phone").is_none());
    assert!(directory.lookup_by_phone("").is_none());
}

#[test]
fn test_single_contact_answers_all_query_shapes() {
    let directory = directory_with_ada();

    assert_eq!(directory.lookup_by_city("Springfield").len(), 1);
    assert_eq!(directory.lookup_by_token("IL").len(), 1);
    assert!(directory.lookup_by_token("Spring").is_empty());
    assert_eq!(directory.lookup_by_prefix("555").unwrap().len(), 1);
    assert_eq!(
        directory.lookup_by_name(Some("Ada"), None).unwrap().len(),
        1
    );
}

// ============================================================================
// Uniqueness conflicts
// ============================================================================

#[test]
fn test_create_duplicate_phone_fails_without_partial_state() {
    let directory = directory_with_ada();

    let err = directory
        .create("Grace", "Hopper", "5551234567", None)
        .unwrap_err();
    assert!(matches!(err, Error::PhoneInUse(_)));

    // No trace of the rejected contact in any index
    assert_eq!(directory.len(), 1);
    assert!(directory.lookup_by_name(Some("Grace"), None).unwrap().is_empty());
    assert!(directory.lookup_by_token("Hopper").is_empty());
    let survivors = directory.lookup_by_prefix("555").unwrap();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].first_name, "Ada");
}

#[test]
fn test_update_phone_to_in_use_number_fails_unchanged() {
    let directory = directory_with_ada();
    let grace = directory
        .create("Grace", "Hopper", "5559876543", None)
        .unwrap();

    let err = directory
        .update(grace, ContactPatch::new().phone("5551234567"))
        .unwrap_err();
    assert!(matches!(err, Error::PhoneInUse(_)));

    // Both contacts keep their original numbers
    assert_eq!(
        directory.lookup_by_phone("5551234567").unwrap().first_name,
        "Ada"
    );
    assert_eq!(
        directory.lookup_by_phone("5559876543").unwrap().first_name,
        "Grace"
    );
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_scrubs_every_index() {
    let directory = directory_with_ada();

    directory.delete("5551234567").unwrap();

    assert!(directory.is_empty());
    assert!(directory.lookup_by_phone("5551234567").is_none());
    assert!(directory.lookup_by_name(Some("Ada"), None).unwrap().is_empty());
    assert!(directory
        .lookup_by_name(Some("Ada"), Some("Lovelace"))
        .unwrap()
        .is_empty());
    assert!(directory.lookup_by_city("Springfield").is_empty());
    for token in ["Ada", "Lovelace", "5551234567", "IL", "62701", "USA"] {
        assert!(
            directory.lookup_by_token(token).is_empty(),
            "token {token:?} survived deletion"
        );
    }
    for prefix in ["5", "555", "5551234567"] {
        assert!(directory.lookup_by_prefix(prefix).unwrap().is_empty());
    }
}

#[test]
fn test_delete_unknown_phone_is_not_found() {
    let directory = Directory::new();
    let err = directory.delete("5550000000").unwrap_err();
    assert!(matches!(err, Error::PhoneNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_delete_malformed_phone_is_validation_error() {
    let directory = Directory::new();
    let err = directory.delete("555").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_delete_leaves_other_contacts_indexed() {
    let directory = directory_with_ada();
    directory
        .create("Augusta", "Lovelace", "5559876543", Some(ADA_ADDR))
        .unwrap();

    directory.delete("5551234567").unwrap();

    // Shared name, city, and token buckets still serve the survivor
    assert_eq!(
        directory.lookup_by_name(None, Some("Lovelace")).unwrap().len(),
        1
    );
    assert_eq!(directory.lookup_by_city("Springfield").len(), 1);
    assert_eq!(directory.lookup_by_token("USA").len(), 1);
    assert_eq!(directory.lookup_by_prefix("555").unwrap().len(), 1);
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_phone_moves_every_phone_keyed_entry() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    directory
        .update(id, ContactPatch::new().phone("9995550000"))
        .unwrap();

    assert!(directory.lookup_by_phone("5551234567").is_none());
    let moved = directory.lookup_by_phone("9995550000").unwrap();
    assert_eq!(moved.id, id);
    assert_eq!(moved.first_name, "Ada");

    assert!(directory.lookup_by_prefix("555").unwrap().is_empty());
    assert_eq!(directory.lookup_by_prefix("999").unwrap().len(), 1);

    // The old number is no longer a token; the new one is
    assert!(directory.lookup_by_token("5551234567").is_empty());
    assert_eq!(directory.lookup_by_token("9995550000").len(), 1);
}

#[test]
fn test_update_name_moves_name_and_token_entries() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    directory
        .update(
            id,
            ContactPatch::new().first_name("Augusta").last_name("Byron"),
        )
        .unwrap();

    assert!(directory.lookup_by_name(Some("Ada"), None).unwrap().is_empty());
    assert!(directory.lookup_by_token("Lovelace").is_empty());
    assert_eq!(
        directory
            .lookup_by_name(Some("Augusta"), Some("Byron"))
            .unwrap()
            .len(),
        1
    );
    assert_eq!(directory.lookup_by_token("byron").len(), 1);

    // Phone-keyed entries untouched
    assert_eq!(directory.lookup_by_prefix("555").unwrap().len(), 1);
}

#[test]
fn test_update_address_moves_city_and_tokens() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    directory
        .update(
            id,
            ContactPatch::new().address("2 Elm Ave, Shelbyville, IL, 62565, USA"),
        )
        .unwrap();

    assert!(directory.lookup_by_city("Springfield").is_empty());
    assert_eq!(directory.lookup_by_city("Shelbyville").len(), 1);
    assert!(directory.lookup_by_token("1 Main St").is_empty());
    assert_eq!(directory.lookup_by_token("2 Elm Ave").len(), 1);
    // Token shared between old and new addresses survives
    assert_eq!(directory.lookup_by_token("IL").len(), 1);
}

#[test]
fn test_update_clear_address_retires_city_and_address_tokens() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    directory.update(id, ContactPatch::new().clear_address()).unwrap();

    let contact = directory.lookup_by_phone("5551234567").unwrap();
    assert!(contact.address.is_none());
    assert!(directory.lookup_by_city("Springfield").is_empty());
    assert!(directory.lookup_by_token("IL").is_empty());
    // Name and phone tokens remain
    assert_eq!(directory.lookup_by_token("Ada").len(), 1);
    assert_eq!(directory.lookup_by_token("5551234567").len(), 1);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let directory = Directory::new();
    let err = directory
        .update(
            rolodex_engine::ContactId::new(),
            ContactPatch::new().first_name("Ada"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::ContactNotFound(_)));
}

#[test]
fn test_update_rejects_invalid_fields_without_mutation() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    let err = directory
        .update(id, ContactPatch::new().first_name("  "))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptyFirstName)
    ));

    let err = directory
        .update(id, ContactPatch::new().phone("123"))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::Phone(_))));

    // Record unchanged
    let contact = directory.lookup_by_phone("5551234567").unwrap();
    assert_eq!(contact.first_name, "Ada");
}

#[test]
fn test_update_phone_to_its_current_value_is_noop() {
    let directory = directory_with_ada();
    let id = directory.lookup_by_phone("5551234567").unwrap().id;

    directory
        .update(id, ContactPatch::new().phone("5551234567"))
        .unwrap();

    assert_eq!(directory.lookup_by_phone("5551234567").unwrap().id, id);
    assert_eq!(directory.lookup_by_prefix("555").unwrap().len(), 1);
}

// ============================================================================
// Name queries
// ============================================================================

#[test]
fn test_lookup_by_name_both_fields_is_and_match() {
    let directory = Directory::new();
    directory.create("Grace", "Hopper", "5550000001", None).unwrap();
    directory.create("Grace", "Kelly", "5550000002", None).unwrap();
    directory.create("William", "Grace", "5550000003", None).unwrap();

    let both = directory
        .lookup_by_name(Some("Grace"), Some("Hopper"))
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].last_name, "Hopper");

    // One field matches the name in either position
    assert_eq!(directory.lookup_by_name(Some("Grace"), None).unwrap().len(), 3);
    assert_eq!(directory.lookup_by_name(None, Some("Grace")).unwrap().len(), 3);
}

#[test]
fn test_lookup_by_name_shared_full_name() {
    let directory = Directory::new();
    directory.create("Ada", "Lovelace", "5550000001", None).unwrap();
    directory.create("Ada", "Lovelace", "5550000002", None).unwrap();

    let both = directory
        .lookup_by_name(Some("Ada"), Some("Lovelace"))
        .unwrap();
    assert_eq!(both.len(), 2);
    // Deterministic order: sorted by phone number
    assert_eq!(both[0].phone.as_str(), "5550000001");
    assert_eq!(both[1].phone.as_str(), "5550000002");
}

#[test]
fn test_lookup_by_name_empty_query_is_invalid() {
    let directory = directory_with_ada();

    let err = directory.lookup_by_name(None, None).unwrap_err();
    assert!(matches!(err, Error::InvalidQuery(_)));

    let err = directory.lookup_by_name(Some(""), Some("")).unwrap_err();
    assert!(matches!(err, Error::InvalidQuery(_)));

    // No results is an empty Ok, never an error
    assert!(directory.lookup_by_name(Some("Nobody"), None).unwrap().is_empty());
}

#[test]
fn test_lookup_by_name_is_case_insensitive() {
    let directory = directory_with_ada();

    assert_eq!(
        directory
            .lookup_by_name(Some("ada"), Some("LOVELACE"))
            .unwrap()
            .len(),
        1
    );
}

// ============================================================================
// Prefix queries
// ============================================================================

#[test]
fn test_lookup_by_prefix_returns_exactly_matching_set() {
    let directory = Directory::new();
    directory.create("Ada", "Lovelace", "5551234567", None).unwrap();
    directory.create("Grace", "Hopper", "5559876543", None).unwrap();
    directory.create("Alan", "Turing", "6175551234", None).unwrap();

    let matches = directory.lookup_by_prefix("555").unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|c| c.phone.as_str().starts_with("555")));

    assert_eq!(directory.lookup_by_prefix("6").unwrap().len(), 1);
    assert!(directory.lookup_by_prefix("7").unwrap().is_empty());
}

#[test]
fn test_lookup_by_prefix_invalid_inputs() {
    let directory = directory_with_ada();

    assert!(matches!(
        directory.lookup_by_prefix(""),
        Err(Error::InvalidQuery(_))
    ));
    assert!(matches!(
        directory.lookup_by_prefix("55512345678"),
        Err(Error::InvalidQuery(_))
    ));
    assert!(matches!(
        directory.lookup_by_prefix("55x"),
        Err(Error::InvalidQuery(_))
    ));
}

// ============================================================================
// Token queries
// ============================================================================

#[test]
fn test_lookup_by_token_whole_values_only() {
    let directory = directory_with_ada();

    for token in ["Ada", "lovelace", "5551234567", "1 Main St", "IL", "62701", "usa"] {
        assert_eq!(
            directory.lookup_by_token(token).len(),
            1,
            "token {token:?} should match"
        );
    }
    for partial in ["Ad", "Love", "555", "Main", "6270"] {
        assert!(
            directory.lookup_by_token(partial).is_empty(),
            "partial {partial:?} must not match"
        );
    }
}

// ============================================================================
// Malformed addresses
// ============================================================================

#[test]
fn test_malformed_address_tolerated_but_unindexed() {
    let directory = Directory::new();
    directory
        .create("Alan", "Turing", "6175551234", Some("Bletchley Park"))
        .unwrap();

    // The contact exists with its raw address preserved
    let contact = directory.lookup_by_phone("6175551234").unwrap();
    assert_eq!(contact.address.as_deref(), Some("Bletchley Park"));

    // But contributes no city or address-field tokens
    assert!(directory.lookup_by_city("Bletchley Park").is_empty());
    assert!(directory.lookup_by_token("Bletchley Park").is_empty());

    // Name, phone, and prefix lookups still find it
    assert_eq!(directory.lookup_by_name(Some("Alan"), None).unwrap().len(), 1);
    assert_eq!(directory.lookup_by_token("Turing").len(), 1);
    assert_eq!(directory.lookup_by_prefix("617").unwrap().len(), 1);
}

#[test]
fn test_update_from_malformed_to_wellformed_address() {
    let directory = Directory::new();
    let id = directory
        .create("Alan", "Turing", "6175551234", Some("Bletchley Park"))
        .unwrap();

    directory
        .update(
            id,
            ContactPatch::new().address("Hut 8, Bletchley, Bucks, MK3, UK"),
        )
        .unwrap();

    assert_eq!(directory.lookup_by_city("Bletchley").len(), 1);
    assert_eq!(directory.lookup_by_token("UK").len(), 1);
}
