// Rust guideline compliant 2026-10-19

//! Unit tests for the call and directions gates.

use nearby_core::{
    ActionGate, Category, CategoryTables, Error, LookupTable, Resolver, ServiceEntity,
};

const MAPS: &str = "https://www.google.com/maps/dir/";

fn phones() -> LookupTable<String> {
    [
        ("photocopy_1", "040 2345 6789"),
        ("photocopy_2", "   "),
    ]
    .into_iter()
    .map(|(id, phone)| (id, phone.to_string()))
    .collect()
}

fn shop(id: &str, coordinate: Option<(f64, f64)>) -> ServiceEntity {
    let mut entity = ServiceEntity::new(id, "Copy Centre", Category::Photocopy);
    if let Some((latitude, longitude)) = coordinate {
        entity.latitude = Some(latitude);
        entity.longitude = Some(longitude);
    }
    entity
}

#[test]
fn test_call_target_when_phone_known() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    let entity = shop("photocopy_1", None);

    assert!(gate.can_call(&entity));
    let uri = gate.call_target(&entity).expect("call target");
    assert_eq!(uri.as_str(), "tel:04023456789");
}

#[test]
fn test_blank_phone_closes_gate() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    assert!(!gate.can_call(&shop("photocopy_2", None)));
}

#[test]
fn test_call_without_phone_is_precondition_violation() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    let entity = shop("photocopy_9", None);

    assert!(!gate.can_call(&entity));
    let err = gate.call_target(&entity).expect_err("gate is closed");
    assert!(err.is_programming_error());
    match err {
        Error::PreconditionViolated(cause) => {
            assert!(cause.is_data_absence());
            assert!(matches!(*cause, Error::NoContactInfo(ref id) if id == "photocopy_9"));
        }
        other => panic!("expected PreconditionViolated, got {:?}", other),
    }
}

#[test]
fn test_default_entity_phone_does_not_open_gate() {
    let tables = CategoryTables {
        phones: phones(),
        default_entity: Some("photocopy_1".to_string()),
        ..CategoryTables::default()
    };
    let gate = ActionGate::new(tables.phone_resolver(), MAPS).expect("valid gate");
    let entity = shop("photocopy_9", None);

    assert!(!gate.can_call(&entity));
    assert!(gate.phone(&entity).is_none());
    match gate.call_target(&entity) {
        Err(Error::PreconditionViolated(cause)) => {
            assert!(matches!(*cause, Error::NoContactInfo(ref id) if id == "photocopy_9"));
        }
        other => panic!("expected PreconditionViolated, got {:?}", other),
    }
}

#[test]
fn test_directions_target_carries_destination() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    let entity = shop("photocopy_1", Some((17.494, 78.4595)));

    assert!(gate.can_navigate(&entity));
    let url = gate.directions_target(&entity).expect("directions target");
    assert_eq!(url.host_str(), Some("www.google.com"));
    let destination = url
        .query_pairs()
        .find(|(key, _)| key == "destination")
        .map(|(_, value)| value.into_owned());
    assert_eq!(destination.as_deref(), Some("17.494,78.4595"));
}

#[test]
fn test_half_coordinate_cannot_navigate() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    let mut entity = shop("photocopy_1", None);
    entity.latitude = Some(17.494);

    assert!(!gate.can_navigate(&entity));
    match gate.directions_target(&entity) {
        Err(Error::PreconditionViolated(cause)) => {
            assert!(matches!(*cause, Error::NoCoordinate(_)));
        }
        other => panic!("expected PreconditionViolated, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_coordinate_is_invalid() {
    let table = phones();
    let gate = ActionGate::new(Resolver::new(&table, None), MAPS).expect("valid gate");
    let entity = shop("photocopy_1", Some((123.0, 78.0)));

    assert!(matches!(
        gate.directions_target(&entity),
        Err(Error::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_invalid_maps_url_rejected() {
    let table = phones();
    assert!(ActionGate::new(Resolver::new(&table, None), "maps").is_err());
}
