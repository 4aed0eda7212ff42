use rentshare_core::{export_snapshot, import_snapshot, BillingSnapshot, Room, SnapshotIoError, Tenant};
use uuid::Uuid;

const TENANT_ID: &str = "11111111-2222-4333-8444-555555555555";
const ROOM_ID: &str = "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee";

fn valid_exchange_json() -> String {
    format!(
        r#"{{
            "totalColdRent": 1000.0,
            "utilities": 100.0,
            "rooms": [
                {{"id": "{ROOM_ID}", "name": "Office", "area": 20.0, "tenantId": "{TENANT_ID}", "isCommonArea": false}}
            ],
            "tenants": [
                {{"id": "{TENANT_ID}", "name": "Alice"}}
            ]
        }}"#
    )
}

#[test]
fn import_accepts_valid_exchange_json() {
    let snapshot = import_snapshot(&valid_exchange_json()).expect("import should succeed");
    assert_eq!(snapshot.total_cold_rent, 1000.0);
    assert_eq!(snapshot.utilities, 100.0);
    assert_eq!(snapshot.rooms.len(), 1);
    assert_eq!(snapshot.rooms[0].name, "Office");
    assert_eq!(
        snapshot.rooms[0].tenant_id,
        Some(Uuid::parse_str(TENANT_ID).unwrap())
    );
    assert_eq!(snapshot.tenants[0].name, "Alice");
}

#[test]
fn export_then_import_round_trips() {
    let tenant = Tenant::new("Alice");
    let snapshot = BillingSnapshot {
        total_cold_rent: 850.0,
        utilities: 120.0,
        rooms: vec![
            Room::new("Office", 15.0, Some(tenant.id), false),
            Room::new("Kitchen", 9.0, None, true),
            Room::new("Storage", 4.0, None, false),
        ],
        tenants: vec![tenant],
    };

    let raw = export_snapshot(&snapshot).expect("export should succeed");
    let restored = import_snapshot(&raw).expect("import should succeed");
    assert_eq!(restored, snapshot);
}

#[test]
fn import_rejects_malformed_json() {
    let err = import_snapshot("{ not json").expect_err("malformed input must fail");
    assert!(matches!(err, SnapshotIoError::Parse(_)));
}

#[test]
fn import_rejects_wrong_shape() {
    let err = import_snapshot(r#"{"totalColdRent": "a lot"}"#)
        .expect_err("wrong field type must fail");
    assert!(matches!(err, SnapshotIoError::Parse(_)));
}

#[test]
fn import_rejects_invalid_room_area() {
    let raw = format!(
        r#"{{
            "totalColdRent": 100.0,
            "utilities": 0.0,
            "rooms": [{{"id": "{ROOM_ID}", "name": "Office", "area": 0.0, "tenantId": null, "isCommonArea": false}}],
            "tenants": []
        }}"#
    );
    let err = import_snapshot(&raw).expect_err("zero area must fail");
    match err {
        SnapshotIoError::InvalidRoom { room, .. } => assert_eq!(room, "Office"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn import_rejects_duplicate_tenant_names() {
    let raw = r#"{
        "totalColdRent": 100.0,
        "utilities": 0.0,
        "rooms": [],
        "tenants": [
            {"id": "11111111-2222-4333-8444-555555555555", "name": "Alice"},
            {"id": "22222222-2222-4333-8444-555555555555", "name": "ALICE"}
        ]
    }"#;
    let err = import_snapshot(raw).expect_err("duplicate tenant names must fail");
    assert!(matches!(err, SnapshotIoError::DuplicateTenant(name) if name == "ALICE"));
}

#[test]
fn import_rejects_empty_tenant_name() {
    let raw = r#"{
        "totalColdRent": 100.0,
        "utilities": 0.0,
        "rooms": [],
        "tenants": [{"id": "11111111-2222-4333-8444-555555555555", "name": "  "}]
    }"#;
    let err = import_snapshot(raw).expect_err("empty tenant name must fail");
    assert!(matches!(err, SnapshotIoError::EmptyTenantName));
}

#[test]
fn import_rejects_dangling_tenant_reference() {
    let raw = format!(
        r#"{{
            "totalColdRent": 100.0,
            "utilities": 0.0,
            "rooms": [{{"id": "{ROOM_ID}", "name": "Office", "area": 10.0, "tenantId": "{TENANT_ID}", "isCommonArea": false}}],
            "tenants": []
        }}"#
    );
    let err = import_snapshot(&raw).expect_err("dangling reference must fail");
    assert!(matches!(err, SnapshotIoError::UnknownTenantReference { room } if room == "Office"));
}

#[test]
fn import_normalizes_common_room_with_tenant_reference() {
    // The common flag wins; the stale reference is dropped instead of being
    // reported as dangling.
    let raw = format!(
        r#"{{
            "totalColdRent": 100.0,
            "utilities": 0.0,
            "rooms": [{{"id": "{ROOM_ID}", "name": "Lounge", "area": 10.0, "tenantId": "{TENANT_ID}", "isCommonArea": true}}],
            "tenants": []
        }}"#
    );
    let snapshot = import_snapshot(&raw).expect("import should succeed");
    assert_eq!(snapshot.rooms[0].tenant_id, None);
    assert!(snapshot.rooms[0].is_common_area);
}
