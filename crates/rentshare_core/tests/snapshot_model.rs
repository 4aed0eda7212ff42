use rentshare_core::{BillingSnapshot, Room, Tenant};
use uuid::Uuid;

#[test]
fn snapshot_serialization_uses_expected_wire_fields() {
    let tenant_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let room_id = Uuid::parse_str("aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee").unwrap();

    let snapshot = BillingSnapshot {
        total_cold_rent: 1250.0,
        utilities: 180.5,
        rooms: vec![Room::with_id(room_id, "Office 1", 17.5, Some(tenant_id), false)],
        tenants: vec![Tenant::with_id(tenant_id, "Alice")],
    };

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["totalColdRent"], 1250.0);
    assert_eq!(json["utilities"], 180.5);
    assert_eq!(json["rooms"][0]["id"], room_id.to_string());
    assert_eq!(json["rooms"][0]["name"], "Office 1");
    assert_eq!(json["rooms"][0]["area"], 17.5);
    assert_eq!(json["rooms"][0]["tenantId"], tenant_id.to_string());
    assert_eq!(json["rooms"][0]["isCommonArea"], false);
    assert_eq!(json["tenants"][0]["id"], tenant_id.to_string());
    assert_eq!(json["tenants"][0]["name"], "Alice");

    let decoded: BillingSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn common_room_serializes_null_tenant_reference() {
    let room = Room::new("Lounge", 22.0, Some(Uuid::new_v4()), true);
    let json = serde_json::to_value(&room).unwrap();
    assert_eq!(json["tenantId"], serde_json::Value::Null);
    assert_eq!(json["isCommonArea"], true);
}

#[test]
fn default_snapshot_is_empty() {
    let snapshot = BillingSnapshot::default();
    assert_eq!(snapshot.total_cold_rent, 0.0);
    assert_eq!(snapshot.utilities, 0.0);
    assert!(snapshot.rooms.is_empty());
    assert!(snapshot.tenants.is_empty());
}

#[test]
fn rent_inputs_mirror_snapshot_figures() {
    let snapshot = BillingSnapshot {
        total_cold_rent: 640.0,
        utilities: 75.0,
        ..BillingSnapshot::default()
    };
    let inputs = snapshot.rent_inputs();
    assert_eq!(inputs.total_cold_rent, 640.0);
    assert_eq!(inputs.utilities, 75.0);
}

#[test]
fn tenant_name_lookup_resolves_by_id() {
    let alice = Tenant::new("Alice");
    let snapshot = BillingSnapshot {
        tenants: vec![alice.clone()],
        ..BillingSnapshot::default()
    };
    assert_eq!(snapshot.tenant_name(alice.id), Some("Alice"));
    assert_eq!(snapshot.tenant_name(Uuid::new_v4()), None);
}
