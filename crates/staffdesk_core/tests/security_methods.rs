use staffdesk_core::{
    MemoryBackend, NewTrustedDevice, NewTwoFactorMethod, RecordStore, SecurityService,
    TwoFactorKind,
};
use std::collections::HashSet;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

fn open_store() -> RecordStore<MemoryBackend> {
    RecordStore::open(MemoryBackend::new()).unwrap()
}

#[test]
fn enrolled_method_is_enabled_and_scoped_to_its_user() {
    let mut store = open_store();
    let mut security = SecurityService::new(&mut store);

    let method = security
        .enroll_method(NewTwoFactorMethod {
            user_id: 7,
            kind: TwoFactorKind::Totp,
            label: "Work phone".to_string(),
            secret: "JBSWY3DPEHPK3PXP".to_string(),
        })
        .unwrap();
    assert!(method.enabled);
    assert!(method.last_used_at.is_none());

    assert_eq!(security.list_methods(7).len(), 1);
    assert!(security.list_methods(8).is_empty());

    let disabled = security
        .set_method_enabled(method.id, false)
        .unwrap()
        .unwrap();
    assert!(!disabled.enabled);

    assert!(security.delete_method(method.id).unwrap());
    assert!(security.list_methods(7).is_empty());
}

#[test]
fn backup_codes_are_replaced_wholesale_on_regeneration() {
    let mut store = open_store();
    let mut security = SecurityService::new(&mut store);

    let first_batch = security.generate_backup_codes(7, 8).unwrap();
    assert_eq!(first_batch.len(), 8);
    assert!(first_batch.iter().all(|code| !code.used));

    let codes: HashSet<&str> = first_batch.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes.len(), 8, "generated codes should not collide");

    let second_batch = security.generate_backup_codes(7, 8).unwrap();
    assert_eq!(second_batch.len(), 8);

    let listed = security.list_backup_codes(7);
    assert_eq!(listed.len(), 8);
    let first_ids: HashSet<u64> = first_batch.iter().map(|c| c.id).collect();
    assert!(listed.iter().all(|code| !first_ids.contains(&code.id)));
}

#[test]
fn consuming_a_code_marks_exactly_one_code_used_once() {
    let mut store = open_store();
    let mut security = SecurityService::new(&mut store);

    let batch = security.generate_backup_codes(9, 4).unwrap();
    let chosen = batch[1].code.clone();

    let spent = security
        .consume_backup_code(9, &chosen)
        .unwrap()
        .expect("first consume should succeed");
    assert!(spent.used);
    assert!(spent.used_at.is_some());
    assert_eq!(spent.code, chosen);

    // Spent codes cannot be consumed again...
    assert!(security.consume_backup_code(9, &chosen).unwrap().is_none());
    // ...and the other user's namespace is unaffected.
    assert!(security.consume_backup_code(10, &chosen).unwrap().is_none());

    let used_count = security
        .list_backup_codes(9)
        .iter()
        .filter(|code| code.used)
        .count();
    assert_eq!(used_count, 1);
}

#[test]
fn trusted_device_gets_a_fresh_token_and_can_be_revoked() {
    let mut store = open_store();
    let mut security = SecurityService::new(&mut store);

    let device = security
        .register_trusted_device(NewTrustedDevice {
            user_id: 7,
            device_name: "Framework 13".to_string(),
            platform: "linux".to_string(),
        })
        .unwrap();

    Uuid::parse_str(&device.device_token).expect("device token should be a UUID");
    assert!(!device.last_seen_at.is_empty());

    let touched = security
        .touch_trusted_device(device.id)
        .unwrap()
        .unwrap();
    let before = OffsetDateTime::parse(&device.last_seen_at, &Rfc3339).unwrap();
    let after = OffsetDateTime::parse(&touched.last_seen_at, &Rfc3339).unwrap();
    assert!(after >= before);

    assert!(security.revoke_trusted_device(device.id).unwrap());
    assert!(security.list_trusted_devices(7).is_empty());
}
