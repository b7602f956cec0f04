use staffdesk_core::{
    EmployeeQuery, EmployeeService, EmployeeStatus, EmployeeUpdate, MemoryBackend, NewEmployee,
    RecordStore, TextFilter,
};
use std::collections::HashSet;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn open_store() -> RecordStore<MemoryBackend> {
    RecordStore::open(MemoryBackend::new()).unwrap()
}

fn hire(code: &str, name: &str, department: &str) -> NewEmployee {
    NewEmployee {
        employee_id: code.to_string(),
        name: name.to_string(),
        email: format!("{name}@staffdesk.test"),
        department: department.to_string(),
        position: "Engineer".to_string(),
        salary: 52_000.0,
        hired_on: "2024-06-01".to_string(),
    }
}

#[test]
fn create_then_get_returns_equal_record() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let created = service
        .create_employee(hire("EMP001", "ana", "Engineering"))
        .unwrap();

    assert!(created.id > 0);
    assert!(!created.created_at.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.status, EmployeeStatus::Active);

    let loaded = service.get_employee(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn ids_are_unique_and_ascending_under_rapid_creates() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let mut ids = Vec::new();
    for n in 0..50 {
        let created = service
            .create_employee(hire(&format!("EMP{n:03}"), "worker", "Ops"))
            .unwrap();
        ids.push(created.id);
    }

    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn update_changes_only_patched_fields_and_refreshes_updated_at() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let created = service
        .create_employee(hire("EMP002", "ben", "Engineering"))
        .unwrap();

    let updated = service
        .update_employee(
            created.id,
            EmployeeUpdate {
                salary: Some(61_000.0),
                ..EmployeeUpdate::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.salary, 61_000.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.department, created.department);
    assert_eq!(updated.position, created.position);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.employee_id, created.employee_id);
    assert_eq!(updated.created_at, created.created_at);

    let before = OffsetDateTime::parse(&created.updated_at, &Rfc3339).unwrap();
    let after = OffsetDateTime::parse(&updated.updated_at, &Rfc3339).unwrap();
    assert!(after >= before);
}

#[test]
fn delete_then_get_returns_none() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let created = service
        .create_employee(hire("EMP003", "cho", "Sales"))
        .unwrap();

    assert!(service.delete_employee(created.id).unwrap());
    assert!(service.get_employee(created.id).is_none());
}

#[test]
fn update_and_delete_on_missing_id_report_not_found() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let patched = service
        .update_employee(4242, EmployeeUpdate::default())
        .unwrap();
    assert!(patched.is_none());
    assert!(!service.delete_employee(4242).unwrap());
}

#[test]
fn get_all_applies_and_semantics_in_insertion_order() {
    let mut store = open_store();
    let mut service = EmployeeService::new(&mut store);

    let a = service
        .create_employee(hire("EMP010", "ana", "Engineering"))
        .unwrap();
    let b = service
        .create_employee(hire("EMP011", "ben", "Engineering"))
        .unwrap();
    let c = service
        .create_employee(hire("EMP012", "cho", "Sales"))
        .unwrap();
    service
        .update_employee(
            b.id,
            EmployeeUpdate {
                status: Some(EmployeeStatus::Inactive),
                ..EmployeeUpdate::default()
            },
        )
        .unwrap();

    let everyone = service.get_all_employees(&EmployeeQuery::default());
    assert_eq!(everyone.len(), 3);
    let all_ids: Vec<u64> = everyone.iter().map(|e| e.id).collect();
    assert_eq!(all_ids, vec![a.id, b.id, c.id]);

    let query = EmployeeQuery {
        status: Some(EmployeeStatus::Active),
        department: Some(TextFilter::equals("Engineering")),
        name: None,
    };
    let matched = service.get_all_employees(&query);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, a.id);

    // Every filtered result appears in the unfiltered listing.
    for hit in &matched {
        assert!(everyone.contains(hit));
    }

    let substring = EmployeeQuery {
        department: Some(TextFilter::contains("gineer")),
        ..EmployeeQuery::default()
    };
    let matched = service.get_all_employees(&substring);
    let ids: Vec<u64> = matched.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    assert!(!ids.contains(&c.id));
}
