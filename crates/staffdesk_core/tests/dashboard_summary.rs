use staffdesk_core::{
    DashboardService, EmployeeService, EmployeeStatus, EmployeeUpdate, LeaveService, LeaveType,
    MemoryBackend, NewEmployee, NewLeaveRequest, NewUser, RecordStore, TrainingService,
    UserRole, UserService, UserStatus, UserUpdate,
};

fn hire(code: &str) -> NewEmployee {
    NewEmployee {
        employee_id: code.to_string(),
        name: "worker".to_string(),
        email: format!("{code}@staffdesk.test"),
        department: "Ops".to_string(),
        position: "Operator".to_string(),
        salary: 40_000.0,
        hired_on: "2024-01-01".to_string(),
    }
}

fn leave_request(employee_id: u64) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id,
        leave_type: LeaveType::Sick,
        start_date: "2025-02-03".to_string(),
        end_date: "2025-02-04".to_string(),
        days: 2.0,
        reason: "flu".to_string(),
    }
}

#[test]
fn empty_store_yields_all_zero_counters() {
    let store = RecordStore::open(MemoryBackend::new()).unwrap();
    let summary = DashboardService::new(&store).summary();
    assert_eq!(summary, Default::default());
}

#[test]
fn summary_buckets_employees_users_leave_and_trainings() {
    let mut store = RecordStore::open(MemoryBackend::new()).unwrap();

    let (active, benched, away) = {
        let mut employees = EmployeeService::new(&mut store);
        let active = employees.create_employee(hire("EMP01")).unwrap();
        let benched = employees.create_employee(hire("EMP02")).unwrap();
        let away = employees.create_employee(hire("EMP03")).unwrap();
        employees
            .update_employee(
                benched.id,
                EmployeeUpdate {
                    status: Some(EmployeeStatus::Inactive),
                    ..EmployeeUpdate::default()
                },
            )
            .unwrap();
        employees
            .update_employee(
                away.id,
                EmployeeUpdate {
                    status: Some(EmployeeStatus::OnLeave),
                    ..EmployeeUpdate::default()
                },
            )
            .unwrap();
        (active.id, benched.id, away.id)
    };

    {
        let mut users = UserService::new(&mut store);
        users
            .create_user(NewUser {
                name: "adm".to_string(),
                email: "adm@staffdesk.test".to_string(),
                role: UserRole::Admin,
            })
            .unwrap();
        let suspended = users
            .create_user(NewUser {
                name: "gone".to_string(),
                email: "gone@staffdesk.test".to_string(),
                role: UserRole::Employee,
            })
            .unwrap();
        users
            .update_user(
                suspended.id,
                UserUpdate {
                    status: Some(UserStatus::Suspended),
                    ..UserUpdate::default()
                },
            )
            .unwrap();
    }

    {
        let mut leave = LeaveService::new(&mut store);
        let first = leave.submit_request(leave_request(active)).unwrap();
        leave.submit_request(leave_request(benched)).unwrap();
        let third = leave.submit_request(leave_request(away)).unwrap();
        leave.approve(first.id, 1).unwrap().unwrap();
        leave.reject(third.id, 1, "coverage gap").unwrap().unwrap();
    }

    {
        let mut training = TrainingService::new(&mut store);
        let enrollment = training.enroll(active, 1).unwrap();
        training
            .update_enrollment(
                enrollment.id,
                staffdesk_core::EnrollmentUpdate {
                    status: Some(staffdesk_core::TrainingStatus::InProgress),
                    progress_pct: Some(25),
                },
            )
            .unwrap();
        training.enroll(benched, 1).unwrap();
    }

    let summary = DashboardService::new(&store).summary();
    assert_eq!(summary.total_employees, 3);
    assert_eq!(summary.active_employees, 1);
    assert_eq!(summary.on_leave_employees, 1);
    assert_eq!(summary.active_users, 1);
    assert_eq!(summary.pending_leave_requests, 1);
    assert_eq!(summary.approved_leave_requests, 1);
    assert_eq!(summary.rejected_leave_requests, 1);
    assert_eq!(summary.trainings_in_progress, 1);
}
