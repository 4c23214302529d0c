//! Workflow tests over the seeded in-memory directory
//!
//! Exercises the transfer, repair and registration state machines through
//! the service layer, against a fresh seeded store per test.

use equipmaster_server::{
    config::UsersConfig,
    error::AppError,
    models::{
        notification::{NotificationLink, Recipient},
        repair::CreateRepairRequest,
        transfer::CreateTransferRequest,
        user::{ChangePassword, RegisterUser},
        Decision, RequestStatus, Role,
    },
    services::Services,
    store::Store,
};

fn services() -> Services {
    Services::new(Store::seeded(), UsersConfig::default())
}

fn login(services: &Services, username: &str) -> equipmaster_server::models::User {
    let (_, user) = services
        .auth
        .login(username, "123")
        .expect("seed login should succeed");
    user
}

fn transfer_excavator_to_downtown(reason: &str) -> CreateTransferRequest {
    CreateTransferRequest {
        equipment_id: "1".to_string(),
        target_branch_id: "2".to_string(),
        reason: reason.to_string(),
    }
}

// -- transfers ---------------------------------------------------------------

#[test]
fn approved_transfer_relocates_equipment() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let request = services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Project needs"))
        .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.source_branch_id, "1");

    let approver = login(&services, "Site Manager 2");
    let decided = services
        .transfers
        .process(&approver, &request.id, Decision::Approved, None)
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);

    let excavator = services.directory.get_equipment("1").unwrap();
    assert_eq!(excavator.branch_id, "2");
    // The snapshot keeps pointing at the original source branch
    let stored = services.transfers.get(&request.id).unwrap();
    assert_eq!(stored.source_branch_id, "1");
}

#[test]
fn rejected_transfer_keeps_equipment_and_records_reason() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let request = services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Surplus"))
        .unwrap();

    let approver = login(&services, "Site Manager 2");
    let decided = services
        .transfers
        .process(
            &approver,
            &request.id,
            Decision::Rejected,
            Some("No capacity".to_string()),
        )
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Rejected);
    assert_eq!(decided.rejection_reason.as_deref(), Some("No capacity"));

    let excavator = services.directory.get_equipment("1").unwrap();
    assert_eq!(excavator.branch_id, "1");
}

#[test]
fn finalized_transfer_cannot_be_decided_again() {
    let services = services();
    let manager = login(&services, "Site Manager 1");
    let admin = login(&services, "Admin");

    let request = services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Once"))
        .unwrap();
    services
        .transfers
        .process(&admin, &request.id, Decision::Approved, None)
        .unwrap();

    let err = services
        .transfers
        .process(&admin, &request.id, Decision::Rejected, None)
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyFinalized(_)));

    // The first outcome stands
    let excavator = services.directory.get_equipment("1").unwrap();
    assert_eq!(excavator.branch_id, "2");
}

#[test]
fn transfer_to_current_branch_is_rejected() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let err = services
        .transfers
        .request(
            &manager,
            CreateTransferRequest {
                equipment_id: "1".to_string(),
                target_branch_id: "1".to_string(),
                reason: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn manager_cannot_request_transfer_for_foreign_equipment() {
    let services = services();
    // Crane (id 3) sits at branch 2; Site Manager 1 runs branch 1
    let manager = login(&services, "Site Manager 1");

    let err = services
        .transfers
        .request(
            &manager,
            CreateTransferRequest {
                equipment_id: "3".to_string(),
                target_branch_id: "1".to_string(),
                reason: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn only_target_branch_manager_or_admin_decides_transfer() {
    let services = services();
    let requester = login(&services, "Site Manager 1");

    let request = services
        .transfers
        .request(&requester, transfer_excavator_to_downtown("Move"))
        .unwrap();

    // The requesting manager runs the source branch, not the target
    let err = services
        .transfers
        .process(&requester, &request.id, Decision::Approved, None)
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let target_manager = login(&services, "Site Manager 2");
    let decided = services
        .transfers
        .process(&target_manager, &request.id, Decision::Approved, None)
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);
}

#[test]
fn transfer_notifies_target_branch_manager() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Move"))
        .unwrap();

    let target_manager = login(&services, "Site Manager 2");
    let inbox = services.notifications.list_for(&target_manager);
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].link, NotificationLink::Transfer);
    assert!(matches!(inbox[0].recipient, Recipient::User { ref id } if id == "3"));
    assert!(inbox[0].message.contains("Main HQ"));

    // The requesting manager gets nothing
    assert!(services.notifications.list_for(&manager).is_empty());
}

#[test]
fn transfer_to_managerless_branch_is_stored_without_notification() {
    let services = services();
    let admin = login(&services, "Admin");
    let manager = login(&services, "Site Manager 1");

    let orphan = services
        .directory
        .create_branch(
            &admin,
            equipmaster_server::models::branch::CreateBranch {
                name: "Staging Yard".to_string(),
                code: "SY003".to_string(),
                location: "Detroit".to_string(),
                manager_id: None,
            },
        )
        .unwrap();

    let request = services
        .transfers
        .request(
            &manager,
            CreateTransferRequest {
                equipment_id: "1".to_string(),
                target_branch_id: orphan.id.clone(),
                reason: "Stage for auction".to_string(),
            },
        )
        .unwrap();

    // The request stands even though nobody can be alerted
    let stored = services.transfers.get(&request.id).unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);
    assert_eq!(stored.target_branch_id, orphan.id);

    // No notification went out to anyone
    assert!(services.notifications.list_for(&admin).is_empty());
    assert!(services.notifications.list_for(&manager).is_empty());
    let other_manager = login(&services, "Site Manager 2");
    assert!(services.notifications.list_for(&other_manager).is_empty());
}

#[test]
fn missing_equipment_or_branch_fails_before_authorization() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let err = services
        .transfers
        .request(
            &manager,
            CreateTransferRequest {
                equipment_id: "nope".to_string(),
                target_branch_id: "2".to_string(),
                reason: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services
        .transfers
        .request(
            &manager,
            CreateTransferRequest {
                equipment_id: "1".to_string(),
                target_branch_id: "nope".to_string(),
                reason: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

// -- repairs -----------------------------------------------------------------

#[test]
fn repair_request_trims_and_drops_blank_faults() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let request = services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec![
                    "  Leaking fuel line ".to_string(),
                    "".to_string(),
                    "   ".to_string(),
                ],
                remarks: "Urgent".to_string(),
            },
        )
        .unwrap();

    assert_eq!(request.faults, vec!["Leaking fuel line".to_string()]);
    assert_eq!(request.branch_id, "1");
    assert_eq!(request.status, RequestStatus::Pending);
}

#[test]
fn repair_request_needs_at_least_one_fault() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let err = services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["".to_string(), "   ".to_string(), "".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn repair_request_caps_fault_count() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let err = services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: (0..11).map(|i| format!("fault {}", i)).collect(),
                remarks: String::new(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn repair_request_broadcasts_to_admins() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["Dead battery".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();

    let admin = login(&services, "Admin");
    let inbox = services.notifications.list_for(&admin);
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].recipient, Recipient::Admins);
    assert_eq!(inbox[0].link, NotificationLink::Repairs);

    // Managers do not see admin broadcasts
    assert!(services.notifications.list_for(&manager).is_empty());
}

#[test]
fn repair_snapshot_survives_a_later_transfer() {
    let services = services();
    let manager = login(&services, "Site Manager 1");
    let admin = login(&services, "Admin");

    let repair = services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "1".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["Hydraulic leak".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();
    assert_eq!(repair.branch_id, "1");

    // Move the excavator to the other branch after the repair was filed
    let transfer = services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Relocate"))
        .unwrap();
    services
        .transfers
        .process(&admin, &transfer.id, Decision::Approved, None)
        .unwrap();
    assert_eq!(
        services.directory.get_equipment("1").unwrap().branch_id,
        "2"
    );

    // The repair keeps recording where the fault was reported
    let stored = services.repairs.get(&repair.id).unwrap();
    assert_eq!(stored.branch_id, "1");
}

#[test]
fn repair_decision_is_admin_only_and_keeps_location() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let request = services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["Overheating".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();

    let err = services
        .repairs
        .process(&manager, &request.id, Decision::Approved)
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let admin = login(&services, "Admin");
    let decided = services
        .repairs
        .process(&admin, &request.id, Decision::Approved)
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);

    // Repair approval never relocates the asset
    let generator = services.directory.get_equipment("2").unwrap();
    assert_eq!(generator.branch_id, "1");

    let err = services
        .repairs
        .process(&admin, &request.id, Decision::Rejected)
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyFinalized(_)));
}

// -- registration ------------------------------------------------------------

#[test]
fn registration_lands_pending_with_defaults_and_alerts_admins() {
    let services = services();

    let sam = services
        .auth
        .register(RegisterUser {
            username: "Sam".to_string(),
            password: None,
            role: None,
            branch_id: None,
            email: None,
            contact_number: None,
        })
        .unwrap();

    assert_eq!(sam.status, RequestStatus::Pending);
    assert_eq!(sam.role, Role::Manager);
    assert_eq!(sam.branch_id.as_deref(), Some("1"));

    // Pending accounts cannot log in, even with the right password
    let err = services.auth.login("Sam", "123").unwrap_err();
    assert!(matches!(err, AppError::PendingApproval));

    let admin = login(&services, "Admin");
    let inbox = services.notifications.list_for(&admin);
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].link, NotificationLink::AdminPanel);
    assert!(inbox[0].message.contains("Sam"));

    // Approval unlocks login with the fallback password
    services.auth.approve(&admin, &sam.id).unwrap();
    let (_, logged_in) = services.auth.login("Sam", "123").unwrap();
    assert_eq!(logged_in.id, sam.id);
}

#[test]
fn rejected_registration_cannot_log_in() {
    let services = services();
    let admin = login(&services, "Admin");

    let sam = services
        .auth
        .register(RegisterUser {
            username: "Sam".to_string(),
            password: Some("secret".to_string()),
            role: None,
            branch_id: Some("2".to_string()),
            email: None,
            contact_number: None,
        })
        .unwrap();

    services.auth.reject(&admin, &sam.id).unwrap();
    let err = services.auth.login("Sam", "secret").unwrap_err();
    assert!(matches!(err, AppError::PendingApproval));
}

#[test]
fn login_rejects_bad_credentials() {
    let services = services();

    assert!(matches!(
        services.auth.login("Admin", "wrong").unwrap_err(),
        AppError::InvalidCredentials
    ));
    assert!(matches!(
        services.auth.login("Nobody", "123").unwrap_err(),
        AppError::InvalidCredentials
    ));
}

#[test]
fn change_password_requires_matching_old_password() {
    let services = services();
    let admin = login(&services, "Admin");

    let err = services
        .auth
        .change_password(
            &admin,
            ChangePassword {
                old_password: "wrong".to_string(),
                new_password: "456".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));

    services
        .auth
        .change_password(
            &admin,
            ChangePassword {
                old_password: "123".to_string(),
                new_password: "456".to_string(),
            },
        )
        .unwrap();

    assert!(services.auth.login("Admin", "123").is_err());
    assert!(services.auth.login("Admin", "456").is_ok());
}

#[test]
fn logout_invalidates_the_session_token() {
    let services = services();
    let (token, _) = services.auth.login("Admin", "123").unwrap();

    assert!(services.auth.authenticated_user(&token).is_ok());
    services.auth.logout(&token);
    assert!(matches!(
        services.auth.authenticated_user(&token).unwrap_err(),
        AppError::Authentication(_)
    ));
}

// -- notifications -----------------------------------------------------------

#[test]
fn notifications_list_newest_first_and_mark_read_is_scoped() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "1".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["first".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();
    services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "2".to_string(),
                faults: vec!["second".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();

    let admin = login(&services, "Admin");
    let inbox = services.notifications.list_for(&admin);
    assert_eq!(inbox.len(), 2);
    assert!(inbox[0].timestamp >= inbox[1].timestamp);

    // A manager may not mark an admin broadcast
    let err = services
        .notifications
        .mark_read(&manager, &inbox[0].id)
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let read = services.notifications.mark_read(&admin, &inbox[0].id).unwrap();
    assert!(read.read);
    // Idempotent
    let read_again = services.notifications.mark_read(&admin, &inbox[0].id).unwrap();
    assert!(read_again.read);
}

// -- directory guards --------------------------------------------------------

#[test]
fn bootstrap_admin_and_own_account_are_protected() {
    let services = services();
    let admin = login(&services, "Admin");

    assert!(matches!(
        services.directory.delete_user(&admin, "1").unwrap_err(),
        AppError::ProtectedAccount(_)
    ));

    // A second admin cannot delete their own account either
    services
        .directory
        .create_user(
            &admin,
            equipmaster_server::models::user::CreateUser {
                username: "Second Admin".to_string(),
                password: "pw".to_string(),
                role: Role::Admin,
                branch_id: None,
                email: None,
                contact_number: String::new(),
                status: None,
            },
        )
        .unwrap();
    let (_, other) = services.auth.login("Second Admin", "pw").unwrap();
    assert!(matches!(
        services.directory.delete_user(&other, &other.id).unwrap_err(),
        AppError::ProtectedAccount(_)
    ));

    // Deleting the other admin from the bootstrap account works
    services.directory.delete_user(&admin, &other.id).unwrap();
}

#[test]
fn directory_writes_are_admin_only() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let err = services
        .directory
        .create_branch(
            &manager,
            equipmaster_server::models::branch::CreateBranch {
                name: "Rogue".to_string(),
                code: "RG000".to_string(),
                location: "Nowhere".to_string(),
                manager_id: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = services.directory.delete_equipment(&manager, "1").unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

// -- stats -------------------------------------------------------------------

#[test]
fn dashboard_counts_pending_work() {
    let services = services();
    let manager = login(&services, "Site Manager 1");

    let before = services.stats.dashboard();
    assert_eq!(before.total_branches, 2);
    assert_eq!(before.total_equipment, 3);
    assert_eq!(before.pending_transfers, 0);

    services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("Count me"))
        .unwrap();
    services
        .auth
        .register(RegisterUser {
            username: "Sam".to_string(),
            password: None,
            role: None,
            branch_id: None,
            email: None,
            contact_number: None,
        })
        .unwrap();

    let after = services.stats.dashboard();
    assert_eq!(after.pending_transfers, 1);
    assert_eq!(after.pending_users, 1);
}

#[test]
fn history_merges_workflows_and_filters_by_branch() {
    let services = services();
    let manager = login(&services, "Site Manager 1");
    let admin = login(&services, "Admin");

    let transfer = services
        .transfers
        .request(&manager, transfer_excavator_to_downtown("History"))
        .unwrap();
    services
        .repairs
        .request(
            &manager,
            CreateRepairRequest {
                equipment_id: "2".to_string(),
                target_branch_id: "1".to_string(),
                faults: vec!["worn tracks".to_string()],
                remarks: String::new(),
            },
        )
        .unwrap();

    let all = services.stats.history(None);
    assert_eq!(all.len(), 2);

    // Branch 2 touches only the transfer (as its target)
    let branch_two = services.stats.history(Some("2"));
    assert_eq!(branch_two.len(), 1);
    assert_eq!(branch_two[0].id, transfer.id);

    services
        .transfers
        .process(&admin, &transfer.id, Decision::Approved, None)
        .unwrap();
    let decided = services.stats.history(Some("2"));
    assert_eq!(decided[0].status, RequestStatus::Approved);
}
