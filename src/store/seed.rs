//! Fixed seed dataset
//!
//! The store is rebuilt from this data at every process start; there is no
//! durable persistence. Seed entities keep short fixed ids so the bootstrap
//! admin and the two demo branches are addressable in configuration and
//! tests. Ids of entities created at runtime are random UUIDs.

use crate::models::{Branch, Equipment, RequestStatus, Role, User};

use super::DirectoryState;

/// Id of the bootstrap admin account, which can never be deleted
pub const BOOTSTRAP_ADMIN_ID: &str = "1";

pub(super) fn initial_state() -> DirectoryState {
    let mut state = DirectoryState::default();

    let users = [
        User {
            id: BOOTSTRAP_ADMIN_ID.to_string(),
            username: "Admin".to_string(),
            password: "123".to_string(),
            role: Role::Admin,
            branch_id: None,
            contact_number: "000".to_string(),
            email: None,
            status: RequestStatus::Approved,
        },
        User {
            id: "2".to_string(),
            username: "Site Manager 1".to_string(),
            password: "123".to_string(),
            role: Role::Manager,
            branch_id: Some("1".to_string()),
            contact_number: "111".to_string(),
            email: None,
            status: RequestStatus::Approved,
        },
        User {
            id: "3".to_string(),
            username: "Site Manager 2".to_string(),
            password: "123".to_string(),
            role: Role::Manager,
            branch_id: Some("2".to_string()),
            contact_number: "222".to_string(),
            email: None,
            status: RequestStatus::Approved,
        },
    ];

    let branches = [
        Branch {
            id: "1".to_string(),
            name: "Main HQ".to_string(),
            code: "HQ001".to_string(),
            location: "New York".to_string(),
            manager_id: Some("2".to_string()),
        },
        Branch {
            id: "2".to_string(),
            name: "Downtown Branch".to_string(),
            code: "DT002".to_string(),
            location: "Chicago".to_string(),
            manager_id: Some("3".to_string()),
        },
    ];

    let equipment = [
        Equipment {
            id: "1".to_string(),
            equipment_type: "Excavator".to_string(),
            company_id: "CAT-101".to_string(),
            make: "Caterpillar".to_string(),
            model: "320D".to_string(),
            serial_number: "SN-001".to_string(),
            power: "200HP".to_string(),
            branch_id: "1".to_string(),
            condition: "Excellent".to_string(),
            image_url: "https://picsum.photos/seed/excavator/400/300".to_string(),
        },
        Equipment {
            id: "2".to_string(),
            equipment_type: "Generator".to_string(),
            company_id: "GEN-505".to_string(),
            make: "Honda".to_string(),
            model: "EU3000is".to_string(),
            serial_number: "SN-002".to_string(),
            power: "3kW".to_string(),
            branch_id: "1".to_string(),
            condition: "Good".to_string(),
            image_url: "https://picsum.photos/seed/generator/400/300".to_string(),
        },
        Equipment {
            id: "3".to_string(),
            equipment_type: "Crane".to_string(),
            company_id: "CRN-202".to_string(),
            make: "Liebherr".to_string(),
            model: "LTM 1250".to_string(),
            serial_number: "SN-003".to_string(),
            power: "500HP".to_string(),
            branch_id: "2".to_string(),
            condition: "New".to_string(),
            image_url: "https://picsum.photos/seed/crane/400/300".to_string(),
        },
    ];

    for user in users {
        state.users.insert(user.id.clone(), user);
    }
    for branch in branches {
        state.branches.insert(branch.id.clone(), branch);
    }
    for item in equipment {
        state.equipment.insert(item.id.clone(), item);
    }

    state
}
