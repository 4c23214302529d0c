//! Authorization policy
//!
//! Pure decisions over (actor, action, target), evaluated fresh for every
//! operation. Workflows must call the relevant check before applying any
//! side effect.

use crate::{
    error::{AppError, AppResult},
    models::{Equipment, Role, TransferRequest, User},
};

/// Write grants attached to a role. OPERATOR and USER hold none today; the
/// tiers exist so grants can be widened without touching call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Entity CRUD and user approval, unrestricted across branches
    pub manage_directory: bool,
    /// Create transfer/repair requests for equipment held by the own branch
    pub request_for_own_branch: bool,
    /// Approve/reject transfers targeting the own branch
    pub decide_inbound_transfers: bool,
    /// Approve/reject repair requests (central maintenance action)
    pub decide_repairs: bool,
}

pub fn capabilities(role: Role) -> Capabilities {
    match role {
        Role::Admin => Capabilities {
            manage_directory: true,
            request_for_own_branch: true,
            decide_inbound_transfers: true,
            decide_repairs: true,
        },
        Role::Manager => Capabilities {
            manage_directory: false,
            request_for_own_branch: true,
            decide_inbound_transfers: true,
            decide_repairs: false,
        },
        Role::Operator | Role::User => Capabilities {
            manage_directory: false,
            request_for_own_branch: false,
            decide_inbound_transfers: false,
            decide_repairs: false,
        },
    }
}

/// Directory administration and user approval are admin-only
pub fn ensure_admin(actor: &User, action: &str) -> AppResult<()> {
    if capabilities(actor.role).manage_directory {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "{} requires the ADMIN role",
            action
        )))
    }
}

/// Creating a transfer or repair request is limited to equipment currently
/// held by the actor's own branch (admins are unscoped)
pub fn ensure_can_request(actor: &User, equipment: &Equipment) -> AppResult<()> {
    let caps = capabilities(actor.role);
    if caps.manage_directory {
        return Ok(());
    }
    if caps.request_for_own_branch && actor.branch_id.as_deref() == Some(&equipment.branch_id) {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "Equipment {} is not held by your branch",
        equipment.id
    )))
}

/// Deciding a transfer is reserved to admins and to the manager of the
/// request's target branch
pub fn ensure_can_decide_transfer(actor: &User, request: &TransferRequest) -> AppResult<()> {
    let caps = capabilities(actor.role);
    if caps.manage_directory {
        return Ok(());
    }
    if caps.decide_inbound_transfers
        && actor.branch_id.as_deref() == Some(&request.target_branch_id)
    {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "Transfer {} does not target your branch",
        request.id
    )))
}

/// Repair decisions are a central maintenance action, admin-only
pub fn ensure_can_decide_repair(actor: &User) -> AppResult<()> {
    if capabilities(actor.role).decide_repairs {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Repair decisions require the ADMIN role".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequestStatus, Role};
    use chrono::Utc;

    fn actor(role: Role, branch: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            username: "test".to_string(),
            password: "123".to_string(),
            role,
            branch_id: branch.map(str::to_string),
            contact_number: String::new(),
            email: None,
            status: RequestStatus::Approved,
        }
    }

    fn excavator_at(branch: &str) -> Equipment {
        Equipment {
            id: "e1".to_string(),
            equipment_type: "Excavator".to_string(),
            company_id: String::new(),
            make: String::new(),
            model: String::new(),
            serial_number: String::new(),
            power: String::new(),
            branch_id: branch.to_string(),
            condition: "Good".to_string(),
            image_url: String::new(),
        }
    }

    fn transfer_to(branch: &str) -> TransferRequest {
        TransferRequest {
            id: "t1".to_string(),
            equipment_id: "e1".to_string(),
            source_branch_id: "A".to_string(),
            target_branch_id: branch.to_string(),
            reason: String::new(),
            status: RequestStatus::Pending,
            rejection_reason: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn manager_requests_only_for_own_branch() {
        let manager = actor(Role::Manager, Some("A"));
        assert!(ensure_can_request(&manager, &excavator_at("A")).is_ok());
        assert!(matches!(
            ensure_can_request(&manager, &excavator_at("B")),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn manager_decides_only_inbound_transfers() {
        let manager = actor(Role::Manager, Some("B"));
        assert!(ensure_can_decide_transfer(&manager, &transfer_to("B")).is_ok());
        assert!(matches!(
            ensure_can_decide_transfer(&manager, &transfer_to("C")),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_is_unscoped() {
        let admin = actor(Role::Admin, None);
        assert!(ensure_can_request(&admin, &excavator_at("B")).is_ok());
        assert!(ensure_can_decide_transfer(&admin, &transfer_to("C")).is_ok());
        assert!(ensure_can_decide_repair(&admin).is_ok());
        assert!(ensure_admin(&admin, "delete user").is_ok());
    }

    #[test]
    fn repair_decisions_are_admin_only() {
        let manager = actor(Role::Manager, Some("B"));
        assert!(matches!(
            ensure_can_decide_repair(&manager),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn read_only_roles_hold_no_write_grants() {
        for role in [Role::Operator, Role::User] {
            let caps = capabilities(role);
            assert!(!caps.manage_directory);
            assert!(!caps.request_for_own_branch);
            assert!(!caps.decide_inbound_transfers);
            assert!(!caps.decide_repairs);

            let user = actor(role, Some("A"));
            assert!(ensure_can_request(&user, &excavator_at("A")).is_err());
        }
    }
}
