//! Repair workflow
//!
//! Same state-machine shape as transfers, but approval carries no
//! relocation: it only closes the request ("fixed in place").

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        notification::{NotificationLink, Recipient},
        repair::{CreateRepairRequest, MAX_FAULTS},
        Decision, RepairRequest, RequestStatus, User,
    },
    policy,
    store::{self, Store},
};

#[derive(Clone)]
pub struct RepairsService {
    store: Store,
}

impl RepairsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All repair requests, insertion order
    pub fn list(&self) -> Vec<RepairRequest> {
        self.store.read().repairs()
    }

    pub fn get(&self, id: &str) -> AppResult<RepairRequest> {
        self.store.read().repair(id)
    }

    /// File a repair request. Blank fault slots are dropped before storing;
    /// at least one non-empty fault must remain. The reporting branch is
    /// captured as a snapshot of the equipment's branch at this moment and
    /// is never updated, even if the asset is transferred later.
    pub fn request(&self, actor: &User, create: CreateRepairRequest) -> AppResult<RepairRequest> {
        if create.faults.len() > MAX_FAULTS {
            return Err(AppError::Validation(format!(
                "At most {} faults per repair request",
                MAX_FAULTS
            )));
        }
        let faults: Vec<String> = create
            .faults
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if faults.is_empty() {
            return Err(AppError::Validation(
                "At least one fault description is required".to_string(),
            ));
        }

        let mut state = self.store.write();

        let equipment = state.equipment(&create.equipment_id)?;
        state.branch(&create.target_branch_id)?;
        policy::ensure_can_request(actor, &equipment)?;

        let request = RepairRequest {
            id: store::fresh_id(),
            equipment_id: equipment.id.clone(),
            branch_id: equipment.branch_id.clone(),
            target_branch_id: create.target_branch_id,
            faults,
            remarks: create.remarks,
            status: RequestStatus::Pending,
            timestamp: Utc::now(),
        };
        state.insert_repair(request.clone())?;

        let branch_name = state
            .branch(&request.branch_id)
            .map(|b| b.name)
            .unwrap_or_else(|_| request.branch_id.clone());
        state.push_notification(
            Recipient::Admins,
            "Repair request submitted",
            format!("Repair needed for equipment in {}", branch_name),
            NotificationLink::Repairs,
        );

        tracing::info!(
            request_id = %request.id,
            equipment_id = %request.equipment_id,
            faults = request.faults.len(),
            "repair requested"
        );
        Ok(request)
    }

    /// Decide a pending repair request; admin-only, no further side effect
    pub fn process(
        &self,
        actor: &User,
        request_id: &str,
        decision: Decision,
    ) -> AppResult<RepairRequest> {
        policy::ensure_can_decide_repair(actor)?;

        let mut state = self.store.write();
        let mut request = state.repair(request_id)?;

        if request.status.is_terminal() {
            return Err(AppError::AlreadyFinalized(format!(
                "Repair request {} is already {}",
                request.id, request.status
            )));
        }

        request.status = RequestStatus::from(decision);
        state.replace_repair(request.clone())?;

        tracing::info!(
            request_id = %request.id,
            status = %request.status,
            "repair processed"
        );
        Ok(request)
    }
}
