//! Transfer workflow
//!
//! PENDING -> APPROVED | REJECTED, both terminal. Approval is the only path
//! that relocates equipment; the move and the status write happen under one
//! lock acquisition so no intermediate state is observable.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        notification::{NotificationLink, Recipient},
        transfer::CreateTransferRequest,
        Decision, RequestStatus, TransferRequest, User,
    },
    policy,
    store::{self, Store},
};

#[derive(Clone)]
pub struct TransfersService {
    store: Store,
}

impl TransfersService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All transfer requests, insertion order
    pub fn list(&self) -> Vec<TransferRequest> {
        self.store.read().transfers()
    }

    pub fn get(&self, id: &str) -> AppResult<TransferRequest> {
        self.store.read().transfer(id)
    }

    /// File a relocation request. The source branch is captured as a
    /// snapshot of the equipment's branch at this moment; the target
    /// branch's manager is notified.
    pub fn request(
        &self,
        actor: &User,
        create: CreateTransferRequest,
    ) -> AppResult<TransferRequest> {
        let mut state = self.store.write();

        let equipment = state.equipment(&create.equipment_id)?;
        let target = state.branch(&create.target_branch_id)?;
        policy::ensure_can_request(actor, &equipment)?;

        if target.id == equipment.branch_id {
            return Err(AppError::Validation(
                "Transfer target equals the equipment's current branch".to_string(),
            ));
        }

        let request = TransferRequest {
            id: store::fresh_id(),
            equipment_id: equipment.id.clone(),
            source_branch_id: equipment.branch_id.clone(),
            target_branch_id: target.id.clone(),
            reason: create.reason,
            status: RequestStatus::Pending,
            rejection_reason: None,
            timestamp: Utc::now(),
        };
        state.insert_transfer(request.clone())?;

        // A dangling manager reference on the target branch is tolerated;
        // the request stands, nobody gets alerted.
        if let Some(manager_id) = target.manager_id {
            let source_name = state
                .branch(&equipment.branch_id)
                .map(|b| b.name)
                .unwrap_or_else(|_| equipment.branch_id.clone());
            state.push_notification(
                Recipient::User { id: manager_id },
                "Transfer approval needed",
                format!("Equipment transfer request from {}", source_name),
                NotificationLink::Transfer,
            );
        }

        tracing::info!(
            request_id = %request.id,
            equipment_id = %request.equipment_id,
            target_branch_id = %request.target_branch_id,
            "transfer requested"
        );
        Ok(request)
    }

    /// Decide a pending request. Approval moves the equipment to the target
    /// branch; rejection records the optional reason. Terminal requests
    /// cannot be decided again.
    pub fn process(
        &self,
        actor: &User,
        request_id: &str,
        decision: Decision,
        reason: Option<String>,
    ) -> AppResult<TransferRequest> {
        let mut state = self.store.write();

        let mut request = state.transfer(request_id)?;
        policy::ensure_can_decide_transfer(actor, &request)?;

        if request.status.is_terminal() {
            return Err(AppError::AlreadyFinalized(format!(
                "Transfer request {} is already {}",
                request.id, request.status
            )));
        }

        match decision {
            Decision::Approved => {
                let mut equipment = state.equipment(&request.equipment_id)?;
                equipment.branch_id = request.target_branch_id.clone();
                state.replace_equipment(equipment)?;
                request.status = RequestStatus::Approved;
            }
            Decision::Rejected => {
                request.status = RequestStatus::Rejected;
                request.rejection_reason = reason;
            }
        }
        state.replace_transfer(request.clone())?;

        tracing::info!(
            request_id = %request.id,
            status = %request.status,
            "transfer processed"
        );
        Ok(request)
    }
}
