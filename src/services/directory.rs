//! Directory administration
//!
//! Plain entity CRUD on users, branches and equipment, reserved to ADMIN.
//! Reads are open to any authenticated subject. Equipment relocation
//! normally goes through the transfer workflow; the branch field on
//! `update_equipment` exists as a distinct admin correction.

use crate::{
    error::{AppError, AppResult},
    models::{
        branch::{CreateBranch, UpdateBranch},
        equipment::{CreateEquipment, UpdateEquipment},
        user::{CreateUser, UpdateUser},
        Branch, Equipment, RequestStatus, User,
    },
    policy,
    store::{self, Store, BOOTSTRAP_ADMIN_ID},
};

#[derive(Clone)]
pub struct DirectoryService {
    store: Store,
}

impl DirectoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // -- users --------------------------------------------------------------

    pub fn list_users(&self) -> Vec<User> {
        self.store.read().users()
    }

    pub fn get_user(&self, id: &str) -> AppResult<User> {
        self.store.read().user(id)
    }

    pub fn create_user(&self, actor: &User, create: CreateUser) -> AppResult<User> {
        policy::ensure_admin(actor, "User creation")?;

        let user = User {
            id: store::fresh_id(),
            username: create.username,
            password: create.password,
            role: create.role,
            branch_id: create.branch_id,
            contact_number: create.contact_number,
            email: create.email,
            status: create.status.unwrap_or(RequestStatus::Approved),
        };
        self.store.write().insert_user(user.clone())?;
        Ok(user)
    }

    pub fn update_user(&self, actor: &User, id: &str, update: UpdateUser) -> AppResult<User> {
        policy::ensure_admin(actor, "User update")?;

        let mut state = self.store.write();
        let mut user = state.user(id)?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(branch_id) = update.branch_id {
            user.branch_id = Some(branch_id);
        }
        if let Some(email) = update.email {
            user.email = Some(email);
        }
        if let Some(contact_number) = update.contact_number {
            user.contact_number = contact_number;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        state.replace_user(user.clone())?;
        Ok(user)
    }

    /// Delete a user. The bootstrap admin and the acting user's own account
    /// are protected.
    pub fn delete_user(&self, actor: &User, id: &str) -> AppResult<()> {
        policy::ensure_admin(actor, "User deletion")?;

        if id == BOOTSTRAP_ADMIN_ID {
            return Err(AppError::ProtectedAccount(
                "The system admin cannot be deleted".to_string(),
            ));
        }
        if id == actor.id {
            return Err(AppError::ProtectedAccount(
                "You cannot delete your own account while logged in".to_string(),
            ));
        }
        self.store.write().remove_user(id)
    }

    // -- branches -----------------------------------------------------------

    pub fn list_branches(&self) -> Vec<Branch> {
        self.store.read().branches()
    }

    pub fn get_branch(&self, id: &str) -> AppResult<Branch> {
        self.store.read().branch(id)
    }

    /// Create a branch. The manager reference is not validated; it may
    /// dangle and is then reported as unassigned.
    pub fn create_branch(&self, actor: &User, create: CreateBranch) -> AppResult<Branch> {
        policy::ensure_admin(actor, "Branch creation")?;

        let branch = Branch {
            id: store::fresh_id(),
            name: create.name,
            code: create.code,
            location: create.location,
            manager_id: create.manager_id,
        };
        self.store.write().insert_branch(branch.clone())?;
        Ok(branch)
    }

    pub fn update_branch(&self, actor: &User, id: &str, update: UpdateBranch) -> AppResult<Branch> {
        policy::ensure_admin(actor, "Branch update")?;

        let mut state = self.store.write();
        let mut branch = state.branch(id)?;
        if let Some(name) = update.name {
            branch.name = name;
        }
        if let Some(code) = update.code {
            branch.code = code;
        }
        if let Some(location) = update.location {
            branch.location = location;
        }
        if let Some(manager_id) = update.manager_id {
            branch.manager_id = Some(manager_id);
        }
        state.replace_branch(branch.clone())?;
        Ok(branch)
    }

    pub fn delete_branch(&self, actor: &User, id: &str) -> AppResult<()> {
        policy::ensure_admin(actor, "Branch deletion")?;
        self.store.write().remove_branch(id)
    }

    // -- equipment ----------------------------------------------------------

    pub fn list_equipment(&self) -> Vec<Equipment> {
        self.store.read().equipment_list()
    }

    pub fn get_equipment(&self, id: &str) -> AppResult<Equipment> {
        self.store.read().equipment(id)
    }

    pub fn create_equipment(&self, actor: &User, create: CreateEquipment) -> AppResult<Equipment> {
        policy::ensure_admin(actor, "Equipment creation")?;

        let mut state = self.store.write();
        state.branch(&create.branch_id)?;

        let item = Equipment {
            id: store::fresh_id(),
            equipment_type: create.equipment_type,
            company_id: create.company_id,
            make: create.make,
            model: create.model,
            serial_number: create.serial_number,
            power: create.power,
            branch_id: create.branch_id,
            condition: create.condition.unwrap_or_else(|| "New".to_string()),
            image_url: create.image_url.unwrap_or_default(),
        };
        state.insert_equipment(item.clone())?;
        Ok(item)
    }

    pub fn update_equipment(
        &self,
        actor: &User,
        id: &str,
        update: UpdateEquipment,
    ) -> AppResult<Equipment> {
        policy::ensure_admin(actor, "Equipment update")?;

        let mut state = self.store.write();
        let mut item = state.equipment(id)?;
        if let Some(equipment_type) = update.equipment_type {
            item.equipment_type = equipment_type;
        }
        if let Some(company_id) = update.company_id {
            item.company_id = company_id;
        }
        if let Some(make) = update.make {
            item.make = make;
        }
        if let Some(model) = update.model {
            item.model = model;
        }
        if let Some(serial_number) = update.serial_number {
            item.serial_number = serial_number;
        }
        if let Some(power) = update.power {
            item.power = power;
        }
        if let Some(branch_id) = update.branch_id {
            state.branch(&branch_id)?;
            item.branch_id = branch_id;
        }
        if let Some(condition) = update.condition {
            item.condition = condition;
        }
        if let Some(image_url) = update.image_url {
            item.image_url = image_url;
        }
        state.replace_equipment(item.clone())?;
        Ok(item)
    }

    pub fn delete_equipment(&self, actor: &User, id: &str) -> AppResult<()> {
        policy::ensure_admin(actor, "Equipment deletion")?;
        self.store.write().remove_equipment(id)
    }
}
