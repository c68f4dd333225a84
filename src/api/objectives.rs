//! Objectives and key results

use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateObjectiveInput, Epic, KeyResult, Objective, UpdateKeyResultInput, UpdateObjectiveInput};

impl ShortcutClient {
    pub fn list_objectives(&self) -> Result<Vec<Objective>> {
        self.get("/objectives")
    }

    pub fn get_objective(&self, objective_id: i64) -> Result<Objective> {
        self.get(&resource_path("objectives", objective_id))
    }

    pub fn create_objective(&self, input: &CreateObjectiveInput) -> Result<Objective> {
        self.post("/objectives", input)
    }

    /// Only fields set on `input` are sent
    pub fn update_objective(&self, objective_id: i64, input: &UpdateObjectiveInput) -> Result<Objective> {
        self.put(&resource_path("objectives", objective_id), input)
    }

    pub fn delete_objective(&self, objective_id: i64) -> Result<()> {
        self.delete(&resource_path("objectives", objective_id))
    }

    /// Epics contributing to an objective
    pub fn list_objective_epics(&self, objective_id: i64) -> Result<Vec<Epic>> {
        self.get(&format!("{}/epics", resource_path("objectives", objective_id)))
    }

    // ==================== KEY RESULTS ====================

    /// Fetches a key result
    ///
    /// # Arguments
    ///
    /// - `key_result_id`: UUID, unlike the integer id of the owning
    ///   objective. Ids come from [`Objective::key_result_ids`].
    pub fn get_key_result(&self, key_result_id: Uuid) -> Result<KeyResult> {
        self.get(&resource_path("key-results", key_result_id))
    }

    /// Updates a key result's name or values
    ///
    /// # Arguments
    ///
    /// - `key_result_id`: UUID of the key result
    /// - `input`: values must match the key result type, e.g.
    ///   [`crate::types::KeyResultValue::boolean`] for boolean ones
    ///
    /// # Errors
    ///
    /// - **ValidationFailed**: value of the wrong kind for the key result type
    pub fn update_key_result(&self, key_result_id: Uuid, input: &UpdateKeyResultInput) -> Result<KeyResult> {
        self.put(&resource_path("key-results", key_result_id), input)
    }
}
