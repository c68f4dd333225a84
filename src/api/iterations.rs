use reqwest::Method;
use serde_json::Value;

use crate::api::description_query;
use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateIterationInput, Iteration, Story, UpdateIterationInput};

impl ShortcutClient {
    pub fn list_iterations(&self) -> Result<Vec<Iteration>> {
        self.get("/iterations")
    }

    pub fn get_iteration(&self, iteration_id: i64) -> Result<Iteration> {
        self.get(&resource_path("iterations", iteration_id))
    }

    /// Creates an iteration. Start and end dates are plain calendar dates.
    pub fn create_iteration(&self, input: &CreateIterationInput) -> Result<Iteration> {
        self.post("/iterations", input)
    }

    pub fn update_iteration(&self, iteration_id: i64, input: &UpdateIterationInput) -> Result<Iteration> {
        self.put(&resource_path("iterations", iteration_id), input)
    }

    pub fn delete_iteration(&self, iteration_id: i64) -> Result<()> {
        self.delete(&resource_path("iterations", iteration_id))
    }

    /// Stories in an iteration. Descriptions are left out unless asked for.
    pub fn list_iteration_stories(&self, iteration_id: i64, includes_description: Option<bool>) -> Result<Vec<Story>> {
        let path = format!("{}/stories", resource_path("iterations", iteration_id));
        self.get_query(&path, description_query(includes_description))
    }

    /// Turns the iterations feature on for the workspace
    pub fn enable_iterations(&self) -> Result<()> {
        self.send_unit(Method::PUT, "/iterations/enable", None::<&Value>)
    }

    /// Turns the iterations feature off. Existing iterations are kept.
    pub fn disable_iterations(&self) -> Result<()> {
        self.send_unit(Method::PUT, "/iterations/disable", None::<&Value>)
    }
}
