//! Generic webhook integrations

use reqwest::Method;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateGenericIntegrationInput, GenericIntegration};

impl ShortcutClient {
    /// Registers an outgoing webhook. The API answers without a body.
    pub fn create_generic_integration(&self, input: &CreateGenericIntegrationInput) -> Result<()> {
        self.send_unit(Method::POST, "/integrations/webhook", Some(input))
    }

    pub fn get_generic_integration(&self, integration_id: i64) -> Result<GenericIntegration> {
        self.get(&resource_path("integrations/webhook", integration_id))
    }

    /// Removes a webhook
    pub fn delete_generic_integration(&self, integration_id: i64) -> Result<()> {
        self.delete(&resource_path("integrations/webhook", integration_id))
    }
}
