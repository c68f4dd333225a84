use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{Category, CreateCategoryInput, Objective, UpdateCategoryInput};

impl ShortcutClient {
    /// All categories in the workspace
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.get("/categories")
    }

    pub fn get_category(&self, category_id: i64) -> Result<Category> {
        self.get(&resource_path("categories", category_id))
    }

    pub fn create_category(&self, input: &CreateCategoryInput) -> Result<Category> {
        self.post("/categories", input)
    }

    /// Only fields set on `input` are sent
    pub fn update_category(&self, category_id: i64, input: &UpdateCategoryInput) -> Result<Category> {
        self.put(&resource_path("categories", category_id), input)
    }

    pub fn delete_category(&self, category_id: i64) -> Result<()> {
        self.delete(&resource_path("categories", category_id))
    }

    /// Objectives tagged with a category
    pub fn list_category_objectives(&self, category_id: i64) -> Result<Vec<Objective>> {
        self.get(&format!("{}/objectives", resource_path("categories", category_id)))
    }
}
