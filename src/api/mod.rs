//! Endpoint methods on [`crate::ShortcutClient`], one module per resource

mod categories;
mod custom_fields;
mod docs;
mod epics;
mod files;
mod groups;
mod integrations;
mod iterations;
mod labels;
mod members;
mod milestones;
mod objectives;
mod projects;
mod repositories;
mod search;
mod stories;
mod templates;
mod workflows;

/// `includes_description` filter accepted by the `/{resource}/{id}/stories`
/// endpoints
pub(crate) fn description_query(includes_description: Option<bool>) -> Vec<(String, String)> {
    includes_description
        .map(|flag| vec![("includes_description".to_string(), flag.to_string())])
        .unwrap_or_default()
}
