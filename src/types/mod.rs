//! Shortcut API types
//!
//! Strongly typed records for every resource the client talks to, plus the
//! `Create*` / `Update*` inputs sent in request bodies.
//!
//! ## Deserialization rules
//!
//! - **Required fields** (non-`Option`) must be present; a response missing
//!   one fails with [`ShortcutError::SchemaMismatch`]. Only identity and
//!   naming fields are required.
//! - **Optional fields** default to `None`, id lists and label lists to an
//!   empty `Vec`. Missing keys and explicit `null` are treated the same.
//! - **Enumerations** accept the documented values and keep anything else
//!   as `Other(String)`, so new server-side values never break decoding.
//! - **Timestamps** are RFC 3339 and parse into `DateTime<Utc>`; iteration
//!   dates are plain `YYYY-MM-DD`. Bad values fail with
//!   [`ShortcutError::MalformedTimestamp`].
//!
//! Inputs never serialize unset fields: the API applies its own defaults.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ShortcutError};

/// Declares a string-backed enum with a pass-through `Other` variant.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client version
            Other(String),
        }

        impl $name {
            /// Wire representation used by the API
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

pub mod category;
pub mod comment;
pub mod custom_field;
pub mod datetime;
pub mod doc;
pub mod epic;
pub mod file;
pub mod group;
pub mod health;
pub mod history;
pub mod id;
pub mod integration;
pub mod iteration;
pub mod label;
pub mod member;
pub mod nullable;
pub mod objective;
pub mod project;
pub mod repository;
pub mod search;
pub mod story;
pub mod story_link;
pub mod task;
pub mod template;
pub mod workflow;

pub use category::{Category, CreateCategoryInput, UpdateCategoryInput};
pub use comment::{
    CreateStoryCommentInput, Reaction, ReactionInput, StoryComment, ThreadedComment, UpdateStoryCommentInput,
};
pub use custom_field::{CustomField, CustomFieldEnumValue, UpdateCustomFieldEnumValue, UpdateCustomFieldInput};
pub use doc::{CreateDocInput, Doc, DocContentFormat, DocSlim, UpdateDocInput};
pub use epic::{CreateEpicInput, Epic, EpicPage, EpicStatus, UpdateEpicInput};
pub use file::{
    CreateLinkedFileInput, File, LinkedFile, LinkedFileType, UpdateFileInput, UpdateLinkedFileInput, UploadFile,
};
pub use group::{CreateGroupInput, Group, UpdateGroupInput};
pub use health::{CreateHealthInput, Health, HealthStatus, UpdateHealthInput};
pub use history::StoryHistory;
pub use id::ResourceId;
pub use integration::{CreateGenericIntegrationInput, GenericIntegration};
pub use iteration::{CreateIterationInput, Iteration, IterationStatus, UpdateIterationInput};
pub use label::{CreateLabelInput, Label, UpdateLabelInput};
pub use member::{Member, MemberRole, MemberState, Profile};
pub use objective::{
    CreateMilestoneInput, CreateObjectiveInput, KeyResult, KeyResultType, KeyResultValue, Milestone, Objective,
    ObjectiveState, UpdateKeyResultInput, UpdateMilestoneInput, UpdateObjectiveInput,
};
pub use project::{CreateProjectInput, Project, UpdateProjectInput};
pub use repository::Repository;
pub use search::{SearchAll, SearchDetail, SearchQuery, SearchResults};
pub use story::{CreateStoryInput, Story, StoryType, UpdateStoryInput};
pub use story_link::{CreateStoryLinkInput, StoryLink, StoryLinkVerb, UpdateStoryLinkInput};
pub use task::{CreateTaskInput, StoryTask, UpdateTaskInput};
pub use template::{
    CreateEntityTemplateInput, CreateStoryFromTemplateInput, EntityTemplate, UpdateEntityTemplateInput,
};
pub use workflow::{EpicState, EpicWorkflow, Workflow, WorkflowState, WorkflowStateType};

/// A response model decodable from a parsed JSON value
pub trait Record: DeserializeOwned {
    /// Builds the typed record from a JSON object.
    ///
    /// Fails with [`ShortcutError::SchemaMismatch`] when the value is not an
    /// object of the expected shape or a required field is missing, and with
    /// [`ShortcutError::MalformedTimestamp`] when a date field does not parse.
    fn from_json(value: Value) -> Result<Self> {
        <Self as serde::Deserialize<'_>>::deserialize(&value).map_err(|e| ShortcutError::from_decode(e, value.to_string()))
    }
}

impl<T: Record> Record for Vec<T> {}

impl Record for Category {}
impl Record for CustomField {}
impl Record for Doc {}
impl Record for DocSlim {}
impl Record for EntityTemplate {}
impl Record for EpicWorkflow {}
impl Record for Epic {}
impl Record for EpicPage {}
impl Record for File {}
impl Record for GenericIntegration {}
impl Record for Group {}
impl Record for Health {}
impl Record for Iteration {}
impl Record for KeyResult {}
impl Record for Label {}
impl Record for LinkedFile {}
impl Record for Member {}
impl Record for Objective {}
impl Record for Project {}
impl Record for Repository {}
impl Record for SearchAll {}
impl Record for Story {}
impl Record for StoryComment {}
impl Record for StoryHistory {}
impl Record for StoryLink {}
impl Record for StoryTask {}
impl Record for ThreadedComment {}
impl Record for Workflow {}
impl<T: Record> Record for SearchResults<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    string_enum! {
        Colour {
            Red => "red",
            Dark => "dark blue",
        }
    }

    #[test]
    fn test_string_enum_known_and_unknown() {
        assert_eq!(Colour::from("red"), Colour::Red);
        assert_eq!(Colour::from("dark blue"), Colour::Dark);
        assert_eq!(Colour::from("green"), Colour::Other("green".to_string()));
        assert_eq!(Colour::Other("green".into()).as_str(), "green");
        assert_eq!(Colour::Dark.to_string(), "dark blue");
        assert!(Colour::Red == "red");
    }

    #[test]
    fn test_string_enum_serde() {
        let parsed: Colour = serde_json::from_value(json!("dark blue")).unwrap();
        assert_eq!(parsed, Colour::Dark);
        assert_eq!(serde_json::to_value(Colour::Other("x".into())).unwrap(), json!("x"));
        assert!(serde_json::from_value::<Colour>(json!(3)).is_err());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Label::from_json(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ShortcutError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_from_json_list() {
        let labels = Vec::<Label>::from_json(json!([
            {"id": 1, "name": "bug"},
            {"id": 2, "name": "ux"}
        ]))
        .unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].name, "ux");

        let err = Vec::<Label>::from_json(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, ShortcutError::SchemaMismatch { .. }));
    }
}
