//! Search queries and result pages
//!
//! `query` uses Shortcut's search operators, e.g. `owner:ada state:started`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Epic, Iteration, Objective, Story};
use crate::error::{Result, ShortcutError};

/// Largest page the search endpoints accept
pub const MAX_PAGE_SIZE: u32 = 250;

/// Page size the API uses when none is given
pub const DEFAULT_PAGE_SIZE: u32 = 25;

string_enum! {
    /// Amount of detail returned per hit
    SearchDetail {
        Full => "full",
        Slim => "slim",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub page_size: Option<u32>,
    pub detail: Option<SearchDetail>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: None,
            detail: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_detail(mut self, detail: SearchDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Rejects queries the API would refuse, without a round trip.
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(ShortcutError::invalid_argument("search query must not be empty"));
        }
        if let Some(size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                return Err(ShortcutError::invalid_argument(format!(
                    "page_size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("query".to_string(), self.query.clone())];
        if let Some(size) = self.page_size {
            pairs.push(("page_size".to_string(), size.to_string()));
        }
        if let Some(detail) = &self.detail {
            pairs.push(("detail".to_string(), detail.to_string()));
        }
        pairs
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}

/// One page of search hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned", serialize = "T: Serialize"))]
pub struct SearchResults<T> {
    pub data: Vec<T>,

    /// Cursor to the following page, absent on the last one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Total number of hits across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Response of the combined `GET /search`: one page per entity kind.
/// Kinds the server leaves out stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchAll {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories: Option<SearchResults<Story>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epics: Option<SearchResults<Epic>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<SearchResults<Iteration>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<SearchResults<Objective>>,
}
