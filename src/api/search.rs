//! Search endpoints
//!
//! Each call returns one page. [`ShortcutClient::search_stories_iter`] walks
//! every page lazily.

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::pagination::Paginated;
use crate::types::{DocSlim, Epic, Iteration, Milestone, Objective, Record, SearchAll, SearchQuery, SearchResults, Story};

impl ShortcutClient {
    /// One page of stories matching `query`. See [`SearchQuery`] for paging.
    pub fn search_stories(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<Story>> {
        self.search("/search/stories", query.into())
    }

    pub fn search_epics(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<Epic>> {
        self.search("/search/epics", query.into())
    }

    pub fn search_iterations(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<Iteration>> {
        self.search("/search/iterations", query.into())
    }

    pub fn search_objectives(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<Objective>> {
        self.search("/search/objectives", query.into())
    }

    /// One page of milestones matching `query`
    pub fn search_milestones(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<Milestone>> {
        self.search("/search/milestones", query.into())
    }

    /// Docs whose title matches `query`
    pub fn search_documents(&self, query: impl Into<SearchQuery>) -> Result<SearchResults<DocSlim>> {
        self.search("/search/documents", query.into())
    }

    /// Stories, epics, iterations and milestones matching `query` in one
    /// call. Each kind comes back as its own first page; follow its `next`
    /// cursor through the per-kind endpoints.
    pub fn search_all(&self, query: impl Into<SearchQuery>) -> Result<SearchAll> {
        self.search("/search", query.into())
    }

    /// Every story matching `query`, fetched page by page on demand.
    ///
    /// The query is validated up front; the first request is only sent when
    /// the iterator is first advanced.
    pub fn search_stories_iter(&self, query: impl Into<SearchQuery>) -> Result<Paginated<Story>> {
        let query = query.into();
        query.validate()?;
        Ok(Paginated::new(self.clone(), "/search/stories", query.to_query_pairs()))
    }

    fn search<T: Record>(&self, endpoint: &str, query: SearchQuery) -> Result<T> {
        query.validate()?;
        self.get_query(endpoint, query.to_query_pairs())
    }
}
