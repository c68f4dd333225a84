//! Lazy iteration over cursor-paginated search results

use std::vec;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::{Record, SearchResults};

enum Cursor {
    First {
        endpoint: String,
        query: Vec<(String, String)>,
    },
    Next(String),
    Exhausted,
}

/// Iterator over every hit of a search, one page request at a time.
///
/// Nothing is fetched until the first call to `next`. A new page is requested
/// only once the previous one has been consumed and it carried a `next`
/// cursor. If a request fails the error is yielded once and iteration ends.
pub struct Paginated<T> {
    client: ShortcutClient,
    cursor: Cursor,
    buffer: vec::IntoIter<T>,
}

impl<T: Record> Paginated<T> {
    pub(crate) fn new(client: ShortcutClient, endpoint: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            client,
            cursor: Cursor::First {
                endpoint: endpoint.into(),
                query,
            },
            buffer: Vec::new().into_iter(),
        }
    }

    fn fetch(&mut self) -> Result<()> {
        let page: SearchResults<T> = match std::mem::replace(&mut self.cursor, Cursor::Exhausted) {
            Cursor::First { endpoint, query } => self.client.get_query(&endpoint, query)?,
            Cursor::Next(cursor) => {
                let url = self.client.resolve_cursor(&cursor)?;
                self.client.get_url(url)?
            }
            Cursor::Exhausted => return Ok(()),
        };

        tracing::debug!("Fetched search page with {} hits", page.data.len());

        if let Some(next) = page.next.filter(|n| !n.is_empty()) {
            self.cursor = Cursor::Next(next);
        }
        self.buffer = page.data.into_iter();
        Ok(())
    }
}

impl<T: Record> Iterator for Paginated<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if matches!(self.cursor, Cursor::Exhausted) {
                return None;
            }
            if let Err(e) = self.fetch() {
                return Some(Err(e));
            }
        }
    }
}
