//! Client-side mirror of one paginated list resource.
//!
//! Every list page keeps exactly one [`RemoteCollection`] inside its state
//! signal. The lifecycle is strict: `begin()` marks a fetch in flight and
//! hands out a ticket; only the holder of the *latest* ticket may update the
//! collection. A response from a superseded fetch is dropped on the floor,
//! so the table never shows tail data from an older filter set.

use contracts::shared::paging::{PageMeta, Paged};

/// Proof of which fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct RemoteCollection<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub meta: PageMeta,
    /// Set once the first fetch ever succeeds; the loading skeleton is only
    /// shown before that.
    pub is_loaded: bool,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            error: None,
            meta: PageMeta::default(),
            is_loaded: false,
            next_ticket: 0,
            in_flight: None,
        }
    }
}

impl<T> RemoteCollection<T> {
    /// Start a fetch: loading on, error cleared, previous fetch superseded.
    pub fn begin(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        self.loading = true;
        self.error = None;
        FetchTicket(self.next_ticket)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket.0)
    }

    /// Replace the collection wholesale with a fresh page.
    ///
    /// Returns false (and changes nothing) if the ticket was superseded.
    pub fn succeed(&mut self, ticket: FetchTicket, page: Paged<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.rows = page.items;
        self.meta = page.meta;
        self.loading = false;
        self.error = None;
        self.is_loaded = true;
        self.in_flight = None;
        true
    }

    /// Record a fetch failure. Stale rows stay visible; only the error and
    /// loading flags change.
    pub fn fail(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        self.in_flight = None;
        true
    }

    /// True only during the very first fetch, before any data has arrived.
    pub fn first_load(&self) -> bool {
        self.loading && !self.is_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::paging::PageMeta;

    fn page(items: Vec<u32>) -> Paged<u32> {
        let meta = PageMeta::compute(items.len(), 1, 10);
        Paged { items, meta }
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut col = RemoteCollection::default();
        let t1 = col.begin();
        assert!(col.first_load());
        assert!(col.succeed(t1, page(vec![1, 2, 3])));
        assert_eq!(col.rows, vec![1, 2, 3]);
        assert_eq!(col.meta.total_count, 3);
        assert!(!col.loading);
        assert!(col.is_loaded);

        let t2 = col.begin();
        assert!(!col.first_load());
        assert!(col.succeed(t2, page(vec![9])));
        assert_eq!(col.rows, vec![9]);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut col = RemoteCollection::default();
        let stale = col.begin();
        let fresh = col.begin();

        // The older fetch resolves after being superseded: no effect.
        assert!(!col.succeed(stale, page(vec![1, 2])));
        assert!(col.rows.is_empty());
        assert!(col.loading);

        assert!(col.succeed(fresh, page(vec![7])));
        assert_eq!(col.rows, vec![7]);
    }

    #[test]
    fn test_superseded_failure_is_dropped() {
        let mut col = RemoteCollection::default();
        let stale = col.begin();
        let fresh = col.begin();
        assert!(!col.fail(stale, "network down".into()));
        assert!(col.error.is_none());
        assert!(col.succeed(fresh, page(vec![1])));
    }

    #[test]
    fn test_failure_keeps_stale_rows() {
        let mut col = RemoteCollection::default();
        let t1 = col.begin();
        col.succeed(t1, page(vec![5, 6]));

        let t2 = col.begin();
        assert!(col.fail(t2, "HTTP 502".into()));
        assert_eq!(col.rows, vec![5, 6]);
        assert_eq!(col.error.as_deref(), Some("HTTP 502"));
        assert!(!col.loading);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut col: RemoteCollection<u32> = RemoteCollection::default();
        let t1 = col.begin();
        col.fail(t1, "boom".into());
        col.begin();
        assert!(col.error.is_none());
        assert!(col.loading);
    }
}
