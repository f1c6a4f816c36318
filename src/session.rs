//! State of the search box, its result list and pager.
//!
//! [`SearchSession`] never performs I/O. Each event handler updates the
//! state and may return an [`Effect`] that the caller is expected to run:
//! a debounce timer that must call back [`SearchSession::on_debounce_elapsed`],
//! or a fetch whose outcome must be passed to
//! [`SearchSession::on_fetch_complete`].

use std::time::Duration;

use tracing::{debug, error};

use crate::pagination::Pager;
use crate::{ResultItem, ResultSet, SearchError, SearchRequest};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the debounce window for the given delay.
    ScheduleDebounce(Duration),
    Fetch(SearchRequest),
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    results: ResultSet,
    loading: bool,
    throttling: bool,
    current_page: usize,
    debounce: Duration,
    revision: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchSession {
    pub fn new(debounce: Duration) -> Self {
        SearchSession {
            query: String::new(),
            results: ResultSet::default(),
            loading: false,
            throttling: false,
            current_page: 0,
            debounce,
            revision: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.results.items
    }

    pub fn total_count(&self) -> u64 {
        self.results.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a debounce window is currently open.
    pub fn is_throttling(&self) -> bool {
        self.throttling
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.results.page_count()
    }

    /// Bumped whenever something a renderer shows has changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The pager, shown only while there are results on screen.
    pub fn pager(&self) -> Option<Pager> {
        if self.results.is_empty() {
            return None;
        }
        Some(Pager::new(self.page_count(), self.current_page))
    }

    /// The search box changed to `value`.
    pub fn on_input(&mut self, value: impl Into<String>) -> Option<Effect> {
        self.query = value.into();

        if self.throttling {
            debug!("Debounce window open, dropping input '{}'", self.query);
            return None;
        }

        if self.query.trim().is_empty() {
            self.results = ResultSet::default();
            self.current_page = 0;
            self.touch();
            return None;
        }

        self.throttling = true;
        Some(Effect::ScheduleDebounce(self.debounce))
    }

    /// The debounce window closed; search for whatever the box holds now.
    pub fn on_debounce_elapsed(&mut self) -> Option<Effect> {
        self.throttling = false;

        if self.query.trim().is_empty() {
            debug!("Search box empty when debounce window closed");
            return None;
        }

        self.current_page = 0;
        self.set_loading(true);
        Some(Effect::Fetch(SearchRequest::first_page(self.query.clone())))
    }

    /// The pager emitted a zero-based page selection.
    pub fn on_page_selected(&mut self, selected: usize) -> Option<Effect> {
        let Some(pager) = self.pager() else {
            debug!("No pager shown, ignoring selection of page {}", selected + 1);
            return None;
        };
        if !pager.contains(selected) {
            debug!(
                "Page {} out of range (1..={})",
                selected + 1,
                pager.page_count()
            );
            return None;
        }
        if selected == self.current_page {
            debug!("Page {} already shown", selected + 1);
            return None;
        }
        if self.query.trim().is_empty() {
            debug!("Search box empty, ignoring selection of page {}", selected + 1);
            return None;
        }

        self.current_page = selected;
        self.set_loading(true);
        let page = u32::try_from(selected + 1).unwrap_or(u32::MAX);
        Some(Effect::Fetch(SearchRequest::page(self.query.clone(), page)))
    }

    pub fn on_next_page(&mut self) -> Option<Effect> {
        let next = self.pager()?.next()?;
        self.on_page_selected(next)
    }

    pub fn on_previous_page(&mut self) -> Option<Effect> {
        let previous = self.pager()?.previous()?;
        self.on_page_selected(previous)
    }

    /// A fetch resolved. Failures keep the results already on screen.
    pub fn on_fetch_complete(&mut self, outcome: Result<ResultSet, SearchError>) {
        match outcome {
            Ok(results) => self.results = results,
            Err(e) => error!("Search for '{}' failed: {}", self.query, e),
        }
        self.loading = false;
        self.touch();
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Owner;
    use reqwest::StatusCode;

    fn item(id: u64, name: &str) -> ResultItem {
        ResultItem {
            id,
            name: name.to_string(),
            full_name: format!("owner/{}", name),
            description: None,
            owner: Owner::default(),
            clone_url: format!("https://github.com/owner/{}.git", name),
            html_url: format!("https://github.com/owner/{}", name),
        }
    }

    fn results(total_count: u64, names: &[&str]) -> ResultSet {
        ResultSet {
            total_count,
            incomplete_results: false,
            items: names
                .iter()
                .enumerate()
                .map(|(i, name)| item(i as u64, name))
                .collect(),
        }
    }

    /// A session showing the first page of a 45-result search for "rust".
    fn showing_results() -> SearchSession {
        let mut session = SearchSession::default();
        session.on_input("rust");
        session.on_debounce_elapsed();
        session.on_fetch_complete(Ok(results(45, &["rust", "rustlings"])));
        session
    }

    #[test]
    fn input_opens_debounce_window() {
        let mut session = SearchSession::new(Duration::from_millis(300));
        assert_eq!(
            session.on_input("tok"),
            Some(Effect::ScheduleDebounce(Duration::from_millis(300)))
        );
        assert!(session.is_throttling());
        assert!(!session.is_loading());
    }

    #[test]
    fn keystrokes_inside_window_collapse_into_one_fetch() {
        let mut session = SearchSession::default();
        assert!(session.on_input("t").is_some());
        assert_eq!(session.on_input("to"), None);
        assert_eq!(session.on_input("tokio"), None);

        assert_eq!(
            session.on_debounce_elapsed(),
            Some(Effect::Fetch(SearchRequest::first_page("tokio")))
        );
        assert!(!session.is_throttling());
    }

    #[test]
    fn empty_input_clears_without_fetching() {
        let mut session = showing_results();
        let revision = session.revision();

        assert_eq!(session.on_input("   "), None);
        assert!(session.items().is_empty());
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.pager(), None);
        assert!(!session.is_throttling());
        assert!(session.revision() > revision);
    }

    #[test]
    fn emptied_during_window_skips_fetch() {
        let mut session = SearchSession::default();
        session.on_input("rust");
        session.on_input("");
        assert_eq!(session.on_debounce_elapsed(), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn loading_spans_issue_to_resolution() {
        let mut session = SearchSession::default();
        session.on_input("serde");
        assert!(!session.is_loading());

        session.on_debounce_elapsed();
        assert!(session.is_loading());

        session.on_fetch_complete(Err(SearchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }));
        assert!(!session.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut session = showing_results();
        let before = session.results().clone();

        session.on_page_selected(1);
        session.on_fetch_complete(Err(SearchError::Status {
            status: StatusCode::FORBIDDEN,
        }));

        assert_eq!(session.results(), &before);
        assert!(!session.is_loading());
    }

    #[test]
    fn successful_fetch_replaces_results() {
        let mut session = showing_results();
        session.on_page_selected(2);
        session.on_fetch_complete(Ok(results(45, &["ripgrep"])));

        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].name, "ripgrep");
        assert_eq!(session.current_page(), 2);
    }

    #[test]
    fn page_count_uses_page_size() {
        let session = showing_results();
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.pager().map(|p| p.page_count()), Some(3));
    }

    #[test]
    fn page_selection_is_one_based_on_the_wire() {
        let mut session = showing_results();
        assert_eq!(
            session.on_page_selected(2),
            Some(Effect::Fetch(SearchRequest::page("rust", 3)))
        );
        assert!(session.is_loading());
    }

    #[test]
    fn page_selection_without_pager_is_ignored() {
        let mut session = SearchSession::default();
        assert_eq!(session.on_page_selected(0), None);

        let mut session = showing_results();
        assert_eq!(session.on_page_selected(3), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn reselecting_the_active_page_is_ignored() {
        let mut session = showing_results();
        assert_eq!(session.on_page_selected(0), None);
        assert!(!session.is_loading());

        session.on_page_selected(1);
        session.on_fetch_complete(Ok(results(45, &["a"])));
        assert_eq!(session.on_page_selected(1), None);
    }

    #[test]
    fn page_selection_with_emptied_box_is_ignored() {
        let mut session = SearchSession::default();
        session.on_input("rust");
        session.on_debounce_elapsed();
        session.on_fetch_complete(Ok(results(45, &["rust"])));

        // Opens a window, then the box is emptied inside it.
        session.on_input("rus");
        session.on_input("");
        assert_eq!(session.on_page_selected(2), None);
        assert_eq!(session.on_next_page(), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn next_and_previous_follow_the_pager() {
        let mut session = showing_results();
        assert_eq!(session.on_previous_page(), None);
        assert_eq!(
            session.on_next_page(),
            Some(Effect::Fetch(SearchRequest::page("rust", 2)))
        );
        session.on_fetch_complete(Ok(results(45, &["a"])));
        assert_eq!(
            session.on_previous_page(),
            Some(Effect::Fetch(SearchRequest::page("rust", 1)))
        );
    }

    #[test]
    fn new_query_resets_page_selection() {
        let mut session = showing_results();
        session.on_page_selected(2);
        session.on_fetch_complete(Ok(results(45, &["a"])));

        session.on_input("tokio");
        session.on_debounce_elapsed();
        assert_eq!(session.current_page(), 0);
    }
}
