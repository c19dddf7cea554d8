//! Per-action loading/success/failure state and the search session that
//! drives pagination.

use std::future::{ready, Future};

use shared::{
    domain::TenantId,
    error::ClientError,
    protocol::{DocumentRecord, SearchResultPage},
};

use crate::{DocumentClient, DEFAULT_PAGE_SIZE};

/// Lifecycle of one user-triggered action. Exactly one variant is current at
/// any time; a new invocation of the same action replaces whatever terminal
/// state the previous one left behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> ActionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Drives one action through Idle -> Loading -> (Succeeded | Failed),
/// notifying the render callback on every transition.
///
/// There is no cancellation: a superseded invocation's outcome still lands
/// when its future completes, and the last write wins. Acceptable at
/// human-driven request rates.
pub struct ActionController<T> {
    state: ActionState<T>,
    on_change: Box<dyn FnMut(&ActionState<T>) + Send>,
}

impl<T> ActionController<T> {
    pub fn new(on_change: impl FnMut(&ActionState<T>) + Send + 'static) -> Self {
        Self {
            state: ActionState::Idle,
            on_change: Box::new(on_change),
        }
    }

    /// Controller without a render hook, for callers that poll `state()`.
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    pub fn state(&self) -> &ActionState<T> {
        &self.state
    }

    /// Runs one invocation to its terminal state. Entering `Loading` clears
    /// any prior message; completion transitions to exactly one terminal
    /// state and notifies the render callback with it.
    pub async fn run<F>(&mut self, operation: F) -> &ActionState<T>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        self.transition(ActionState::Loading);
        let next = match operation.await {
            Ok(value) => ActionState::Succeeded(value),
            Err(err) => ActionState::Failed(err.to_string()),
        };
        self.transition(next);
        &self.state
    }

    fn transition(&mut self, next: ActionState<T>) {
        self.state = next;
        (self.on_change)(&self.state);
    }
}

/// Pending input for the add-document form. Cleared only when the create
/// succeeds, so a failed submission keeps the user's text for retry.
#[derive(Debug, Clone, Default)]
pub struct DocumentForm {
    pub title: String,
    pub content: String,
}

impl DocumentForm {
    pub async fn submit<'a>(
        &mut self,
        controller: &'a mut ActionController<DocumentRecord>,
        client: &DocumentClient,
        tenant: &TenantId,
    ) -> &'a ActionState<DocumentRecord> {
        let state = controller
            .run(client.create_document(tenant, &self.title, &self.content))
            .await;
        if matches!(state, ActionState::Succeeded(_)) {
            self.title.clear();
            self.content.clear();
        }
        state
    }
}

/// Search session: one action slot plus the query and page memory that
/// pagination needs. Selecting a page re-runs the remembered query; a
/// refresh re-runs it on the current page (used after a delete, since
/// nothing is cached client-side).
pub struct SearchController {
    action: ActionController<SearchResultPage>,
    last_query: Option<String>,
    current_page: u32,
    page_size: u32,
}

impl SearchController {
    pub fn new(
        page_size: u32,
        on_change: impl FnMut(&ActionState<SearchResultPage>) + Send + 'static,
    ) -> Self {
        Self {
            action: ActionController::new(on_change),
            last_query: None,
            current_page: 0,
            page_size,
        }
    }

    pub fn detached() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, |_| {})
    }

    pub fn state(&self) -> &ActionState<SearchResultPage> {
        self.action.state()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Submits a fresh query, starting from the first page.
    pub async fn submit(
        &mut self,
        client: &DocumentClient,
        tenant: &TenantId,
        query: &str,
    ) -> &ActionState<SearchResultPage> {
        self.run(client, tenant, query.to_string(), 0).await
    }

    /// Re-runs the remembered query on the selected zero-based page.
    pub async fn select_page(
        &mut self,
        client: &DocumentClient,
        tenant: &TenantId,
        page: u32,
    ) -> &ActionState<SearchResultPage> {
        match self.last_query.clone() {
            Some(query) => self.run(client, tenant, query, page).await,
            None => {
                self.action
                    .run(ready(Err(ClientError::validation(
                        "no search query submitted yet",
                    ))))
                    .await
            }
        }
    }

    /// Re-runs the remembered query on the current page.
    pub async fn refresh(
        &mut self,
        client: &DocumentClient,
        tenant: &TenantId,
    ) -> &ActionState<SearchResultPage> {
        let page = self.current_page;
        self.select_page(client, tenant, page).await
    }

    async fn run(
        &mut self,
        client: &DocumentClient,
        tenant: &TenantId,
        query: String,
        page: u32,
    ) -> &ActionState<SearchResultPage> {
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            self.last_query = Some(trimmed.to_string());
        }
        self.current_page = page;
        self.action
            .run(client.search(tenant, &query, page, self.page_size))
            .await
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;
