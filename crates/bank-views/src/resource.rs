//! Fetch-and-submit state holders shared by every screen
//!
//! - [`ResourceView`]: one entity, with actions that replace it
//! - [`ListView`]: a list, with submissions merged in by id
//! - [`FormView`]: a create form with no prior fetch
//!
//! Each run raises the view's [`LoadingFlag`] for exactly the duration of
//! the request.

use bank_core::traits::Entity;
use bank_core::ClientError;
use std::future::Future;
use tracing::debug;

use crate::messages::MessageCatalog;
use crate::state::{LoadingFlag, ViewState};

/// Outcome of the last submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub notice: Option<String>,
    pub error: Option<ClientError>,
}

impl Submission {
    fn succeeded(&mut self, notice: &str) {
        self.notice = Some(notice.to_string());
        self.error = None;
    }

    fn failed(&mut self, error: ClientError) {
        debug!(code = error.error_code(), "Submission failed");
        self.notice = None;
        self.error = Some(error);
    }
}

/// Single entity fetched from the API
#[derive(Debug)]
pub struct ResourceView<T> {
    state: ViewState<T>,
    loading: LoadingFlag,
    catalog: MessageCatalog,
    action_catalog: MessageCatalog,
    submission: Submission,
}

impl<T> ResourceView<T> {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            state: ViewState::Loading,
            loading: LoadingFlag::new(),
            action_catalog: catalog.clone(),
            catalog,
            submission: Submission::default(),
        }
    }

    /// Messages for failed actions, when they differ from the load messages
    pub fn with_action_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.action_catalog = catalog;
        self
    }

    pub fn set_action_catalog(&mut self, catalog: MessageCatalog) {
        self.action_catalog = catalog;
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn notice(&self) -> Option<&str> {
        self.submission.notice.as_deref()
    }

    /// Resolved text of the last failed action
    pub fn action_error(&self) -> Option<String> {
        self.submission
            .error
            .as_ref()
            .map(|e| self.action_catalog.resolve(e))
    }

    /// Fail without a request, e.g. on an invalid path parameter
    pub fn fail(&mut self, error: ClientError) {
        self.state = ViewState::Failed(error);
    }

    /// Drop the shown entity, e.g. after it was deleted
    pub fn clear(&mut self) {
        self.state = ViewState::Empty;
    }

    pub async fn load<F>(&mut self, fetch: F) -> &ViewState<T>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        self.state = ViewState::Loading;
        let result = {
            let _guard = self.loading.raise();
            fetch.await
        };
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(error) => ViewState::Failed(error),
        };
        &self.state
    }

    /// Run an action whose response replaces the shown entity
    pub async fn submit<F>(&mut self, action: F, notice: &str) -> bool
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let result = {
            let _guard = self.loading.raise();
            action.await
        };
        match result {
            Ok(data) => {
                self.state = ViewState::Ready(data);
                self.submission.succeeded(notice);
                true
            }
            Err(error) => {
                self.submission.failed(error);
                false
            }
        }
    }

    /// Run an action with no response body; the shown entity is kept
    pub async fn perform<F>(&mut self, action: F, notice: &str) -> bool
    where
        F: Future<Output = Result<(), ClientError>>,
    {
        let result = {
            let _guard = self.loading.raise();
            action.await
        };
        match result {
            Ok(()) => {
                self.submission.succeeded(notice);
                true
            }
            Err(error) => {
                self.submission.failed(error);
                false
            }
        }
    }

    /// Record a failed action without a request
    pub fn reject(&mut self, error: ClientError) {
        self.submission.failed(error);
    }
}

/// List of entities with a creation form
#[derive(Debug)]
pub struct ListView<T> {
    state: ViewState<Vec<T>>,
    loading: LoadingFlag,
    catalog: MessageCatalog,
    submit_catalog: MessageCatalog,
    form_open: bool,
    submission: Submission,
}

impl<T: Entity> ListView<T> {
    pub fn new(catalog: MessageCatalog, submit_catalog: MessageCatalog) -> Self {
        Self {
            state: ViewState::Loading,
            loading: LoadingFlag::new(),
            catalog,
            submit_catalog,
            form_open: false,
            submission: Submission::default(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<T>> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
        self.submission.notice = None;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn set_submit_catalog(&mut self, catalog: MessageCatalog) {
        self.submit_catalog = catalog;
    }

    pub fn notice(&self) -> Option<&str> {
        self.submission.notice.as_deref()
    }

    /// Resolved text of the last failed submission
    pub fn submit_error(&self) -> Option<String> {
        self.submission
            .error
            .as_ref()
            .map(|e| self.submit_catalog.resolve(e))
    }

    pub fn fail(&mut self, error: ClientError) {
        self.state = ViewState::Failed(error);
    }

    pub async fn load<F>(&mut self, fetch: F) -> &ViewState<Vec<T>>
    where
        F: Future<Output = Result<Vec<T>, ClientError>>,
    {
        self.state = ViewState::Loading;
        let result = {
            let _guard = self.loading.raise();
            fetch.await
        };
        self.state = match result {
            Ok(items) if items.is_empty() => ViewState::Empty,
            Ok(items) => ViewState::Ready(items),
            Err(error) => ViewState::Failed(error),
        };
        &self.state
    }

    /// Submit a create or update request
    ///
    /// On success the returned entity replaces the item with the same id,
    /// or is appended; the form closes and `notice` is shown. On failure
    /// the list is left as it was.
    pub async fn submit<F>(&mut self, action: F, notice: &str) -> bool
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let result = {
            let _guard = self.loading.raise();
            action.await
        };
        match result {
            Ok(item) => {
                self.merge(item);
                self.form_open = false;
                self.submission.succeeded(notice);
                true
            }
            Err(error) => {
                self.submission.failed(error);
                false
            }
        }
    }

    /// Record a failed submission without a request
    pub fn reject(&mut self, error: ClientError) {
        self.submission.failed(error);
    }

    fn merge(&mut self, item: T) {
        if let ViewState::Ready(items) = &mut self.state {
            match items.iter_mut().find(|existing| existing.id() == item.id()) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
            return;
        }

        // a list that failed to load stays failed
        if !matches!(self.state, ViewState::Failed(_)) {
            self.state = ViewState::Ready(vec![item]);
        }
    }
}

/// Create form; holds the created entity once the API accepts it
#[derive(Debug)]
pub struct FormView<T> {
    created: Option<T>,
    loading: LoadingFlag,
    catalog: MessageCatalog,
    submission: Submission,
}

impl<T> FormView<T> {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            created: None,
            loading: LoadingFlag::new(),
            catalog,
            submission: Submission::default(),
        }
    }

    pub fn created(&self) -> Option<&T> {
        self.created.as_ref()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn notice(&self) -> Option<&str> {
        self.submission.notice.as_deref()
    }

    pub fn error(&self) -> Option<String> {
        self.submission
            .error
            .as_ref()
            .map(|e| self.catalog.resolve(e))
    }

    pub async fn submit<F>(&mut self, action: F, notice: &str) -> bool
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let result = {
            let _guard = self.loading.raise();
            action.await
        };
        match result {
            Ok(created) => {
                self.created = Some(created);
                self.submission.succeeded(notice);
                true
            }
            Err(error) => {
                self.submission.failed(error);
                false
            }
        }
    }

    pub fn reject(&mut self, error: ClientError) {
        self.submission.failed(error);
    }
}
