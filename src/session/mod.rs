//! The interactive session: owned application state and its handlers.
//!
//! The session owns the store, the navigation history, and the directory
//! client; every handler returns a [`Step`] — the view to show plus any
//! surfaced failures — so the caller decides how to present errors
//! instead of having them swallowed inside the handler.

pub mod command;

use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiError, UserDirectory};
use crate::models::{FieldError, FieldSpec, UserId};
use crate::progress::Spinner;
use crate::router::{History, Route};
use crate::store::{StoreError, UserStore};
use crate::view::{edit_view, error_view, list_view, View};

/// A surfaced failure with an optional retry affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Command the user can re-issue to retry the failed operation.
    pub retry_hint: Option<String>,
}

impl Notice {
    fn new(message: String, retry_hint: Option<String>) -> Self {
        Self {
            message,
            retry_hint,
        }
    }
}

/// The outcome of one handler invocation.
#[derive(Debug)]
pub struct Step {
    pub view: View,
    pub notices: Vec<Notice>,
}

/// Rejected `set` input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{key}: {source}")]
    Field {
        key: String,
        #[source]
        source: FieldError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owned application state plus the directory it talks to.
pub struct Session {
    directory: Arc<dyn UserDirectory>,
    store: UserStore,
    history: History,
    spinner: Spinner,
}

impl Session {
    pub fn new(directory: Arc<dyn UserDirectory>, spinner: Spinner) -> Self {
        Self {
            directory,
            store: UserStore::new(),
            history: History::new(),
            spinner,
        }
    }

    /// Navigate to a path: resolve the route, record it, enter it.
    pub async fn open(&mut self, path: &str) -> Step {
        let route = Route::parse(path);
        self.history.push(route.clone());
        self.enter(route).await
    }

    /// Navigate to the edit view for `id` without a fetch.
    pub fn edit(&mut self, id: UserId) -> Step {
        self.history.push(Route::Edit { id });
        Step {
            view: self.edit_or_error(id),
            notices: Vec::new(),
        }
    }

    /// Delete a record, then unconditionally refetch and show the list.
    ///
    /// A failed delete is surfaced but does not stop the refetch; the
    /// list then reflects whatever the server actually holds.
    pub async fn remove(&mut self, id: UserId) -> Step {
        let mut notices = Vec::new();
        let outcome = {
            let _guard = self.spinner.start("deleting user…");
            self.directory.delete(id).await
        };
        if let Err(e) = outcome {
            notices.push(Notice::new(
                format!("delete of user {id} failed: {e}"),
                Some(format!("delete {id}")),
            ));
        }
        self.to_users(notices).await
    }

    /// Submit the locally mutated record, then unconditionally refetch
    /// and show the list.
    pub async fn submit_edit(&mut self, id: UserId) -> Step {
        let mut notices = Vec::new();
        match self.store.get(id) {
            None => notices.push(Notice::new(
                format!("no user with id {id} in the current list"),
                None,
            )),
            Some(user) => {
                let user = user.clone();
                let outcome = {
                    let _guard = self.spinner.start("saving user…");
                    self.directory.update(id, &user).await
                };
                if let Err(e) = outcome {
                    notices.push(Notice::new(
                        format!("update of user {id} failed: {e}"),
                        Some("submit".to_string()),
                    ));
                }
            }
        }
        self.to_users(notices).await
    }

    /// Leave the edit view without submitting.
    ///
    /// In-memory edits are not reverted; the refetch overwrites them.
    pub async fn cancel_edit(&mut self) -> Step {
        self.to_users(Vec::new()).await
    }

    /// Assign raw input to a field of the user being edited.
    pub fn set_field(&mut self, id: UserId, key: &str, raw: &str) -> Result<(), InputError> {
        let value = FieldSpec::for_key(key)
            .coerce(raw)
            .map_err(|source| InputError::Field {
                key: key.to_string(),
                source,
            })?;
        self.store.set_field(id, key, value)?;
        Ok(())
    }

    /// Refetch the collection, replacing the store on success.
    ///
    /// On failure the store is left unchanged — the caller keeps showing
    /// the possibly-stale list.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let _guard = self.spinner.start("loading users…");
        let users = self.directory.fetch_all().await?;
        self.store.replace_all(users);
        Ok(())
    }

    /// History back. Returns `None` when there is no earlier entry.
    pub async fn back(&mut self) -> Option<Step> {
        let route = self.history.back()?.clone();
        Some(self.enter(route).await)
    }

    /// History forward. Returns `None` when there is no later entry.
    pub async fn forward(&mut self) -> Option<Step> {
        let route = self.history.forward()?.clone();
        Some(self.enter(route).await)
    }

    /// The route under the history cursor.
    pub fn current_route(&self) -> Option<&Route> {
        self.history.current()
    }

    /// The id being edited, when the current route is an edit view.
    pub fn current_edit_id(&self) -> Option<UserId> {
        match self.history.current() {
            Some(Route::Edit { id }) => Some(*id),
            _ => None,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Render the current route from the in-memory store, fetch-free.
    pub fn render_current(&self) -> View {
        match self.history.current() {
            Some(Route::Edit { id }) => self.edit_or_error(*id),
            Some(Route::NotFound { .. }) => error_view("Error 404. Not found."),
            _ => list_view(self.store.users()),
        }
    }

    /// Enter a route already recorded in history.
    ///
    /// Only the list refetches; an edit target renders from the store as
    /// it stands, and a missing id is a defined failure (error view).
    async fn enter(&mut self, route: Route) -> Step {
        match route {
            Route::Users => {
                let mut notices = Vec::new();
                if let Err(e) = self.refresh().await {
                    notices.push(refresh_notice(&e));
                }
                Step {
                    view: list_view(self.store.users()),
                    notices,
                }
            }
            Route::Edit { id } => Step {
                view: self.edit_or_error(id),
                notices: Vec::new(),
            },
            Route::NotFound { .. } => Step {
                view: error_view("Error 404. Not found."),
                notices: Vec::new(),
            },
        }
    }

    /// Refetch, record the list route, and render it.
    async fn to_users(&mut self, mut notices: Vec<Notice>) -> Step {
        if let Err(e) = self.refresh().await {
            notices.push(refresh_notice(&e));
        }
        self.history.push(Route::Users);
        Step {
            view: list_view(self.store.users()),
            notices,
        }
    }

    fn edit_or_error(&self, id: UserId) -> View {
        match self.store.get(id) {
            Some(user) => edit_view(id, user),
            None => error_view(&format!("No user with id {id}.")),
        }
    }
}

fn refresh_notice(error: &ApiError) -> Notice {
    Notice::new(
        format!("could not load users, showing the last known list: {error}"),
        Some("refresh".to_string()),
    )
}
