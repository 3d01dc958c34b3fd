use crate::api::{ApiError, City, DirectoryApi};
use crate::config::Settings;
use crate::controller::SearchController;
use crate::errors::ServerError;
use crate::session;
use crate::view::PageView;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

pub type PageController<A> = SearchController<A, PageView>;

/// Sessions untouched for this long are dropped when the next one opens.
pub const SESSION_IDLE_LIMIT: Duration = Duration::from_secs(2 * 60 * 60);

/// One browser's search page.
pub struct Session<A> {
    controller: Mutex<PageController<A>>,
}

impl<A> Session<A> {
    /// Runs `f` with the controller locked. Keep network calls out of `f`.
    pub fn with_controller<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut PageController<A>) -> T,
    {
        let mut controller = self.controller.lock().map_err(|_| {
            tracing::error!("session controller lock poisoned");
            ServerError::InternalError
        })?;
        Ok(f(&mut *controller))
    }
}

/// The session a request belongs to. `is_new` means the client has to be
/// handed the cookie.
pub struct ActiveSession<A> {
    pub id: String,
    pub session: Arc<Session<A>>,
    pub is_new: bool,
}

struct SessionEntry<A> {
    session: Arc<Session<A>>,
    last_seen: Instant,
}

/// Built once at start-up and shared by every request handler. The backend
/// client and the city list are shared; form state, results and notices
/// live in a per-session controller.
pub struct AppContext<A> {
    api: A,
    status_hide_after: Duration,
    cities: Mutex<Option<Vec<City>>>,
    sessions: Mutex<HashMap<String, SessionEntry<A>>>,
}

impl<A: DirectoryApi + Clone> AppContext<A> {
    pub fn new(api: A, settings: &Settings) -> Self {
        Self {
            api,
            status_hide_after: settings.status_panel_hide_after,
            cities: Mutex::new(None),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the city list. A successful list is kept for new sessions.
    pub fn load_cities(&self) -> Result<Vec<City>, ApiError> {
        let result = self.api.cities();
        if let Ok(cities) = &result {
            *self.cities.lock().unwrap_or_else(PoisonError::into_inner) = Some(cities.clone());
        }
        result
    }

    fn cities(&self) -> Result<Vec<City>, ApiError> {
        let cached = self
            .cities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match cached {
            Some(cities) => Ok(cities),
            None => self.load_cities(),
        }
    }

    /// The session named by `id`, or a fresh one when the id is missing,
    /// unknown or its controller was poisoned by a panic.
    pub fn session(&self, id: Option<&str>) -> ActiveSession<A> {
        let now = Instant::now();

        {
            let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(id) = id {
                if let Some(entry) = sessions.get_mut(id) {
                    if !entry.session.controller.is_poisoned() {
                        entry.last_seen = now;
                        return ActiveSession {
                            id: id.to_string(),
                            session: Arc::clone(&entry.session),
                            is_new: false,
                        };
                    }
                    tracing::warn!("replacing session with poisoned controller");
                    sessions.remove(id);
                }
            }

            let before = sessions.len();
            sessions.retain(|_, entry| now.duration_since(entry.last_seen) < SESSION_IDLE_LIMIT);
            if sessions.len() != before {
                tracing::debug!(expired = before - sessions.len(), "idle sessions dropped");
            }
        }

        // May hit the backend when no city list is cached yet.
        let cities = self.cities();
        let mut controller =
            SearchController::new(self.api.clone(), PageView::new(), self.status_hide_after);
        controller.apply_cities(cities);

        let session = Arc::new(Session {
            controller: Mutex::new(controller),
        });
        let id = session::generate_session_id();

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(
            id.clone(),
            SessionEntry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        tracing::info!(active = sessions.len(), "session opened");

        ActiveSession {
            id,
            session,
            is_new: true,
        }
    }
}
