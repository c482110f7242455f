// src/forms/session.rs
//
// Per-browser add-listing forms, keyed by an opaque cookie token.

use crate::errors::ServerError;
use crate::forms::dependent::DependentOptions;
use crate::forms::engine::{AddListingForm, Submission};
use crate::forms::scheduler::{ScheduledTask, Step};
use crate::forms::token::{looks_like_token, new_session_token};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub const FORM_COOKIE: &str = "listing_form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitDelays {
    /// Submitting -> success.
    pub processing: Duration,
    /// Success -> back to the type picker.
    pub reset: Duration,
}

impl Default for SubmitDelays {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(1500),
            reset: Duration::from_millis(2500),
        }
    }
}

type SharedForm = Arc<Mutex<AddListingForm>>;

struct FormSession {
    form: SharedForm,
    timer: Option<ScheduledTask>,
    last_seen: Instant,
}

/// The form belonging to one request's session.
pub struct FormHandle {
    pub token: String,
    /// True when the session was created for this request and the cookie
    /// still has to be sent.
    pub is_new: bool,
    form: SharedForm,
}

impl FormHandle {
    pub fn with<T>(&self, f: impl FnOnce(&mut AddListingForm) -> T) -> Result<T, ServerError> {
        let mut form = lock(&self.form)?;
        Ok(f(&mut form))
    }
}

pub struct FormSessions {
    deps: Arc<DependentOptions>,
    delays: SubmitDelays,
    ttl: Duration,
    sessions: Mutex<HashMap<String, FormSession>>,
}

impl FormSessions {
    pub fn new(deps: Arc<DependentOptions>, delays: SubmitDelays, ttl: Duration) -> Self {
        Self {
            deps,
            delays,
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The live session for `token`, if any. Idle sessions are pruned first.
    pub fn find(&self, token: Option<&str>) -> Result<Option<FormHandle>, ServerError> {
        let now = Instant::now();
        let mut sessions = lock(&self.sessions)?;
        self.prune_locked(&mut sessions, now);

        let Some(token) = token.filter(|t| looks_like_token(t)) else {
            return Ok(None);
        };
        Ok(sessions.get_mut(token).map(|session| {
            session.last_seen = now;
            FormHandle {
                token: token.to_string(),
                is_new: false,
                form: Arc::clone(&session.form),
            }
        }))
    }

    /// Like [`FormSessions::find`], but starts a fresh session when the
    /// token is missing, malformed or expired.
    pub fn open(&self, token: Option<&str>) -> Result<FormHandle, ServerError> {
        if let Some(handle) = self.find(token)? {
            return Ok(handle);
        }

        let token = new_session_token();
        let form = Arc::new(Mutex::new(self.blank_form()));
        let mut sessions = lock(&self.sessions)?;
        sessions.insert(
            token.clone(),
            FormSession {
                form: Arc::clone(&form),
                timer: None,
                last_seen: Instant::now(),
            },
        );
        debug!(sessions = sessions.len(), "form session started");

        Ok(FormHandle {
            token,
            is_new: true,
            form,
        })
    }

    /// An unsaved form at the type picker, for visitors without a session.
    pub fn blank_form(&self) -> AddListingForm {
        AddListingForm::new(Arc::clone(&self.deps))
    }

    /// Starts the success and reset timers for an accepted submission,
    /// replacing any timer the session already had.
    pub fn schedule_completion(
        &self,
        handle: &FormHandle,
        submission: &Submission,
    ) -> Result<(), ServerError> {
        info!(
            submission = submission.id,
            listing_type = submission.listing_type.id(),
            payload = %serde_json::to_string(&submission.values).unwrap_or_default(),
            "listing submitted"
        );

        let steps = completion_steps(Arc::downgrade(&handle.form), submission.id, self.delays);
        let task = ScheduledTask::spawn(&handle.token[..8.min(handle.token.len())], steps)
            .map_err(|e| {
                error!("could not start submission timer: {e}");
                ServerError::InternalError
            })?;

        let mut sessions = lock(&self.sessions)?;
        match sessions.get_mut(&handle.token) {
            Some(session) => session.timer = Some(task),
            // session ended while we were submitting; dropping `task` cancels it
            None => debug!("submission timer discarded for ended session"),
        }
        Ok(())
    }

    /// "Back"/"Cancel": stop pending timers and return to the type picker.
    pub fn cancel(&self, handle: &FormHandle) -> Result<(), ServerError> {
        let timer = lock(&self.sessions)?
            .get_mut(&handle.token)
            .and_then(|s| s.timer.take());
        drop(timer);

        handle.with(AddListingForm::reset)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Expired sessions are dropped along with their timers.
    fn prune_locked(&self, sessions: &mut HashMap<String, FormSession>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) < self.ttl);
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, "pruned idle form sessions");
        }
    }
}

fn completion_steps(
    form: Weak<Mutex<AddListingForm>>,
    id: u64,
    delays: SubmitDelays,
) -> Vec<(Duration, Step)> {
    let succeed_form = form.clone();
    let succeed: Step = Box::new(move || {
        if let Some(form) = succeed_form.upgrade() {
            if let Ok(mut form) = form.lock() {
                if form.complete_submission(id) {
                    info!(submission = id, "listing submission succeeded");
                }
            }
        }
    });
    let reset: Step = Box::new(move || {
        if let Some(form) = form.upgrade() {
            if let Ok(mut form) = form.lock() {
                if form.finish_submission(id) {
                    debug!(submission = id, "form reset after submission");
                }
            }
        }
    });

    vec![(delays.processing, succeed), (delays.reset, reset)]
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ServerError> {
    mutex.lock().map_err(|_| {
        error!("form session lock poisoned");
        ServerError::InternalError
    })
}
