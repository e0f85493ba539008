//! View state for the message board.
//!
//! All mutable UI state lives in the two types below. Components hold them in
//! signals and mutate them only through these transition methods, so the
//! request/response/error lifecycle can be exercised without a renderer.

use crate::api_client::ApiError;
use crate::models::{CreateMessageResponse, Message};

/// State of the message feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    /// No fetch has completed yet.
    Loading,
    /// Last fetch succeeded; messages are in server order, newest first.
    Loaded(Vec<Message>),
    /// A fetch failed before any list was ever displayed.
    Failed(String),
}

impl FeedState {
    /// Fold a completed fetch into the current state.
    ///
    /// A successful fetch replaces the list wholesale. A failed fetch only
    /// moves to `Failed` when no list has been shown yet; a failed refresh
    /// leaves the current list on screen.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<Message>, ApiError>) {
        match fetched {
            Ok(messages) => *self = FeedState::Loaded(messages),
            Err(err) => {
                if !matches!(self, FeedState::Loaded(_)) {
                    *self = FeedState::Failed(err.to_string());
                }
            }
        }
    }
}

/// Status of the composer's current submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

/// Draft text plus submission status for the composer form.
///
/// The two fields are independent: a failed submission keeps the draft so the
/// user can edit and resubmit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composer {
    draft: String,
    submission: Submission,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_in_flight(&self) -> bool {
        self.submission == Submission::InFlight
    }

    /// Error text of the last failed submission, if it has not been dismissed.
    pub fn error(&self) -> Option<String> {
        match &self.submission {
            Submission::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Focusing the textarea dismisses a stale submission error. An in-flight
    /// submission is not touched.
    pub fn dismiss_error(&mut self) {
        if matches!(self.submission, Submission::Failed(_)) {
            self.submission = Submission::Idle;
        }
    }

    /// Try to start a submission. Returns `false` while another one is still
    /// in flight; the caller must not issue a request in that case.
    pub fn begin_submit(&mut self) -> bool {
        if self.submission == Submission::InFlight {
            return false;
        }
        self.submission = Submission::InFlight;
        true
    }

    /// Fold the completed POST into the composer. Returns `true` when the
    /// message was accepted and the feed should be refetched.
    pub fn finish_submit(&mut self, outcome: Result<CreateMessageResponse, ApiError>) -> bool {
        match outcome {
            Ok(resp) if resp.is_ok() => {
                self.draft.clear();
                self.submission = Submission::Idle;
                true
            }
            Ok(resp) => {
                self.submission = Submission::Failed(resp.error_message());
                false
            }
            Err(err) => {
                self.submission = Submission::Failed(err.to_string());
                false
            }
        }
    }
}
