//! The board component: turns user events into requests and request
//! completions into document changes.
//!
//! [`handle_event`] and [`apply`] only touch the [`Document`]; [`perform`] only
//! talks to the backend. [`ActivityBoard`] chains them one request at a time,
//! while [`crate::board::run_tool::run`] lets requests overlap.
use log::{debug, error, info, warn};

use super::{
    activity_api::ActivityApi,
    banner::MessageKind,
    document::{Document, NodeId},
    error::BoardError,
    models::{activity_model::ActivityCollection, ApiReply},
};

pub const SIGNUP_FALLBACK_MESSAGE: &str = "Signed up successfully";
pub const REJECTED_FALLBACK_MESSAGE: &str = "An error occurred";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_MESSAGE: &str = "Failed to unregister. Please try again.";

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Refresh,
    SelectActivity(String),
    EnterEmail(String),
    Submit,
    /// Click on the delete control of a participant row.
    Delete(NodeId),
    Quit,
}

/// A backend call the board wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Refresh,
    Signup {
        activity: String,
        email: String,
    },
    Unregister {
        row: Option<NodeId>,
        activity: String,
        identifier: String,
    },
}

/// A finished backend call, successful or not.
#[derive(Debug)]
pub enum Completion {
    Refreshed(Result<ActivityCollection, BoardError>),
    SignedUp {
        activity: String,
        email: String,
        result: Result<ApiReply, BoardError>,
    },
    Unregistered {
        row: Option<NodeId>,
        activity: String,
        identifier: String,
        result: Result<ApiReply, BoardError>,
    },
}

pub async fn perform<A: ActivityApi>(api: &A, request: Request) -> Completion {
    match request {
        Request::Refresh => Completion::Refreshed(api.list_activities().await),
        Request::Signup { activity, email } => {
            let result = api.signup(&activity, &email).await;
            Completion::SignedUp {
                activity,
                email,
                result,
            }
        }
        Request::Unregister {
            row,
            activity,
            identifier,
        } => {
            let result = api.unregister(&activity, &identifier).await;
            Completion::Unregistered {
                row,
                activity,
                identifier,
                result,
            }
        }
    }
}

/// Applies a user event to the form and returns the request it triggers, if any.
pub fn handle_event(document: &mut Document, event: UiEvent) -> Option<Request> {
    match event {
        UiEvent::Refresh => Some(Request::Refresh),
        UiEvent::SelectActivity(activity) => {
            if !document.signup_form.activity.select(&activity) {
                warn!("There is no activity named {}", activity);
            }
            None
        }
        UiEvent::EnterEmail(email) => {
            document.signup_form.email = email;
            None
        }
        UiEvent::Submit => Some(Request::Signup {
            activity: document.signup_form.activity.value.clone(),
            email: document.signup_form.email.clone(),
        }),
        UiEvent::Delete(node) => match document.find_row(node) {
            Some((card, row)) => Some(Request::Unregister {
                row: Some(node),
                activity: card.name.clone(),
                identifier: row.text.clone(),
            }),
            None => {
                warn!("There is no participant row {}", node);
                None
            }
        },
        UiEvent::Quit => None,
    }
}

/// Reconciles a completion into the document. Returns the follow-up request,
/// which is a full refresh after a successful signup and nothing otherwise.
pub fn apply(document: &mut Document, completion: Completion) -> Option<Request> {
    match completion {
        Completion::Refreshed(Ok(activities)) => {
            info!("Rendering {} activities", activities.len());
            document.render_activities(&activities);
            None
        }
        Completion::Refreshed(Err(err)) => {
            error!("Error fetching activities: {}", err);
            document.show_load_failure();
            None
        }
        Completion::SignedUp {
            activity,
            email,
            result,
        } => match result {
            Ok(ApiReply::Accepted { message }) => {
                info!("Signed up {} for {}", email, activity);
                document.message.show(
                    MessageKind::Success,
                    message.unwrap_or_else(|| SIGNUP_FALLBACK_MESSAGE.to_owned()),
                );
                document.signup_form.reset();
                Some(Request::Refresh)
            }
            Ok(ApiReply::Rejected { status, detail }) => {
                info!("Signup of {} for {} rejected with {}", email, activity, status);
                document.message.show(
                    MessageKind::Error,
                    detail.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned()),
                );
                None
            }
            Err(err) => {
                error!("Error signing up: {}", err);
                document.message.show(MessageKind::Error, SIGNUP_FAILED_MESSAGE);
                None
            }
        },
        Completion::Unregistered {
            row,
            activity,
            identifier,
            result,
        } => {
            match result {
                Ok(ApiReply::Accepted { .. }) => {
                    let removed = row.is_some_and(|node| document.remove_row(node));
                    if !removed {
                        debug!("Row for {} in {} is no longer rendered", identifier, activity);
                    }
                    document.message.show(
                        MessageKind::Success,
                        format!("Unregistered {} from {}", identifier, activity),
                    );
                }
                Ok(ApiReply::Rejected { status, detail }) => {
                    info!(
                        "Unregistering {} from {} rejected with {}",
                        identifier, activity, status
                    );
                    document.message.show(
                        MessageKind::Error,
                        detail.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned()),
                    );
                }
                Err(err) => {
                    error!("Error unregistering: {}", err);
                    document
                        .message
                        .show(MessageKind::Error, UNREGISTER_FAILED_MESSAGE);
                }
            }
            None
        }
    }
}

/// The board as a single object: its backend and the document it renders into.
/// Every operation runs to completion, follow-ups included, before returning.
pub struct ActivityBoard<A> {
    api: A,
    document: Document,
}

impl<A: ActivityApi> ActivityBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            document: Document::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn refresh(&mut self) {
        self.execute(Request::Refresh).await;
    }

    pub async fn signup(&mut self, activity: &str, email: &str) {
        self.execute(Request::Signup {
            activity: activity.to_owned(),
            email: email.to_owned(),
        })
        .await;
    }

    /// Unregisters the participant shown as `participant_text` in `activity`.
    /// The rendered text doubles as the identifier sent to the backend.
    pub async fn unregister_participant(&mut self, activity: &str, participant_text: &str) {
        let row = self.document.find_row_by_text(activity, participant_text);
        self.execute(Request::Unregister {
            row,
            activity: activity.to_owned(),
            identifier: participant_text.to_owned(),
        })
        .await;
    }

    pub async fn handle_event(&mut self, event: UiEvent) {
        if let Some(request) = handle_event(&mut self.document, event) {
            self.execute(request).await;
        }
    }

    async fn execute(&mut self, request: Request) {
        let mut next = Some(request);
        while let Some(request) = next {
            let completion = perform(&self.api, request).await;
            next = apply(&mut self.document, completion);
        }
    }
}
