use log::debug;
use serde_json::Value;
use url::Url;

use crate::board::{
    banner::{BannerState, MessageKind},
    document::{
        ActivitiesList, ActivityCard, Document, ParticipantsSection, LOADING_NOTICE,
        LOAD_FAILED_NOTICE, NO_PARTICIPANTS,
    },
    error::BoardError,
    models::activity_model::ActivityCollection,
};

pub fn log_all_activities(activities: &ActivityCollection) -> () {
    for (name, activity) in activities.iter() {
        debug!(
            "Got {} ({}), {} of {} spots taken",
            name,
            activity.schedule,
            activity.participants.len(),
            activity.max_participants
        );
    }
}

/* base url with the given path segments appended, each one escaped on its own */
fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, BoardError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| BoardError::CannotBeABase(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn activities_url(base_url: &Url) -> Result<Url, BoardError> {
    endpoint(base_url, &["activities"])
}

pub fn signup_url(base_url: &Url, activity: &str, email: &str) -> Result<Url, BoardError> {
    let mut url = endpoint(base_url, &["activities", activity, "signup"])?;
    url.query_pairs_mut().append_pair("email", email);
    Ok(url)
}

pub fn unregister_url(base_url: &Url, activity: &str, identifier: &str) -> Result<Url, BoardError> {
    endpoint(base_url, &["activities", activity, "participants", identifier])
}

/// Text of a `message`/`detail` field. Missing, null and empty strings count as absent.
pub fn reply_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/* form string of information about one activity card */
pub fn format_card_as_string(card: &ActivityCard) -> String {
    let participants = match &card.participants {
        ParticipantsSection::Empty => format!("    {}\n", NO_PARTICIPANTS),
        ParticipantsSection::Rows(rows) => rows
            .iter()
            .map(|row| format!("    [{}] {} \u{2715}\n", row.node, row.text))
            .collect::<String>(),
    };
    format!(
        "{}\n  {}\n  Schedule: {}\n  Availability: {} spots left\n  Participants:\n{}",
        card.name, card.description, card.schedule, card.spots_left, participants
    )
}

/// Renders the whole document for the terminal. Node ids show up only as the
/// labels of delete controls.
pub fn render_document(document: &Document) -> String {
    let list = match &document.activities_list {
        ActivitiesList::Loading => format!("{}\n", LOADING_NOTICE),
        ActivitiesList::Failed => format!("{}\n", LOAD_FAILED_NOTICE),
        ActivitiesList::Cards(cards) => cards
            .iter()
            .map(format_card_as_string)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let form = &document.signup_form;
    let selected = form
        .activity
        .options
        .iter()
        .find(|option| option.value == form.activity.value)
        .map(|option| option.label.as_str())
        .unwrap_or_default();
    let options = form
        .activity
        .options
        .iter()
        .skip(1)
        .map(|option| option.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let banner = match document.message.state() {
        BannerState::Hidden => String::new(),
        BannerState::Visible { kind, text } => format!(
            "[{}] {}\n",
            match kind {
                MessageKind::Success => "success",
                MessageKind::Error => "error",
            },
            text
        ),
    };
    format!(
        "== Activities ==\n{}\n== Sign up ==\nActivity: {}\nEmail: {}\nOptions: {}\n{}",
        list, selected, form.email, options, banner
    )
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
