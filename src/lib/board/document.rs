//! In-memory view of the board: the elements the component binds to
//! (`activities-list`, `activity`, `signup-form`, `email`, `message`) and
//! the mutations the component performs on them.
use log::debug;

use super::{banner::MessageBanner, models::activity_model::ActivityCollection};

pub type NodeId = u64;

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const PLACEHOLDER_OPTION_LABEL: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivitiesList {
    Loading,
    Cards(Vec<ActivityCard>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub node: NodeId,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsSection,
}

/// The participant sublist of a card. `Empty` is rendered as the
/// "no participants" placeholder, so the placeholder shows iff there are no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsSection {
    Empty,
    Rows(Vec<ParticipantRow>),
}

/// A participant line together with its delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub node: NodeId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl Default for SelectControl {
    fn default() -> Self {
        Self {
            options: vec![placeholder_option()],
            value: String::new(),
        }
    }
}

fn placeholder_option() -> SelectOption {
    SelectOption {
        value: String::new(),
        label: PLACEHOLDER_OPTION_LABEL.to_owned(),
    }
}

impl SelectControl {
    /// Replaces every option with the placeholder followed by one option per name.
    pub fn reseed<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.options = std::iter::once(placeholder_option())
            .chain(names.into_iter().map(|name| SelectOption {
                value: name.to_owned(),
                label: name.to_owned(),
            }))
            .collect();
        self.value.clear();
    }

    /// Selects the option with this value. An unknown value selects nothing.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|option| option.value == value) {
            self.value = value.to_owned();
            true
        } else {
            self.value.clear();
            false
        }
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub activity: SelectControl,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.activity.reset();
        self.email.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub activities_list: ActivitiesList,
    pub signup_form: SignupForm,
    pub message: MessageBanner,
    next_node: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            activities_list: ActivitiesList::Loading,
            signup_form: SignupForm::default(),
            message: MessageBanner::default(),
            next_node: 1,
        }
    }

    fn allocate_node(&mut self) -> NodeId {
        let node = self.next_node;
        self.next_node += 1;
        node
    }

    /// Throws away every card and option and builds them again from `activities`.
    pub fn render_activities(&mut self, activities: &ActivityCollection) {
        let mut cards = Vec::with_capacity(activities.len());
        for (name, activity) in activities.iter() {
            let node = self.allocate_node();
            let rows = activity
                .participants
                .iter()
                .map(|participant| ParticipantRow {
                    node: self.allocate_node(),
                    text: participant.display_text(),
                })
                .collect::<Vec<_>>();
            debug!("Rendering {} with {} participant(s)", name, rows.len());
            cards.push(ActivityCard {
                node,
                name: name.to_owned(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: if rows.is_empty() {
                    ParticipantsSection::Empty
                } else {
                    ParticipantsSection::Rows(rows)
                },
            });
        }
        self.activities_list = ActivitiesList::Cards(cards);
        self.signup_form
            .activity
            .reseed(activities.iter().map(|(name, _)| name));
    }

    /// Replaces the whole list with the failure notice. The select is left alone.
    pub fn show_load_failure(&mut self) {
        self.activities_list = ActivitiesList::Failed;
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.activities_list {
            ActivitiesList::Cards(cards) => cards,
            ActivitiesList::Loading | ActivitiesList::Failed => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    /// Finds a row by node, returning the card it belongs to as well.
    pub fn find_row(&self, node: NodeId) -> Option<(&ActivityCard, &ParticipantRow)> {
        self.cards().iter().find_map(|card| match &card.participants {
            ParticipantsSection::Rows(rows) => rows
                .iter()
                .find(|row| row.node == node)
                .map(|row| (card, row)),
            ParticipantsSection::Empty => None,
        })
    }

    /// First row in `activity` whose text is `text`.
    pub fn find_row_by_text(&self, activity: &str, text: &str) -> Option<NodeId> {
        match &self.card(activity)?.participants {
            ParticipantsSection::Rows(rows) => rows
                .iter()
                .find(|row| row.text == text)
                .map(|row| row.node),
            ParticipantsSection::Empty => None,
        }
    }

    /// Removes one row. The sublist turns into the placeholder when it was the
    /// last one. Returns `false` when no such row is rendered any more.
    pub fn remove_row(&mut self, node: NodeId) -> bool {
        let ActivitiesList::Cards(cards) = &mut self.activities_list else {
            return false;
        };
        for card in cards.iter_mut() {
            let ParticipantsSection::Rows(rows) = &mut card.participants else {
                continue;
            };
            let Some(index) = rows.iter().position(|row| row.node == node) else {
                continue;
            };
            rows.remove(index);
            if rows.is_empty() {
                card.participants = ParticipantsSection::Empty;
            }
            return true;
        }
        false
    }
}
