//! Module with activity model compatible with the signup service's REST API
use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Value};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Capacity minus enrollment. Not clamped: an overbooked activity goes negative.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// A participant is either a bare identifier (normally an email) or a record
/// with optional `name` and `email` fields.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Participant {
    Identifier(String),
    Record(Map<String, Value>),
    Other(Value),
}

impl Participant {
    /// Text shown for this participant: `name`, then `email`, then the record
    /// as compact JSON, then the identifier itself.
    pub fn display_text(&self) -> String {
        match self {
            Participant::Identifier(id) => id.clone(),
            Participant::Record(record) => ["name", "email"]
                .iter()
                .find_map(|key| record.get(*key).and_then(present_text))
                .unwrap_or_else(|| Value::Object(record.clone()).to_string()),
            Participant::Other(value) => value.to_string(),
        }
    }
}

/* a field counts as present when it is a non-empty string, a non-zero number or `true` */
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Activities keyed by name, in the order the backend listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityCollection(Vec<(String, Activity)>);

impl ActivityCollection {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /* a repeated key keeps its first position and takes the last value */
    fn insert(&mut self, name: String, activity: Activity) {
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = activity,
            None => self.0.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut collection = ActivityCollection::default();
        for (name, activity) in iter {
            collection.insert(name, activity);
        }
        collection
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut collection = ActivityCollection::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    collection.insert(name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
