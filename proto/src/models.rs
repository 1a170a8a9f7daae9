use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::NOTES_FALLBACK;

/// The identifier the backend addresses a medicine by.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MedicineId(pub i64);

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MedicineId {
    fn from(value: i64) -> Self {
        MedicineId(value)
    }
}

struct MedicineIdVisitor;

impl<'de> Visitor<'de> for MedicineIdVisitor {
    type Value = MedicineId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer medicine id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MedicineId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(MedicineId)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    // Javascript only has one number type, so integral floats are fine.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v.abs() <= 9_007_199_254_740_991.0 {
            Ok(MedicineId(v as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for MedicineId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MedicineIdVisitor)
    }
}

/// A reminder attached to a medicine in the backend's listing. Carried, never rendered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReminderSummary {
    #[serde(default)]
    pub reminder_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MedicineRecord {
    pub id: MedicineId,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_reminders")]
    pub reminders: Vec<ReminderSummary>,
}

/// Reminders are never shown, so a bad one is dropped rather than failing the medicine.
fn lenient_reminders<'de, D>(deserializer: D) -> Result<Vec<ReminderSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let reminders = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(reminders)
}

impl MedicineRecord {
    /// The notes as they should be displayed, empty and missing both become `N/A`.
    pub fn display_notes(&self) -> &str {
        match self.notes.as_deref() {
            Some(notes) if !notes.is_empty() => notes,
            _ => NOTES_FALLBACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("medicines data is not a list, found {found}")]
    NotAList { found: &'static str },
    #[error("medicine at index {index} is malformed: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// The ordered list of medicines handed to the UI by the page.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MedicineList(Vec<MedicineRecord>);

impl MedicineList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[MedicineRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MedicineRecord> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<MedicineRecord> {
        self.0
    }
}

impl From<Vec<MedicineRecord>> for MedicineList {
    fn from(value: Vec<MedicineRecord>) -> Self {
        MedicineList(value)
    }
}

impl AsRef<[MedicineRecord]> for MedicineList {
    fn as_ref(&self) -> &[MedicineRecord] {
        &self.0
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for MedicineList {
    type Error = DataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(DataError::NotAList {
                    found: value_kind(&other),
                })
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<MedicineRecord>(item).map_err(|e| {
                    DataError::InvalidRecord {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(MedicineList)
    }
}
