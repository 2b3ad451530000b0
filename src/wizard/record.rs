use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Dish, Excitement, TimeSlot, time_label};

/// Everything the invitee answered during one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default, with = "iso_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "time_label")]
    pub time: Option<TimeSlot>,
    #[serde(default, deserialize_with = "distinct_dishes")]
    pub food: Vec<Dish>,
    #[serde(default)]
    pub movie: String,
    #[serde(default)]
    pub excitement: Excitement,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            is_available: None,
            date: None,
            time: None,
            food: Vec::new(),
            movie: String::new(),
            excitement: Excitement::default(),
        }
    }
}

impl AnswerRecord {
    pub fn has_food(&self, dish: Dish) -> bool {
        self.food.contains(&dish)
    }

    /// Adds the dish when absent, removes it when present.
    pub fn toggle_food(&mut self, dish: Dish) {
        if let Some(pos) = self.food.iter().position(|d| *d == dish) {
            self.food.remove(pos);
        } else {
            self.food.push(dish);
        }
    }

    pub fn food_labels(&self) -> Vec<String> {
        self.food.iter().map(ToString::to_string).collect()
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Repeated dishes collapse to their first occurrence.
fn distinct_dishes<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Vec<Dish>, D::Error> {
    let mut food = Vec::new();
    for dish in Vec::<Dish>::deserialize(d)? {
        if !food.contains(&dish) {
            food.push(dish);
        }
    }
    Ok(food)
}

/// Dates travel as `YYYY-MM-DD`. Full timestamps are accepted on input
/// and truncated to their calendar date.
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&date.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| Some(ts.date_naive()))
            .map_err(|_| D::Error::custom(format!("invalid date: {raw}")))
    }
}
