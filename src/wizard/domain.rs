use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::{Display, EnumString, VariantArray};

/// Index of the summary screen. No interaction advances past it.
pub const TERMINAL_STEP: usize = 5;

/// Local storage key the finished record is written under.
pub const ANSWERS_STORAGE_KEY: &str = "dateProposalAnswers";

pub const SOMETHING_ELSE: &str = "Something else";

pub const MOVIE_CATALOG: [&str; 8] = [
    "The Notebook",
    "La La Land",
    "Titanic",
    "Pride and Prejudice",
    "Anyone But You",
    "Past Lives",
    "Love at First Sight",
    "Through My Window 3",
];

// ── Food ────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
pub enum Dish {
    #[strum(serialize = "Lasagna")]
    #[serde(rename = "Lasagna")]
    Lasagna,
    #[strum(serialize = "Chicken Pie")]
    #[serde(rename = "Chicken Pie")]
    ChickenPie,
    #[strum(serialize = "Chicken Shawarma")]
    #[serde(rename = "Chicken Shawarma")]
    ChickenShawarma,
    #[strum(serialize = "Snack Platter")]
    #[serde(rename = "Snack Platter")]
    SnackPlatter,
    #[strum(serialize = "Mix rice")]
    #[serde(rename = "Mix rice")]
    MixRice,
}

// ── Time slots ──────────────────────────────────────────────────

/// One of the 24 whole-hour slots, rendered as `HH:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub fn new(hour: u8) -> Option<Self> {
        (hour < 24).then_some(Self(hour))
    }

    pub fn hour(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..24).map(Self)
    }

    pub fn label(self) -> String {
        format!("{:02}:00", self.0)
    }

    pub fn parse(label: &str) -> Option<Self> {
        let (hour, minutes) = label.split_once(':')?;
        if hour.len() != 2 || minutes != "00" {
            return None;
        }
        hour.parse().ok().and_then(Self::new)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Serde adapter for `Option<TimeSlot>`: `None` is the empty string.
pub(crate) mod time_label {
    use super::TimeSlot;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(slot: &Option<TimeSlot>, s: S) -> Result<S::Ok, S::Error> {
        match slot {
            Some(slot) => s.serialize_str(&slot.label()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TimeSlot>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        TimeSlot::parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid time slot: {raw}")))
    }
}

// ── Excitement ──────────────────────────────────────────────────

/// Slider reading snapped to one of 0, 25, 50, 75, 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Excitement(u8);

impl Excitement {
    pub const STEP: u8 = 25;
    pub const LEVELS: [Self; 5] = [Self(0), Self(25), Self(50), Self(75), Self(100)];

    /// Quantizes any slider position to the nearest level.
    pub fn from_slider(position: f64) -> Self {
        if position.is_nan() {
            return Self::default();
        }
        let clamped = position.clamp(0.0, 100.0);
        let step = f64::from(Self::STEP);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let snapped = ((clamped / step).round() * step) as u8;
        Self(snapped)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Excitement {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for Excitement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Excitement {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Excitement {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(d)?;
        Ok(Self::from_slider(raw))
    }
}

// ── Step 0 / step 3 inputs ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieChoice {
    Listed(&'static str),
    SomethingElse(String),
}

impl MovieChoice {
    /// Title the choice resolves to; `None` for a blank free-text answer.
    pub fn title(&self) -> Option<String> {
        match self {
            Self::Listed(title) => Some((*title).to_string()),
            Self::SomethingElse(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}
