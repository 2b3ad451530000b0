use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::mpsc::UnboundedSender;

use super::domain::{Availability, Dish, Excitement, MovieChoice, TERMINAL_STEP, TimeSlot};
use super::record::AnswerRecord;
use crate::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Invitation,
    Schedule,
    Food,
    Movie,
    Excitement,
    Summary,
}

impl WizardStep {
    pub const ALL: [Self; 6] = [
        Self::Invitation,
        Self::Schedule,
        Self::Food,
        Self::Movie,
        Self::Excitement,
        Self::Summary,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(TERMINAL_STEP)]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Invitation => "Will you go on a date with me?",
            Self::Schedule => "When shall we go?",
            Self::Food => "What shall we feast on?",
            Self::Movie => "What shall we watch together?",
            Self::Excitement => "How excited are you for our date?",
            Self::Summary => "It's a date!",
        }
    }

    /// What must be filled in before the continue control unlocks.
    pub fn requirement(self) -> Option<&'static str> {
        match self {
            Self::Schedule => Some("a date and a time"),
            Self::Food => Some("at least one dish"),
            Self::Movie => Some("a movie"),
            Self::Invitation | Self::Excitement | Self::Summary => None,
        }
    }
}

/// A single field update, keyed by the record field it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Available(bool),
    Date(NaiveDate),
    Time(TimeSlot),
    Food(Vec<Dish>),
    Movie(String),
    Excitement(Excitement),
}

/// Emitted once when the wizard lands on the summary step.
#[derive(Debug, Clone)]
pub struct Completed {
    pub record: AnswerRecord,
    pub finished_at: DateTime<Utc>,
}

/// Linear step machine over [`WizardStep::ALL`].
///
/// Interactions are synchronous. Reaching the summary step pushes a
/// [`Completed`] event into the attached channel and returns without
/// waiting for whoever handles it.
pub struct WizardController {
    step: usize,
    record: AnswerRecord,
    completion_tx: Option<UnboundedSender<Completed>>,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            step: 0,
            record: AnswerRecord::default(),
            completion_tx: None,
        }
    }

    pub fn with_completion_channel(completion_tx: UnboundedSender<Completed>) -> Self {
        Self {
            completion_tx: Some(completion_tx),
            ..Self::new()
        }
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.step)
    }

    pub fn is_terminal(&self) -> bool {
        self.step >= TERMINAL_STEP
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// Merges a field without leaving the current step.
    pub fn set(&mut self, field: Field) {
        if self.is_terminal() {
            return;
        }
        self.merge(field);
    }

    pub fn toggle_food(&mut self, dish: Dish) {
        if self.is_terminal() {
            return;
        }
        self.record.toggle_food(dish);
    }

    /// Merges `field` then moves to the next step. No-op on the summary step.
    pub fn advance(&mut self, field: Field) -> usize {
        if self.is_terminal() {
            return self.step;
        }
        self.merge(field);
        self.bump();
        self.step
    }

    /// Answers the invitation. "No" is taken as "Yes".
    pub fn respond(&mut self, answer: Availability) -> usize {
        if answer == Availability::No {
            tracing::debug!("invitation declined, treating as accepted");
        }
        self.advance(Field::Available(true))
    }

    /// Picks a movie. A blank free-text answer keeps the wizard where it is.
    pub fn choose_movie(&mut self, choice: &MovieChoice) -> usize {
        match choice.title() {
            Some(title) => self.advance(Field::Movie(title)),
            None => self.step,
        }
    }

    pub fn can_proceed(&self) -> bool {
        match self.step() {
            WizardStep::Invitation | WizardStep::Excitement => true,
            WizardStep::Schedule => self.record.date.is_some() && self.record.time.is_some(),
            WizardStep::Food => !self.record.food.is_empty(),
            WizardStep::Movie => !self.record.movie.is_empty(),
            WizardStep::Summary => false,
        }
    }

    /// The continue control: advances with what is already in the record.
    pub fn proceed(&mut self) -> Result<usize, WizardError> {
        if self.is_terminal() {
            return Err(WizardError::AtTerminal);
        }
        if !self.can_proceed() {
            let step = self.step();
            return Err(WizardError::GateClosed {
                step: step.label(),
                requirement: step.requirement().unwrap_or("input"),
            });
        }
        self.bump();
        Ok(self.step)
    }

    fn merge(&mut self, field: Field) {
        match field {
            Field::Available(value) => self.record.is_available = Some(value),
            Field::Date(date) => self.record.date = Some(date),
            Field::Time(slot) => self.record.time = Some(slot),
            Field::Food(dishes) => {
                self.record.food.clear();
                for dish in dishes {
                    if !self.record.has_food(dish) {
                        self.record.food.push(dish);
                    }
                }
            }
            Field::Movie(title) => self.record.movie = title,
            Field::Excitement(level) => self.record.excitement = level,
        }
    }

    fn bump(&mut self) {
        self.step += 1;
        tracing::debug!(step = self.step, "wizard advanced");
        if self.step == TERMINAL_STEP {
            self.emit_completed();
        }
    }

    fn emit_completed(&self) {
        let Some(tx) = &self.completion_tx else {
            return;
        };
        let event = Completed {
            record: self.record.clone(),
            finished_at: Utc::now(),
        };
        if tx.send(event).is_err() {
            tracing::warn!("completion observer is gone; answers were not handed off");
        }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
