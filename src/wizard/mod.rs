pub mod domain;
pub mod flow;
pub mod observer;
pub mod prompts;
pub mod record;
pub mod state;
pub mod view;

pub use domain::{
    ANSWERS_STORAGE_KEY, Availability, Dish, Excitement, MOVIE_CATALOG, MovieChoice,
    SOMETHING_ELSE, TERMINAL_STEP, TimeSlot,
};
pub use flow::run_wizard;
pub use observer::{ObserverReport, load_saved_answers, persist_answers, spawn_completion_observer};
pub use record::AnswerRecord;
pub use state::{Completed, Field, WizardController, WizardStep};
