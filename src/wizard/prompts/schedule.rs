use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Input, Select};

use super::super::domain::TimeSlot;
use super::super::state::{Field, WizardController};
use super::super::view::{print_bullet, print_success};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| format!("expected a date like 2024-06-01, got {:?}", input.trim()))
}

pub fn ask_schedule(wizard: &mut WizardController) -> Result<()> {
    print_bullet("Pick a day (YYYY-MM-DD) and an hour.");

    let default_date = wizard
        .record()
        .date
        .unwrap_or_else(|| Local::now().date_naive())
        .format(DATE_FORMAT)
        .to_string();
    let raw: String = Input::new()
        .with_prompt("  Date")
        .default(default_date)
        .validate_with(|input: &String| parse_date(input).map(|_| ()))
        .interact_text()?;
    // validated above
    let date = parse_date(&raw).map_err(anyhow::Error::msg)?;
    wizard.set(Field::Date(date));

    let slots: Vec<TimeSlot> = TimeSlot::all().collect();
    let labels: Vec<String> = slots.iter().map(|s| s.label()).collect();
    let default_slot = wizard.record().time.map_or(18, |t| usize::from(t.hour()));
    let picked = Select::new()
        .with_prompt("  Select a time")
        .items(&labels)
        .default(default_slot)
        .max_length(8)
        .interact()?;
    wizard.set(Field::Time(slots[picked]));

    wizard.proceed()?;
    print_success(&format!(
        "{} at {}",
        date.format("%a %b %d %Y"),
        slots[picked]
    ));
    Ok(())
}
