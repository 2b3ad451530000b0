use anyhow::Result;
use dialoguer::{Confirm, Select};

use super::super::domain::Excitement;
use super::super::state::{Field, WizardController};
use super::super::view::print_bullet;

pub(crate) fn level_label(level: Excitement) -> String {
    let caption = match level.value() {
        0 => "Not really",
        50 => "Can't wait!",
        100 => "Super duper excited!",
        _ => "",
    };
    if caption.is_empty() {
        format!("{level}%")
    } else {
        format!("{level}%  {caption}")
    }
}

pub fn ask_excitement(wizard: &mut WizardController) -> Result<()> {
    let labels: Vec<String> = Excitement::LEVELS.iter().copied().map(level_label).collect();
    let current = wizard.record().excitement;
    let default = Excitement::LEVELS
        .iter()
        .position(|l| *l == current)
        .unwrap_or(2);

    let picked = Select::new()
        .with_prompt("  How excited are you for our date?")
        .items(&labels)
        .default(default)
        .interact()?;
    wizard.set(Field::Excitement(Excitement::LEVELS[picked]));
    print_bullet(&format!(
        "Excitement level: {}%",
        wizard.record().excitement
    ));

    let official = Confirm::new()
        .with_prompt("  Let's make it official?")
        .default(true)
        .interact()?;
    if official {
        wizard.proceed()?;
    }
    Ok(())
}
