use anyhow::Result;
use dialoguer::MultiSelect;
use strum::VariantArray;

use super::super::domain::Dish;
use super::super::state::WizardController;
use super::super::view::{print_bullet, print_success, print_warning};

/// Toggles the dishes whose checked state differs from the record.
pub(crate) fn apply_selection(wizard: &mut WizardController, checked: &[usize]) {
    for (i, dish) in Dish::VARIANTS.iter().enumerate() {
        if checked.contains(&i) != wizard.record().has_food(*dish) {
            wizard.toggle_food(*dish);
        }
    }
}

pub fn ask_food(wizard: &mut WizardController) -> Result<()> {
    print_bullet("Space to pick, Enter when it looks delicious.");

    let labels: Vec<String> = Dish::VARIANTS.iter().map(ToString::to_string).collect();
    let defaults: Vec<bool> = Dish::VARIANTS
        .iter()
        .map(|d| wizard.record().has_food(*d))
        .collect();

    let checked = MultiSelect::new()
        .with_prompt("  What shall we feast on, my dear?")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;
    apply_selection(wizard, &checked);

    match wizard.proceed() {
        Ok(_) => {
            print_success(&wizard.record().food_labels().join(", "));
        }
        Err(e) => print_warning(&e.to_string()),
    }
    Ok(())
}
