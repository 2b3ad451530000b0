use anyhow::Result;
use dialoguer::{Input, Select};

use super::super::domain::{MOVIE_CATALOG, MovieChoice, SOMETHING_ELSE};
use super::super::state::WizardController;
use super::super::view::{print_success, print_warning};

pub fn ask_movie(wizard: &mut WizardController) -> Result<()> {
    let mut options: Vec<&str> = MOVIE_CATALOG.to_vec();
    options.push(SOMETHING_ELSE);

    let picked = Select::new()
        .with_prompt("  What shall we watch together?")
        .items(&options)
        .default(0)
        .interact()?;

    let choice = match MOVIE_CATALOG.get(picked) {
        Some(title) => MovieChoice::Listed(*title),
        None => {
            let text: String = Input::new()
                .with_prompt("  What movie would you like to watch?")
                .allow_empty(true)
                .interact_text()?;
            MovieChoice::SomethingElse(text)
        }
    };

    let before = wizard.current_step();
    if wizard.choose_movie(&choice) == before {
        print_warning("No movie picked, let's try that again.");
    } else {
        print_success(&wizard.record().movie);
    }
    Ok(())
}
