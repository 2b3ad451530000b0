use anyhow::Result;
use console::style;
use dialoguer::Select;

use super::super::domain::Availability;
use super::super::state::WizardController;
use super::super::view::print_success;

pub fn ask_invitation(wizard: &mut WizardController) -> Result<()> {
    let options = ["Yes, I'd love to!", "No"];
    let choice = Select::new()
        .with_prompt("  Will you go on a date with me?")
        .items(&options)
        .default(0)
        .interact()?;

    let answer = if choice == 0 {
        Availability::Yes
    } else {
        println!();
        println!("  {}", style("There is no \"NOOOOOO\"").red().bold());
        println!("  {}", style("You must come with me!").dim());
        Select::new()
            .with_prompt("  So?")
            .items(&["Okay, I'll come!"])
            .default(0)
            .interact()?;
        Availability::No
    };

    wizard.respond(answer);
    print_success("YEYYYYYYYY!");
    Ok(())
}
