use console::style;

use super::record::AnswerRecord;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn print_welcome_banner() {
    println!();
    println!("  {}", style("♥  Rendezvous  ♥").magenta().bold());
    println!("  {}", style("A little question, one step at a time.").dim());
    println!();
}

pub fn print_step(current: usize, total: usize, title: &str) {
    println!();
    println!(
        "  {} {}",
        style(format!("[{current}/{total}]")).magenta().bold(),
        style(title).white().bold()
    );
    println!("  {}", style("─".repeat(50)).dim());
}

pub fn print_bullet(text: &str) {
    println!("  {} {}", style("›").magenta(), text);
}

pub fn print_success(text: &str) {
    println!("  {} {}", style("✓").green().bold(), text);
}

pub fn print_warning(text: &str) {
    println!("  {} {}", style("!").yellow().bold(), text);
}

/// The closing lines of the summary screen, unstyled.
pub fn summary_lines(record: &AnswerRecord) -> Vec<String> {
    let when = record
        .date
        .map(|d| d.format("%a %b %d %Y").to_string())
        .unwrap_or_default();
    let at = record.time.map(|t| t.label()).unwrap_or_default();

    vec![
        "I can't wait to see you on:".to_string(),
        format!("{when} at {at}"),
        format!("We'll enjoy some delicious {}.", record.food_labels().join(", ")),
        format!("Then we'll watch \"{}\" together.", record.movie),
        format!("Your excitement level: {}/100", record.excitement.value()),
    ]
}

pub fn print_summary(record: &AnswerRecord) {
    println!();
    println!("  {}", style(RULE).magenta());
    println!("  ◆  {}", style("It's a date, my love!").white().bold());
    println!("  {}", style(RULE).magenta());
    println!();

    let lines = summary_lines(record);
    for (i, line) in lines.iter().enumerate() {
        if i == 1 {
            println!("    {}", style(line).magenta().bold());
        } else {
            println!("    {line}");
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Dish, Excitement, TimeSlot};
    use chrono::NaiveDate;

    #[test]
    fn summary_reads_like_a_plan() {
        let mut record = AnswerRecord::default();
        record.is_available = Some(true);
        record.date = NaiveDate::from_ymd_opt(2024, 6, 1);
        record.time = TimeSlot::new(18);
        record.toggle_food(Dish::Lasagna);
        record.toggle_food(Dish::SnackPlatter);
        record.movie = "Titanic".into();
        record.excitement = Excitement::from_slider(75.0);

        let lines = summary_lines(&record);
        assert_eq!(lines[1], "Sat Jun 01 2024 at 18:00");
        assert_eq!(lines[2], "We'll enjoy some delicious Lasagna, Snack Platter.");
        assert_eq!(lines[3], "Then we'll watch \"Titanic\" together.");
        assert_eq!(lines[4], "Your excitement level: 75/100");
    }
}
