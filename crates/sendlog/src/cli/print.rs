use chrono::{DateTime, Utc};
use colored::Colorize;
use sendlogapp::commands::{CatalogueView, CmdMessage, MessageLevel};
use sendlogapp::model::{Climb, UserProfile};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 8;
const GRADE_WIDTH: usize = 8;
const SENT_MARKER: &str = "✓";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_users(users: &[UserProfile]) {
    for user in users {
        println!("  {} {}", user.name.bold(), format!("<{}>", user.email).dimmed());
    }
}

pub(super) fn print_catalogue(view: &CatalogueView, owner_name: Option<&str>) {
    if let Some(name) = owner_name {
        println!("{}", format!("{}'s climbs (read-only)", name).bold());
        println!();
    }

    if view.total == 0 {
        println!("No climbs yet.");
        return;
    }
    if view.climbs.is_empty() {
        println!("No climbs match the current filters.");
        return;
    }

    if !view.climbs.incomplete.is_empty() {
        println!("{}", "Projects".bold());
        for climb in &view.climbs.incomplete {
            println!("{}", climb_line(climb));
        }
    }
    if !view.climbs.completed.is_empty() {
        if !view.climbs.incomplete.is_empty() {
            println!();
        }
        println!("{}", "Sent".bold());
        for climb in &view.climbs.completed {
            println!("{}", climb_line(climb));
        }
    }

    if view.filter.is_active() {
        println!();
        println!(
            "{}",
            format!("Showing {} of {} climbs", view.climbs.len(), view.total).dimmed()
        );
    }
}

fn climb_line(climb: &Climb) -> String {
    let id: String = climb.id.to_string().chars().take(ID_WIDTH).collect();
    let marker = if climb.completed { SENT_MARKER } else { " " };
    let grade = format!("{:<width$}", climb.grade, width = GRADE_WIDTH);
    let stamp = climb.completed_at.unwrap_or(climb.created_at);

    // "  ✓ 1a2b3c4d V4       " precedes the title.
    let fixed_width = 2 + marker.width() + 1 + ID_WIDTH + 1 + GRADE_WIDTH + 1 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let title = format!("{} · {} · {}", climb.name, climb.discipline, climb.location);
    let title_display = truncate_to_width(&title, available);
    let padding = available.saturating_sub(title_display.width());

    format!(
        "  {} {} {} {}{}{}",
        marker.green(),
        id.yellow(),
        grade.cyan(),
        title_display,
        " ".repeat(padding),
        format_time_ago(stamp).dimmed()
    )
}

pub(super) fn print_climb_detail(climb: &Climb, read_only: bool) {
    println!(
        "{} {} {}",
        climb.name.bold(),
        climb.grade.cyan(),
        format!("({})", climb.discipline).dimmed()
    );
    println!("{}", climb.id.to_string().dimmed());

    let place: Vec<&str> = [
        Some(climb.location.as_str()),
        climb.city.as_deref(),
        climb.region.as_deref(),
        climb.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    println!("{}", place.join(", "));

    match climb.completed_at {
        Some(at) if climb.completed => {
            println!("{}", format!("Sent on {}", at.format("%Y-%m-%d")).green())
        }
        _ => println!("{}", "Project".yellow()),
    }

    println!();
    if climb.attempts.is_empty() {
        println!("{}", "No attempts logged.".dimmed());
    } else {
        println!("{}", "Attempts".bold());
        for attempt in climb.attempts_for_display() {
            let label = format!("{:<5}", format!("#{}", attempt.sequence_number));
            let send = if attempt.is_completion() {
                format!(" {}", "sent".green())
            } else {
                String::new()
            };
            println!(
                "  {} {}{}  {}",
                label.yellow(),
                attempt.date.format("%Y-%m-%d"),
                send,
                attempt.notes
            );
        }
    }

    if !climb.links.is_empty() {
        println!();
        println!("{}", "Links".bold());
        for link in &climb.links {
            println!("  {} {}", link.name, link.url.underline().dimmed());
        }
    }

    if read_only {
        println!();
        println!("{}", "Read-only: use `sendlog copy` to add it to your list.".dimmed());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate_to_width("Roof", 10), "Roof");
    }

    #[test]
    fn long_text_ends_with_ellipsis_within_width() {
        let out = truncate_to_width("Midnight Lightning", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("岩岩岩岩岩岩", 6);
        assert!(out.width() <= 6);
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let out = format_time_ago(Utc::now());
        assert_eq!(out.width(), TIME_WIDTH);
    }
}
