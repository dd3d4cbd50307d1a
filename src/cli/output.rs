//! Output formatting for CLI commands.
//!
//! Every printer takes a `json` flag and renders either pretty JSON or a
//! plain text listing.

use agri_calendar::models::category::{Category, CategoryRegistry};
use agri_calendar::models::event::Event;
use agri_calendar::models::ui::{GridCell, ViewType};
use agri_calendar::services::event::recurrence::Occurrence;
use agri_calendar::services::placement::PlacedCell;
use agri_calendar::services::view::ViewState;
use agri_calendar::utils::date::day_label;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Serialize)]
struct GridOutput<'a> {
    view: ViewType,
    period: String,
    reference_date: NaiveDate,
    selected_date: NaiveDate,
    cells: &'a [PlacedCell<'a>],
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn time_range(occurrence: &Occurrence<'_>) -> String {
    format!(
        "{}-{}",
        occurrence.start.format("%H:%M"),
        occurrence.end.format("%H:%M")
    )
}

fn describe(occurrence: &Occurrence<'_>) -> String {
    match &occurrence.event.location {
        Some(location) => format!("{} @ {}", occurrence.event.title, location),
        None => occurrence.event.title.clone(),
    }
}

/// Print a placed grid.
pub fn print_grid(
    state: &ViewState,
    cells: &[PlacedCell<'_>],
    limit: usize,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&GridOutput {
            view: state.view(),
            period: state.period_label(),
            reference_date: state.reference_date(),
            selected_date: state.selected_date(),
            cells,
        });
    }

    println!("{}\n", state.period_label());

    match state.view() {
        ViewType::Month | ViewType::Week => {
            let header: Vec<String> = cells
                .iter()
                .take(7)
                .map(|placed| placed.cell.date().format("%a").to_string())
                .collect();
            println!(" {}", header.join("  "));

            for week in cells.chunks(7) {
                let row: Vec<String> = week.iter().map(|placed| day_marker(placed, today)).collect();
                println!("{}", row.join(" "));
            }
            println!();

            for placed in cells.iter().filter(|placed| !placed.is_empty()) {
                println!("{}", placed.cell.date().format("%a %b %-d"));
                for occurrence in placed.visible(limit) {
                    println!("  {}  {}", time_range(occurrence), describe(occurrence));
                }
                if placed.overflow(limit) > 0 {
                    println!("  +{} more", placed.overflow(limit));
                }
            }
        }
        ViewType::Day => {
            for placed in cells {
                let Some(hour) = placed.cell.hour() else {
                    continue;
                };
                if placed.is_empty() {
                    println!("{:02}:00", hour);
                }
                for occurrence in &placed.occurrences {
                    println!("{:02}:00  {}  {}", hour, time_range(occurrence), describe(occurrence));
                }
            }
        }
    }

    Ok(())
}

/// Day number padded to four columns: `*` marks today, `+` days with
/// events, and dates outside the focal month are dimmed to `.`.
fn day_marker(placed: &PlacedCell<'_>, today: NaiveDate) -> String {
    let date = placed.cell.date();
    let marker = if date == today {
        '*'
    } else if !placed.is_empty() {
        '+'
    } else {
        ' '
    };

    match placed.cell {
        GridCell::Day { in_range: false, .. } => format!("  .{}", marker),
        _ => format!("{:>3}{}", date.day(), marker),
    }
}

/// Print a list of occurrences under a heading.
pub fn print_occurrences(occurrences: &[Occurrence<'_>], heading: &str, json: bool) -> Result<()> {
    if json {
        return print_json(occurrences);
    }

    println!("{}", heading);
    if occurrences.is_empty() {
        println!("No occurrences.");
    }
    for occurrence in occurrences {
        println!(
            "  {}  {}  {}",
            occurrence.start.format("%a %b %-d"),
            time_range(occurrence),
            describe(occurrence)
        );
    }
    Ok(())
}

/// Print the upcoming events panel.
pub fn print_upcoming(upcoming: &[Occurrence<'_>], today: NaiveDate, json: bool) -> Result<()> {
    if json {
        return print_json(upcoming);
    }

    if upcoming.is_empty() {
        println!("No upcoming events.");
    }
    for occurrence in upcoming {
        println!(
            "{:<9} {}  {}",
            day_label(occurrence.date(), today),
            occurrence.start.format("%H:%M"),
            describe(occurrence)
        );
    }
    Ok(())
}

/// Print filtered events with their category labels.
pub fn print_events(events: &[&Event], registry: &CategoryRegistry, json: bool) -> Result<()> {
    if json {
        return print_json(events);
    }

    println!("{} event(s)", events.len());
    for event in events {
        let category = registry
            .get(&event.category)
            .map(|c| c.label.as_str())
            .unwrap_or(event.category.as_str());
        println!(
            "#{:<3} {}  [{}] {} ({})",
            event.id.unwrap_or_default(),
            event.start.format("%Y-%m-%d %H:%M"),
            category,
            event.title,
            event.recurrence.describe()
        );
        if !event.attendees.is_empty() {
            println!("      with {}", event.attendees.join(", "));
        }
    }
    Ok(())
}

/// Print the category registry.
pub fn print_categories(categories: &[&Category], json: bool) -> Result<()> {
    if json {
        return print_json(categories);
    }

    for category in categories {
        println!(
            "{:<24} {:<24} {}",
            category.key, category.label, category.color
        );
    }
    Ok(())
}
