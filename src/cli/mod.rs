//! Command handlers for the `agri-calendar` binary.
//!
//! Each handler builds what it needs from the loaded [`Context`] and hands
//! the result to `output` for text or JSON rendering.

use std::fs;
use std::path::Path;

use agri_calendar::models::category::CategoryRegistry;
use agri_calendar::models::event::Event;
use agri_calendar::models::filter::FilterSelection;
use agri_calendar::models::settings::Settings;
use agri_calendar::models::ui::ViewType;
use agri_calendar::services::clock::{Clock, FixedClock, SystemClock};
use agri_calendar::services::event::recurrence::expand_days;
use agri_calendar::services::event::EventStore;
use agri_calendar::services::filter;
use agri_calendar::services::placement::place_events;
use agri_calendar::services::sample::{sample_store, sample_today};
use agri_calendar::services::settings::SettingsService;
use agri_calendar::services::view::ViewState;
use agri_calendar::utils::date::{end_of_day, start_of_day};
use anyhow::{anyhow, Context as _, Result};
use chrono::NaiveDate;

mod output;

/// Everything a command needs: settings, categories, events and a clock.
pub struct Context {
    pub settings: Settings,
    pub registry: CategoryRegistry,
    pub store: EventStore,
    pub clock: Box<dyn Clock>,
}

impl Context {
    pub fn load(config: Option<&Path>, events: Option<&Path>, today: Option<NaiveDate>) -> Result<Self> {
        let settings = match config {
            Some(path) => SettingsService::new(path).load()?,
            None => match SettingsService::default_path() {
                Some(path) => SettingsService::new(path).load_or_default()?,
                None => Settings::default(),
            },
        };

        let registry = settings
            .category_registry()
            .map_err(|e| anyhow!("Invalid category configuration: {}", e))?;

        let store = match events {
            Some(path) => load_events(path)?,
            None => {
                log::info!("No events file given, using the sample schedule");
                sample_store()?
            }
        };

        for event in store.all() {
            if let Err(err) = registry.require(&event.category) {
                log::warn!("Event {:?} '{}': {}", event.id, event.title, err);
            }
        }

        // The sample schedule is pinned to December 2024.
        let clock: Box<dyn Clock> = match (today, events) {
            (Some(date), _) => Box::new(FixedClock::on(date)),
            (None, None) => Box::new(FixedClock::on(sample_today())),
            (None, Some(_)) => Box::new(SystemClock),
        };

        Ok(Self {
            settings,
            registry,
            store,
            clock,
        })
    }
}

fn load_events(path: &Path) -> Result<EventStore> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    let store = EventStore::from_events(events)
        .with_context(|| format!("Invalid event in {}", path.display()))?;

    log::info!("Loaded {} events from {}", store.len(), path.display());
    Ok(store)
}

pub fn run_grid(ctx: &Context, view: Option<ViewType>, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let state = ViewState::new(
        view.unwrap_or(ctx.settings.default_view),
        date.unwrap_or_else(|| ctx.clock.today()),
        ctx.settings.week_start(),
    );

    let cells = place_events(&ctx.store, &state, &FilterSelection::default());
    output::print_grid(
        &state,
        &cells,
        ctx.settings.month_cell_event_limit,
        ctx.clock.today(),
        json,
    )
}

pub fn run_day(ctx: &Context, date: NaiveDate, json: bool) -> Result<()> {
    let occurrences = ctx.store.expand_between(start_of_day(date), end_of_day(date));
    output::print_occurrences(&occurrences, &date.format("%A, %B %-d, %Y").to_string(), json)
}

pub fn run_expand(ctx: &Context, id: i64, from: NaiveDate, to: NaiveDate, json: bool) -> Result<()> {
    let event = ctx.store.get(id)?;
    let occurrences: Vec<_> = expand_days(event, from, to).collect();
    let heading = format!("{} ({})", event.title, event.recurrence.describe());
    output::print_occurrences(&occurrences, &heading, json)
}

pub fn run_upcoming(ctx: &Context, limit: Option<usize>, json: bool) -> Result<()> {
    let limit = limit.unwrap_or(ctx.settings.upcoming_limit);
    let upcoming = ctx.store.upcoming(ctx.clock.now(), limit);
    output::print_upcoming(&upcoming, ctx.clock.today(), json)
}

pub fn run_filter(
    ctx: &Context,
    categories: Vec<String>,
    members: Vec<String>,
    locations: Vec<String>,
    json: bool,
) -> Result<()> {
    for key in &categories {
        ctx.registry.require(key)?;
    }

    let selection = FilterSelection::new()
        .with_categories(categories)
        .with_members(members)
        .with_locations(locations);
    let events = filter::apply(ctx.store.all(), &selection);
    output::print_events(&events, &ctx.registry, json)
}

pub fn run_categories(ctx: &Context, json: bool) -> Result<()> {
    let categories: Vec<_> = ctx.registry.iter().collect();
    output::print_categories(&categories, json)
}
