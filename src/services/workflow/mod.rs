//! Event edit workflow.
//!
//! Drives the event dialog: viewing an event, editing it, or creating a new
//! one through the three-step wizard. Drafts are validated before anything
//! reaches the store; a failed save keeps the dialog open with the error.

use chrono::NaiveDate;

use crate::error::{CalendarError, Result};
use crate::models::category::CategoryRegistry;
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::event::EventStore;

mod draft;

pub use draft::{EventDraft, WizardStep};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Closed,
    Viewing(Event),
    Editing {
        original: Event,
        draft: EventDraft,
        error: Option<CalendarError>,
    },
    Creating {
        draft: EventDraft,
        step: WizardStep,
        error: Option<CalendarError>,
    },
}

impl EditState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Viewing(_) => "viewing",
            Self::Editing { .. } => "editing",
            Self::Creating { .. } => "creating",
        }
    }
}

pub struct EventEditWorkflow {
    registry: CategoryRegistry,
    state: EditState,
}

impl EventEditWorkflow {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self {
            registry,
            state: EditState::Closed,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditState::Closed)
    }

    /// Error from the most recent failed save, if the dialog is still open.
    pub fn last_error(&self) -> Option<&CalendarError> {
        match &self.state {
            EditState::Editing { error, .. } | EditState::Creating { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Begin creating an event from `draft`.
    pub fn start_create(&mut self, draft: EventDraft) -> Result<()> {
        self.ensure_not_drafting("start creating")?;
        self.state = EditState::Creating {
            draft,
            step: WizardStep::Details,
            error: None,
        };
        Ok(())
    }

    /// Begin creating an event on `date` using the configured default start
    /// time, duration and the first registered category.
    pub fn start_create_on(&mut self, date: NaiveDate, settings: &Settings) -> Result<()> {
        let category = self.registry.keys().next().unwrap_or_default().to_string();
        let start = date.and_time(settings.default_start_time());
        self.start_create(EventDraft::new_at(start, settings.default_duration(), category))
    }

    /// Show a stored event.
    pub fn open(&mut self, store: &EventStore, id: i64) -> Result<()> {
        self.ensure_not_drafting("open an event")?;
        let event = store.get(id)?.clone();
        self.state = EditState::Viewing(event);
        Ok(())
    }

    /// Switch the viewed event into editing.
    pub fn start_edit(&mut self) -> Result<()> {
        match &self.state {
            EditState::Viewing(event) => {
                let original = event.clone();
                self.state = EditState::Editing {
                    draft: EventDraft::from_event(&original),
                    original,
                    error: None,
                };
                Ok(())
            }
            other => Err(invalid("edit", other)),
        }
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.state {
            EditState::Editing { draft, .. } | EditState::Creating { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut EventDraft> {
        match &mut self.state {
            EditState::Editing { draft, .. } | EditState::Creating { draft, .. } => Ok(draft),
            other => Err(invalid("change the draft", other)),
        }
    }

    pub fn step(&self) -> Option<WizardStep> {
        match &self.state {
            EditState::Creating { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Advance the create wizard; stays on the last step.
    pub fn next_step(&mut self) -> Result<WizardStep> {
        match &mut self.state {
            EditState::Creating { step, .. } => {
                *step = step.next().unwrap_or(*step);
                Ok(*step)
            }
            other => Err(invalid("change step", other)),
        }
    }

    pub fn previous_step(&mut self) -> Result<WizardStep> {
        match &mut self.state {
            EditState::Creating { step, .. } => {
                *step = step.previous().unwrap_or(*step);
                Ok(*step)
            }
            other => Err(invalid("change step", other)),
        }
    }

    /// Validate the draft and write it to the store.
    ///
    /// Editing returns to viewing the updated event; creating closes the
    /// dialog. On failure the state is kept and the error recorded.
    pub fn save(&mut self, store: &mut EventStore) -> Result<Event> {
        let (draft, creating) = match &self.state {
            EditState::Editing { draft, .. } => (draft, false),
            EditState::Creating { draft, .. } => (draft, true),
            other => return Err(invalid("save", other)),
        };

        let outcome = draft.validate(&self.registry).and_then(|()| {
            let event = draft.to_event();
            if creating {
                store.add(event)
            } else {
                store.update(event)
            }
        });

        match outcome {
            Ok(saved) => {
                log::info!(
                    "Saved event {:?} '{}' on {}",
                    saved.id,
                    saved.title,
                    saved.date()
                );
                self.state = if creating {
                    EditState::Closed
                } else {
                    EditState::Viewing(saved.clone())
                };
                Ok(saved)
            }
            Err(err) => {
                log::warn!("Rejected save: {}", err);
                if let EditState::Editing { error, .. } | EditState::Creating { error, .. } =
                    &mut self.state
                {
                    *error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    /// Abandon the draft. Editing falls back to viewing the unchanged event.
    pub fn cancel(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            EditState::Editing { original, .. } => {
                self.state = EditState::Viewing(original);
                Ok(())
            }
            EditState::Creating { .. } => Ok(()),
            other => {
                let err = invalid("cancel", &other);
                self.state = other;
                Err(err)
            }
        }
    }

    /// Remove the open event from the store and close the dialog.
    pub fn delete(&mut self, store: &mut EventStore) -> Result<Event> {
        let id = match &self.state {
            EditState::Viewing(event) | EditState::Editing { original: event, .. } => event.id,
            other => return Err(invalid("delete", other)),
        }
        .ok_or_else(|| CalendarError::InvalidEvent("Event has no id".to_string()))?;

        let removed = store.remove(id)?;
        log::info!("Deleted event {} '{}'", id, removed.title);
        self.state = EditState::Closed;
        Ok(removed)
    }

    /// Close the dialog from any state, discarding unsaved changes.
    pub fn close(&mut self) {
        self.state = EditState::Closed;
    }

    fn ensure_not_drafting(&self, action: &'static str) -> Result<()> {
        match &self.state {
            EditState::Closed | EditState::Viewing(_) => Ok(()),
            other => Err(invalid(action, other)),
        }
    }
}

fn invalid(action: &'static str, state: &EditState) -> CalendarError {
    CalendarError::InvalidTransition {
        action,
        state: state.name(),
    }
}
