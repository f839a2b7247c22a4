//! Dashboard session state
//!
//! Holds the roster together with the view state around it: which tab is
//! showing and whether the add/edit modal is open. The modal is a single enum
//! so "adding" and "editing" can never both be true, and an edit always knows
//! which train it targets.

use crate::config::RosterConfig;
use crate::error::FormError;
use crate::form::TrainForm;
use crate::roster::Roster;
use crate::seed::seed_roster;
use crate::summary::FleetSummary;
use crate::types::{TrainId, TrainRecord};
use serde::{Deserialize, Serialize};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Status counts plus cards
    #[default]
    Overview,
    /// Timetable view
    Schedule,
    /// Cards with add/edit/delete controls
    Manage,
}

impl Tab {
    /// Heading above the train list
    #[must_use]
    pub fn list_title(self) -> &'static str {
        match self {
            Tab::Schedule => "Train Schedule",
            Tab::Overview | Tab::Manage => "Active Trains",
        }
    }

    /// Whether add/edit/delete controls are available
    #[inline]
    #[must_use]
    pub fn allows_editing(self) -> bool {
        self == Tab::Manage
    }
}

/// Add/edit modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal shown
    #[default]
    Closed,
    /// Adding a new train
    Adding,
    /// Editing the given train
    Editing(TrainId),
}

/// One dashboard session
#[derive(Debug, Default)]
pub struct Dashboard {
    roster: Roster,
    tab: Tab,
    modal: Modal,
}

impl Dashboard {
    /// Dashboard over an existing roster
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            tab: Tab::default(),
            modal: Modal::Closed,
        }
    }

    /// Dashboard built from configuration, seeded with the demo trains when
    /// [`RosterConfig::seed_demo_data`] is set
    #[must_use]
    pub fn from_config(config: RosterConfig) -> Self {
        let roster = if config.seed_demo_data {
            seed_roster(config)
        } else {
            Roster::with_config(config)
        };
        Self::new(roster)
    }

    /// Roster, read-only
    #[inline]
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Active tab
    #[inline]
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Modal state
    #[inline]
    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// Switch tab
    pub fn set_tab(&mut self, tab: Tab) {
        tracing::trace!(?tab, "Switching tab");
        self.tab = tab;
    }

    /// Select a train for the detail panel
    pub fn select(&mut self, id: Option<TrainId>) -> bool {
        self.roster.select(id)
    }

    /// Overview counts
    #[must_use]
    pub fn summary(&self) -> FleetSummary {
        self.roster.summary()
    }

    /// Open the add modal; only on the manage tab
    pub fn open_add(&mut self) -> bool {
        if !self.tab.allows_editing() {
            return false;
        }
        self.modal = Modal::Adding;
        true
    }

    /// Open the edit modal for the selected train; only on the manage tab
    pub fn open_edit(&mut self) -> bool {
        match (self.tab.allows_editing(), self.roster.selected_id()) {
            (true, Some(id)) => {
                self.modal = Modal::Editing(id);
                true
            }
            _ => false,
        }
    }

    /// Close the modal without saving
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Form pre-filled for the open modal
    #[must_use]
    pub fn form(&self) -> Option<TrainForm> {
        match self.modal {
            Modal::Closed => None,
            Modal::Adding => Some(TrainForm::blank(self.roster.config().default_capacity)),
            Modal::Editing(id) => self.roster.get(id).map(TrainForm::from_record),
        }
    }

    /// Submit the open modal's form
    ///
    /// Adding appends a new train; editing replaces the target train and
    /// selects it. The modal closes on success and stays open on a validation
    /// error. Returns the affected id, or `None` when no modal was open or the
    /// edited train no longer exists.
    ///
    /// # Errors
    /// Returns the form's validation error; the roster is unchanged.
    pub fn submit(&mut self, form: &TrainForm) -> Result<Option<TrainId>, FormError> {
        let affected = match self.modal {
            Modal::Closed => return Ok(None),
            Modal::Adding => Some(self.roster.add(form.to_draft()?)),
            Modal::Editing(id) => {
                let record = form.to_record(id)?;
                if self.roster.replace(record) {
                    self.roster.select(Some(id));
                    Some(id)
                } else {
                    None
                }
            }
        };
        self.modal = Modal::Closed;
        Ok(affected)
    }

    /// Delete the selected train; only on the manage tab
    pub fn delete_selected(&mut self) -> Option<TrainRecord> {
        if !self.tab.allows_editing() {
            return None;
        }
        let id = self.roster.selected_id()?;
        let removed = self.roster.remove(id);
        if self.modal == Modal::Editing(id) {
            self.modal = Modal::Closed;
        }
        removed
    }
}
