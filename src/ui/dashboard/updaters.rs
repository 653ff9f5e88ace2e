//! Dashboard state update logic

use super::state::DashboardState;

use crate::dataset::Iso;
use crate::dispatch::DispatchOutcome;
use crate::state::ViewState;

impl DashboardState {
    /// Move queued events into the activity log.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Takes the views re-rendered by one dispatch. Views not in `outcome` keep their
    /// previous artifact.
    pub fn apply_outcome(&mut self, outcome: DispatchOutcome, state: &ViewState) {
        for update in outcome.updates {
            self.set_view(update.view, update.artifact);
        }
        for event in outcome.events {
            self.add_event(event);
        }
        self.view_state = state.clone();
        if let Some(row) = self.selected_row() {
            self.cursor = row;
        }
    }

    /// Moves the cursor by `delta` rows, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Country under the cursor.
    pub fn cursor_iso(&self) -> Option<Iso> {
        self.rows.get(self.cursor).map(|row| row.iso.clone())
    }

    /// Index of the selected country in the list, if it has a row.
    pub fn selected_row(&self) -> Option<usize> {
        let selection = self.view_state.selection()?;
        self.rows.iter().position(|row| &row.iso == selection)
    }
}
