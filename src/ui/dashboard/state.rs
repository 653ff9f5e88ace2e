//! Dashboard state management
//!
//! Holds the latest artifact of every view plus the terminal-only bits (cursor, activity log).

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dataset::Iso;
use crate::dispatch::Dispatcher;
use crate::events::Event;
use crate::layout::TableRow;
use crate::render::{Artifact, ViewId};
use crate::state::ViewState;
use crate::ui::app::UIConfig;

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

static EMPTY: Artifact = Artifact::Empty;

#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Rows of the country list, in totals order.
    pub rows: Vec<TableRow>,
    /// Standalone MPI per country from mpi.csv, which may differ from the totals column.
    mpi_table: HashMap<Iso, Option<f64>>,
    /// Row the cursor is on. Moving it does not change the selection; Enter does.
    pub cursor: usize,
    /// Mirror of the dispatcher's state as of the last applied outcome.
    pub view_state: ViewState,
    /// Latest artifact per view.
    views: HashMap<ViewId, Artifact>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Builds the first frame from a full render of every view.
    pub fn new(dispatcher: &Dispatcher, start_time: Instant, ui_config: &UIConfig) -> Self {
        let dataset = dispatcher.dataset();
        let cursor = dispatcher
            .state()
            .selection()
            .and_then(|iso| dataset.row_index(iso))
            .unwrap_or(0);
        let mut state = Self {
            start_time,
            rows: dataset.countries().iter().map(TableRow::from).collect(),
            mpi_table: dataset
                .countries()
                .iter()
                .filter_map(|c| dataset.mpi(&c.iso).map(|r| (c.iso.clone(), r.mpi)))
                .collect(),
            cursor,
            view_state: dispatcher.state().clone(),
            views: HashMap::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
        };
        for update in dispatcher.initial_render().updates {
            state.views.insert(update.view, update.artifact);
        }
        state
    }

    /// Latest artifact for `view`; views never rendered read as empty.
    pub fn view(&self, view: ViewId) -> &Artifact {
        self.views.get(&view).unwrap_or(&EMPTY)
    }

    /// Standalone MPI of the selected country. `None` when there is no selection or no
    /// mpi.csv row; `Some(None)` when the row has no value.
    pub fn selected_mpi(&self) -> Option<Option<f64>> {
        self.view_state
            .selection()
            .and_then(|iso| self.mpi_table.get(iso))
            .copied()
    }

    pub(super) fn set_view(&mut self, view: ViewId, artifact: Artifact) {
        self.views.insert(view, artifact);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
