//! One-shot dispatch for scripting and debugging

use super::SessionData;
use crate::dataset::Iso;
use crate::dispatch::{InputEvent, ViewUpdate};
use crate::state::{Metric, ViewState};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub state: ViewState,
    pub updates: Vec<ViewUpdate>,
    /// Activity events, formatted as the terminal log shows them.
    pub events: Vec<String>,
}

/// Applies the metric change (if any) and then the selection, collecting every update.
pub fn run_inspect(mut session: SessionData, iso: Iso, metric: Option<Metric>) -> InspectReport {
    let mut inputs = Vec::with_capacity(2);
    if let Some(metric) = metric {
        inputs.push(InputEvent::MetricChanged { metric });
    }
    inputs.push(InputEvent::MapClicked { iso });

    let mut updates = Vec::new();
    let mut events = Vec::new();
    for input in inputs {
        let outcome = session.dispatcher.dispatch(input);
        updates.extend(outcome.updates);
        events.extend(outcome.events.iter().map(|e| e.to_string()));
    }
    InspectReport {
        state: session.dispatcher.state().clone(),
        updates,
        events,
    }
}
