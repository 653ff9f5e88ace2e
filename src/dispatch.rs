//! Reactive dispatcher
//!
//! Maps each kind of input event to the views that depend on it. Applying an event updates
//! the [`ViewState`] exactly once and then re-runs every subscribed renderer against the
//! new state, in subscription order. Events are processed one at a time (`&mut self`).

use crate::dataset::{Dataset, Iso};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::render::{Artifact, AssetStore, RenderContext, Renderer, ViewId, renderer_for};
use crate::state::{Metric, ViewState};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The upstream value a view depends on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum InputKind {
    /// The metric dropdown.
    Metric,
    /// The selected country (map click).
    Selection,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    MapClicked { iso: Iso },
    MetricChanged { metric: Metric },
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::MapClicked { .. } => InputKind::Selection,
            InputEvent::MetricChanged { .. } => InputKind::Metric,
        }
    }
}

/// A freshly rendered artifact for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewUpdate {
    pub view: ViewId,
    pub artifact: Artifact,
}

/// Result of one dispatch cycle.
#[derive(Debug, Clone, Default)]
pub struct DispatchOutcome {
    pub updates: Vec<ViewUpdate>,
    pub events: Vec<Event>,
}

#[cfg(test)]
impl DispatchOutcome {
    pub fn update_for(&self, view: ViewId) -> Option<&Artifact> {
        self.updates
            .iter()
            .find(|u| u.view == view)
            .map(|u| &u.artifact)
    }
}

#[derive(Debug, Clone, Copy)]
struct Subscriber {
    view: ViewId,
    render: Renderer,
}

/// Input kind → renderers, in the order they run.
#[derive(Debug, Clone)]
pub struct Subscriptions {
    table: HashMap<InputKind, Vec<Subscriber>>,
}

impl Subscriptions {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The dashboard's dependency graph: the dropdown drives the map, the map click drives
    /// everything else.
    pub fn standard() -> Self {
        let mut subs = Self::empty();
        subs.subscribe(InputKind::Metric, ViewId::Choropleth);
        for view in [
            ViewId::Scatter,
            ViewId::Table,
            ViewId::SubplotHeader,
            ViewId::Link,
            ViewId::Image,
            ViewId::Wordcloud,
            ViewId::GenderBreakdown,
            ViewId::SectorBreakdown,
        ] {
            subs.subscribe(InputKind::Selection, view);
        }
        subs
    }

    pub fn subscribe(&mut self, kind: InputKind, view: ViewId) {
        self.subscribe_with(kind, view, renderer_for(view));
    }

    /// Registers a custom renderer for `view`.
    pub fn subscribe_with(&mut self, kind: InputKind, view: ViewId, render: Renderer) {
        self.table
            .entry(kind)
            .or_default()
            .push(Subscriber { view, render });
    }

    pub fn subscribers(&self, kind: InputKind) -> Vec<ViewId> {
        self.table
            .get(&kind)
            .map(|subs| subs.iter().map(|s| s.view).collect())
            .unwrap_or_default()
    }

    fn renderers(&self, kind: InputKind) -> &[Subscriber] {
        self.table.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Owns the state and applies input events to it.
#[derive(Debug)]
pub struct Dispatcher {
    dataset: Dataset,
    assets: AssetStore,
    link_template: String,
    state: ViewState,
    subscriptions: Subscriptions,
}

impl Dispatcher {
    pub fn new(
        dataset: Dataset,
        assets: AssetStore,
        link_template: impl Into<String>,
        initial: ViewState,
    ) -> Self {
        Self::with_subscriptions(
            dataset,
            assets,
            link_template,
            initial,
            Subscriptions::standard(),
        )
    }

    pub fn with_subscriptions(
        dataset: Dataset,
        assets: AssetStore,
        link_template: impl Into<String>,
        initial: ViewState,
        subscriptions: Subscriptions,
    ) -> Self {
        Self {
            dataset,
            assets,
            link_template: link_template.into(),
            state: initial,
            subscriptions,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn subscribers(&self, kind: InputKind) -> Vec<ViewId> {
        self.subscriptions.subscribers(kind)
    }

    /// Applies `event` and re-renders its dependents.
    pub fn dispatch(&mut self, event: InputEvent) -> DispatchOutcome {
        let kind = event.kind();
        let mut events = Vec::with_capacity(1);
        match event {
            InputEvent::MapClicked { iso } => {
                events.push(self.describe_selection(&iso));
                self.state.select(iso);
            }
            InputEvent::MetricChanged { metric } => {
                events.push(Event::state_change(format!("Metric switched to {}", metric)));
                self.state.set_metric(metric);
            }
        }
        debug!("Dispatching {} to {:?}", kind, self.subscribers(kind));

        let mut outcome = self.run(&[kind]);
        events.append(&mut outcome.events);
        outcome.events = events;
        outcome
    }

    /// Renders every subscribed view once, for the first paint.
    pub fn initial_render(&self) -> DispatchOutcome {
        self.run(&[InputKind::Metric, InputKind::Selection])
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            dataset: &self.dataset,
            assets: &self.assets,
            state: &self.state,
            link_template: &self.link_template,
        }
    }

    fn run(&self, kinds: &[InputKind]) -> DispatchOutcome {
        let ctx = self.context();
        let mut outcome = DispatchOutcome::default();
        for kind in kinds {
            for sub in self.subscriptions.renderers(*kind) {
                let artifact = (sub.render)(&ctx);
                if artifact.is_degraded() {
                    outcome.events.push(self.degraded_event(sub.view));
                }
                outcome.updates.push(ViewUpdate {
                    view: sub.view,
                    artifact,
                });
            }
        }
        outcome
    }

    fn describe_selection(&self, iso: &Iso) -> Event {
        match self.dataset.country(iso) {
            Some(record) => Event::state_change(format!("Selected {} ({})", record.country, iso)),
            None => Event::dispatcher_with_level(
                format!("Selected {}, which has no totals row", iso),
                EventType::Warning,
                LogLevel::Warn,
            ),
        }
    }

    fn degraded_event(&self, view: ViewId) -> Event {
        let subject = self
            .state
            .selection()
            .map(|iso| iso.to_string())
            .unwrap_or_else(|| "the current selection".to_string());
        Event::view_with_level(
            view,
            format!("{} has no data for {}, showing placeholder", view, subject),
            EventType::Warning,
            LogLevel::Warn,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::DEFAULT_LINK_TEMPLATE;
    use crate::dataset::fixtures::{self, iso};
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn dispatcher(selection: &str) -> Dispatcher {
        Dispatcher::new(
            fixtures::sample(),
            AssetStore::new("/nonexistent-assets"),
            DEFAULT_LINK_TEMPLATE,
            ViewState::new(Some(iso(selection)), Metric::Mpi),
        )
    }

    fn click(d: &mut Dispatcher, code: &str) -> DispatchOutcome {
        d.dispatch(InputEvent::MapClicked { iso: iso(code) })
    }

    #[test]
    fn test_standard_graph_covers_every_view_once() {
        let subs = Subscriptions::standard();
        assert_eq!(subs.subscribers(InputKind::Metric), vec![ViewId::Choropleth]);

        let mut seen: Vec<ViewId> = subs.subscribers(InputKind::Metric);
        seen.extend(subs.subscribers(InputKind::Selection));
        let unique: HashSet<ViewId> = seen.iter().copied().collect();
        assert_eq!(unique.len(), seen.len());
        assert_eq!(unique, ViewId::iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_map_click_updates_selection_then_views() {
        let mut d = dispatcher("ALB");
        let outcome = click(&mut d, "MLI");

        assert_eq!(d.state().selection(), Some(&iso("MLI")));
        assert_eq!(
            outcome.updates.iter().map(|u| u.view).collect::<Vec<_>>(),
            d.subscribers(InputKind::Selection)
        );
        assert!(outcome.update_for(ViewId::Choropleth).is_none());
        assert_eq!(
            outcome.update_for(ViewId::SubplotHeader),
            Some(&Artifact::Text {
                text: "Mali".to_string()
            })
        );
        assert_eq!(outcome.events[0].msg, "Selected Mali (MLI)");
    }

    #[test]
    fn test_metric_change_only_touches_the_map() {
        let mut d = dispatcher("MLI");
        let before = d.initial_render();
        let outcome = d.dispatch(InputEvent::MetricChanged {
            metric: Metric::Gii,
        });

        assert_eq!(outcome.updates.len(), 1);
        assert_eq!(outcome.updates[0].view, ViewId::Choropleth);
        assert_ne!(
            Some(&outcome.updates[0].artifact),
            before.update_for(ViewId::Choropleth)
        );
        assert_eq!(d.state().selection(), Some(&iso("MLI")));
        assert_eq!(d.state().metric(), Metric::Gii);

        // Every other view renders exactly as before.
        let after = d.initial_render();
        for update in before.updates.iter().filter(|u| u.view != ViewId::Choropleth) {
            assert_eq!(after.update_for(update.view), Some(&update.artifact));
        }
    }

    #[test]
    fn test_selected_views_agree_on_country_for_every_iso() {
        let countries: Vec<_> = fixtures::sample().countries().to_vec();
        let mut d = dispatcher("ALB");
        for record in countries {
            let outcome = click(&mut d, record.iso.as_str());
            let name = record.country.as_str();

            match outcome.update_for(ViewId::Scatter) {
                Some(Artifact::Figure(fig)) => {
                    assert!(fig.title().unwrap().ends_with(&format!("for {}", name)));
                }
                other => panic!("unexpected scatter {other:?}"),
            }
            match outcome.update_for(ViewId::Table) {
                Some(Artifact::RowStyles { styles }) => {
                    let row = styles[0].condition.row_index;
                    assert_eq!(d.dataset().countries()[row].country, name);
                }
                other => panic!("unexpected table {other:?}"),
            }
            assert_eq!(
                outcome.update_for(ViewId::SubplotHeader),
                Some(&Artifact::Text {
                    text: name.to_string()
                })
            );
            match outcome.update_for(ViewId::Link) {
                Some(Artifact::Link { text, href }) => {
                    assert!(text.contains(name));
                    assert!(href.ends_with(record.iso.prefix()));
                }
                other => panic!("unexpected link {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_rows_degrade_with_warnings() {
        let mut d = dispatcher("ALB");
        let outcome = click(&mut d, "KEN");

        match outcome.update_for(ViewId::GenderBreakdown) {
            Some(Artifact::Figure(fig)) => assert!(fig.is_placeholder()),
            other => panic!("unexpected gender chart {other:?}"),
        }
        // Gender row plus both images (no assets directory in tests).
        let warnings: Vec<_> = outcome
            .events
            .iter()
            .filter(|e| e.event_type == EventType::Warning)
            .collect();
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_unknown_iso_never_panics() {
        let mut d = dispatcher("ALB");
        let outcome = click(&mut d, "ZZZ");
        assert_eq!(outcome.updates.len(), 8);
        assert_eq!(outcome.events[0].log_level, LogLevel::Warn);
        assert_eq!(outcome.update_for(ViewId::SubplotHeader), Some(&Artifact::Empty));
    }

    #[test]
    fn test_initial_render_is_deterministic() {
        let a = dispatcher("ALB").initial_render();
        let b = dispatcher("ALB").initial_render();
        assert_eq!(a.updates, b.updates);
        assert_eq!(a.updates.len(), ViewId::iter().count());
        assert_eq!(a.updates[0].view, ViewId::Choropleth);
    }

    #[test]
    fn test_custom_subscription_table() {
        fn fixed(_: &RenderContext<'_>) -> Artifact {
            Artifact::Text {
                text: "fixed".to_string(),
            }
        }
        let mut subs = Subscriptions::empty();
        subs.subscribe_with(InputKind::Selection, ViewId::SubplotHeader, fixed);

        let mut d = Dispatcher::with_subscriptions(
            fixtures::sample(),
            AssetStore::new("/nonexistent-assets"),
            DEFAULT_LINK_TEMPLATE,
            ViewState::new(None, Metric::Mpi),
            subs,
        );
        let outcome = click(&mut d, "MLI");
        assert_eq!(outcome.updates.len(), 1);
        assert_eq!(
            outcome.updates[0].artifact,
            Artifact::Text {
                text: "fixed".to_string()
            }
        );
        assert!(d.subscribers(InputKind::Metric).is_empty());
    }

    #[test]
    fn test_input_event_wire_format() {
        let click: InputEvent =
            serde_json::from_str(r#"{"kind":"map_clicked","iso":"mli"}"#).unwrap();
        assert_eq!(click, InputEvent::MapClicked { iso: iso("MLI") });
        let metric: InputEvent =
            serde_json::from_str(r#"{"kind":"metric_changed","metric":"GII"}"#).unwrap();
        assert_eq!(metric.kind(), InputKind::Metric);
    }
}
