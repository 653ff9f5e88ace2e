//! Event System
//!
//! Activity records produced while dispatching input events. Both front ends consume them:
//! the terminal dashboard lists them, the server forwards them to the logger.

use crate::logging::{LogLevel, should_log_with_env};
use crate::render::ViewId;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The dispatcher itself (selection and metric changes).
    Dispatcher,
    /// A single view's renderer.
    View(ViewId),
    /// The HTTP front end.
    Server,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Warning,
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn state_change(msg: String) -> Self {
        Self::new(
            Source::Dispatcher,
            msg,
            EventType::StateChange,
            LogLevel::Info,
        )
    }

    pub fn dispatcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Dispatcher, msg, event_type, log_level)
    }

    pub fn view_with_level(
        view: ViewId,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::View(view), msg, event_type, log_level)
    }

    pub fn server_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Server, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forwards the event to the `log` facade at its own level.
    pub fn emit(&self) {
        log::log!(log::Level::from(self.log_level), "{}", self.msg);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::state_change("Selected Mali (MLI)".to_string());
        let shown = event.to_string();
        assert!(shown.starts_with("StateChange ["));
        assert!(shown.ends_with("] Selected Mali (MLI)"));
        assert_eq!(event.source, Source::Dispatcher);
    }

    #[test]
    fn test_info_and_success_always_display() {
        let warn = Event::view_with_level(
            ViewId::Image,
            "placeholder".to_string(),
            EventType::Warning,
            LogLevel::Warn,
        );
        assert!(warn.should_display());
        let ok = Event::server_with_level("up".to_string(), EventType::Success, LogLevel::Debug);
        assert!(ok.should_display());
    }
}
