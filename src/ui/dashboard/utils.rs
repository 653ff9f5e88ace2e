//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Dispatcher => Color::Cyan,
        Source::View(_) => Color::Yellow,
        Source::Server => Color::Green,
    }
}

/// Parses the color strings used in figures: `#rrggbb` or a few CSS names.
pub fn parse_color(color: &str) -> Option<Color> {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    match color.to_ascii_lowercase().as_str() {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        "grey" | "gray" => Some(Color::Gray),
        _ => None,
    }
}

/// Samples a named sequential colorscale at `t` in `[0, 1]`.
pub fn scale_color(colorscale: &str, t: f64) -> Color {
    let (low, high) = match colorscale {
        "Reds" => ((255, 245, 240), (103, 0, 13)),
        "Blues" => ((247, 251, 255), (8, 48, 107)),
        _ => ((240, 240, 240), (40, 40, 40)),
    };
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(mix(low.0, high.0), mix(low.1, high.1), mix(low.2, high.2))
}

/// Index values are shown with three decimals; missing ones as `n/a`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to the raw timestamp if parsing fails
    timestamp.to_string()
}
