//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod breakdowns;
pub mod choropleth;
pub mod explore;
pub mod footer;
pub mod header;
pub mod logs;
pub mod scatter;
pub mod table;
