//! Platform-agnostic calendar model: estimate, timeline, layout, persistence.

pub mod cells;
pub mod config;
pub mod countries;
pub mod events;
pub mod expectancy;
pub mod format;
pub mod layout;
pub mod platform;
pub mod profile;
pub mod quotes;
pub mod storage;
pub mod store;
pub mod temporal;
pub mod timing;
