//! Dashboard components

pub mod alarm_table;
pub mod alarms_page;
pub mod filter_bar;
pub mod health;
pub mod pagination;
pub mod severity_badge;
