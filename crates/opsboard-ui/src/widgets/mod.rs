//! ratatui widgets drawing a [`DashboardView`](crate::DashboardView).

pub mod footer;
pub mod header;
pub mod plan;
pub mod stat_cards;
