//! Presentation layer for the opsboard dashboard.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `view` - pure projection from a [`Snapshot`] to a [`DashboardView`]
//! - `text` - plain-text rendering of a view
//! - `widgets` - ratatui widgets drawing a view (stat cards, plan panel, header, footer)
//! - `theme` - colors and badge styles
//! - `utils` - text truncation
//!
//! Widgets only ever see a [`DashboardView`]; nothing here performs I/O or
//! can fail.
//!
//! [`Snapshot`]: opsboard_core::Snapshot

pub mod text;
pub mod theme;
pub mod utils;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use text::render_text;
pub use theme::Theme;
pub use utils::truncate;
pub use view::{
    capitalize_first, ActivePlan, Badge, BadgeKind, DashboardView, EmptyReason, PlanPanel,
    StatCard, StatValue, WorkerRow, NO_ACTIVE_PLAN, PLACEHOLDER,
};
pub use widgets::footer::Footer;
pub use widgets::header::{Header, StatusIndicator};
pub use widgets::plan::PlanWidget;
pub use widgets::stat_cards::StatCards;
