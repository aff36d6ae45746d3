//! Shared test helpers.

use chrono::{TimeZone, Utc};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use opsboard_core::{demo, CycleOutcome, Snapshot};

use crate::view::DashboardView;

/// Settled cycle carrying the demo stats and run, started at a fixed time.
pub fn demo_snapshot() -> Snapshot {
    let started = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    Snapshot::settled(
        1,
        CycleOutcome::Ready {
            stats: demo::stats(),
            run: demo::run(started),
        },
    )
}

pub fn demo_view() -> DashboardView {
    DashboardView::project(&demo_snapshot())
}

/// Draw into an off-screen terminal and return its rows as strings.
pub fn draw_lines(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw(frame, area)
        })
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
