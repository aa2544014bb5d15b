use {
    crate::{chart_service::ChartSet, ui::View, LogResult},
    crossterm::event::{self, Event, KeyEventKind},
    ratatui::{backend::CrosstermBackend, Terminal},
    tracing::log,
};

/// Show the charts until the user quits
///
/// The terminal is put back the way it was even when drawing fails.
pub fn run(charts: &ChartSet) -> anyhow::Result<()> {
    log::info!("[UI] Showing {} charts", charts.len());
    crossterm::terminal::enable_raw_mode()?;
    let result = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )
    .map_err(anyhow::Error::from)
    .and_then(|_| event_loop(charts));

    restore().ok_log("[UI] Failed to restore terminal");
    result
}

fn event_loop(charts: &ChartSet) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut view = View::Grid;
    loop {
        terminal.draw(|f| crate::ui::layout::render_layout(f, charts, view))?;

        // Blocks until something happens, resize included
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match view.handle(key.code, charts.len()) {
                Some(next) => view = next,
                None => break,
            }
        }
    }
    Ok(())
}

fn restore() -> std::io::Result<()> {
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()
}
