use crossterm::event::KeyCode;

pub mod layout;
pub mod terminal;

pub use terminal::run;

/// What the chart window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Grid,
    Zoom(usize),
}

impl View {
    /// Next view after a key press, None when the user wants out.
    pub fn handle(self, key: KeyCode, chart_count: usize) -> Option<View> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => None,
            KeyCode::Char('0') | KeyCode::Backspace => Some(View::Grid),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match index < chart_count {
                    true => Some(View::Zoom(index)),
                    false => Some(self),
                }
            },
            KeyCode::Right | KeyCode::Tab if chart_count > 0 => Some(match self {
                View::Grid => View::Zoom(0),
                View::Zoom(i) => View::Zoom((i + 1) % chart_count),
            }),
            KeyCode::Left | KeyCode::BackTab if chart_count > 0 => Some(match self {
                View::Grid => View::Zoom(chart_count - 1),
                View::Zoom(i) => View::Zoom((i + chart_count - 1) % chart_count),
            }),
            _ => Some(self),
        }
    }
}
