use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` to allow components to update
/// presentation state (e.g. scroll offsets) during rendering.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component made of whole text lines, so parents can stack several of
/// them into one scrollable paragraph.
pub trait LineComponent {
    fn lines(&self) -> Vec<Line<'static>>;
}

/// Number of lines as a terminal height, saturating at `u16::MAX`.
pub fn line_count(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_saturates() {
        assert_eq!(line_count(&[Line::from("a"), Line::from("b")]), 2);
        let many = vec![Line::default(); usize::from(u16::MAX) + 5];
        assert_eq!(line_count(&many), u16::MAX);
    }
}
