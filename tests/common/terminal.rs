//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into a test buffer and converts the output to strings.

use bubblestep::App;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return the terminal
pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal.draw(|f| app.draw(f)).expect("Failed to draw frame");
    terminal
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Extract a single row of the buffer as a string
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    let area = Rect::new(buffer.area.x, y, buffer.area.width, 1);
    let mut output = String::new();
    for x in area.x..area.x + area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            output.push_str(cell.symbol());
        }
    }
    output
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Assert that the buffer contains expected text, printing the screen otherwise
pub fn assert_screen_contains(buffer: &Buffer, expected: &str) {
    let actual = buffer_to_string(buffer);
    assert!(
        actual.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_buffer_row() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| {
                f.render_widget(Paragraph::new("A\nBC"), f.area());
            })
            .unwrap();

        assert_eq!(buffer_row(terminal.backend().buffer(), 1).trim_end(), "BC");
        assert!(buffer_contains(terminal.backend().buffer(), "BC"));
    }
}
