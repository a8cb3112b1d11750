//! Terminal rendering of the session view.

use std::io::Write;

use greet_core::SessionViewModel;

const HEADER: &str = "API Fetch Status";

/// Incremental printer: each draw emits only what previous draws have not.
pub struct Renderer<W: Write> {
    out: W,
    printed_steps: usize,
    header_drawn: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed_steps: 0,
            header_drawn: false,
        }
    }

    pub fn draw(&mut self, view: &SessionViewModel) {
        if !self.header_drawn {
            let _ = writeln!(self.out, "{HEADER}");
            self.header_drawn = true;
        }
        for step in &view.steps[self.printed_steps..] {
            let _ = writeln!(self.out, "  - {step}");
        }
        self.printed_steps = view.steps.len();

        if view.settled {
            let _ = writeln!(self.out, "Message: {}", view.message_line);
            if let Some(error) = &view.error_line {
                let _ = writeln!(self.out, "Error: {error}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(steps: &[&str], settled: bool) -> SessionViewModel {
        SessionViewModel {
            steps: steps.iter().map(ToString::to_string).collect(),
            message_line: "No message received yet.".to_string(),
            error_line: None,
            settled,
        }
    }

    fn drawn(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.out).unwrap()
    }

    #[test]
    fn draw_prints_header_and_steps() {
        let mut renderer = Renderer::new(Vec::new());
        renderer.draw(&view(&["one", "two"], false));

        assert_eq!(
            drawn(renderer),
            "API Fetch Status\n  - one\n  - two\n"
        );
    }

    #[test]
    fn redraw_only_prints_new_steps() {
        let mut renderer = Renderer::new(Vec::new());
        renderer.draw(&view(&["one"], false));
        renderer.draw(&view(&["one", "two"], false));

        assert_eq!(
            drawn(renderer),
            "API Fetch Status\n  - one\n  - two\n"
        );
    }

    #[test]
    fn settled_view_prints_message_line() {
        let mut renderer = Renderer::new(Vec::new());
        let mut settled = view(&["one"], true);
        settled.message_line = "Hello from the server!".to_string();
        renderer.draw(&settled);

        assert_eq!(
            drawn(renderer),
            "API Fetch Status\n  - one\nMessage: Hello from the server!\n"
        );
    }

    #[test]
    fn settled_view_prints_error_line_when_present() {
        let mut renderer = Renderer::new(Vec::new());
        let mut settled = view(&["one"], true);
        settled.error_line = Some("connection refused".to_string());
        renderer.draw(&settled);

        assert_eq!(
            drawn(renderer),
            "API Fetch Status\n  - one\nMessage: No message received yet.\nError: connection refused\n"
        );
    }
}
