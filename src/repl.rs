use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{interpreter::evaluator::core::Context, run};

/// Prompt shown when no input is pending.
pub const PROMPT: &str = "> ";
/// Prompt shown while a multi-line input is still open.
pub const CONTINUATION_PROMPT: &str = "+ ";

/// Returns `true` while the input has more opening than closing braces or
/// parentheses, ignoring anything inside string literals and comments.
///
/// # Example
/// ```
/// use rlite::repl::is_incomplete;
///
/// assert!(is_incomplete("for (i in c(1, 2)) {"));
/// assert!(!is_incomplete("x <- \"{\""));
/// ```
#[must_use]
pub fn is_incomplete(input: &str) -> bool {
    let mut depth = 0i32;
    let mut quote = None;
    let mut escaped = false;
    let mut in_comment = false;

    for ch in input.chars() {
        if in_comment {
            in_comment = ch != '\n';
            continue;
        }
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q || ch == '\n' {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '#' => in_comment = true,
            '{' | '(' => depth += 1,
            '}' | ')' => depth -= 1,
            _ => {},
        }
    }

    depth > 0
}

/// What the session should do after a line has been fed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// The input is still open; read another line.
    Continue,
    /// The input was handled; these lines should be shown.
    Done(Vec<String>),
    /// The user asked to leave.
    Quit,
}

/// One interactive session: a context plus the input gathered so far.
///
/// The session has no I/O of its own, which keeps it testable; [`run_repl`]
/// wires it to a line editor.
#[derive(Debug, Default)]
pub struct Session {
    context: Context,
    pending: String,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prompt matching the current input state.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        if self.pending.is_empty() { PROMPT } else { CONTINUATION_PROMPT }
    }

    /// Drops any partially entered input.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    /// Feeds one line of input to the session.
    ///
    /// `:reset` and `:quit` are only recognised at the start of an input.
    /// Otherwise the line is appended to the pending input, which runs as
    /// soon as its braces and parentheses balance. A syntax error is shown in
    /// place of the transcript.
    pub fn process_line(&mut self, line: &str) -> LineResult {
        if self.pending.is_empty() {
            match line.trim() {
                ":quit" => return LineResult::Quit,
                ":reset" => {
                    self.context.reset_environment();
                    return LineResult::Done(Vec::new());
                },
                _ => {},
            }
        } else {
            self.pending.push('\n');
        }
        self.pending.push_str(line);

        if is_incomplete(&self.pending) {
            return LineResult::Continue;
        }

        let source = std::mem::take(&mut self.pending);
        if source.trim().is_empty() {
            return LineResult::Done(Vec::new());
        }

        match run(&mut self.context, &source) {
            Ok(transcript) => LineResult::Done(transcript.output),
            Err(e) => LineResult::Done(vec![e.to_string()]),
        }
    }
}

/// Runs the interactive loop on the terminal until `:quit` or end of input.
///
/// Ctrl-C discards the pending input and keeps the session alive.
pub fn run_repl() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new();

    loop {
        match editor.readline(session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match session.process_line(&line) {
                    LineResult::Continue => {},
                    LineResult::Done(lines) => lines.iter().for_each(|l| println!("{l}")),
                    LineResult::Quit => break,
                }
            },
            Err(ReadlineError::Interrupted) => session.discard_pending(),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    debug!("repl finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(lines: &[&str]) -> Vec<String> {
        let mut session = Session::new();
        lines.iter()
             .filter_map(|line| match session.process_line(line) {
                 LineResult::Done(out) => Some(out),
                 _ => None,
             })
             .flatten()
             .collect()
    }

    #[test]
    fn expression_is_echoed() {
        assert_eq!(session_output(&["1 + 2"]), vec!["[1] 3"]);
    }

    #[test]
    fn variables_persist_between_lines() {
        assert_eq!(session_output(&["x <- 41", "x + 1"]), vec!["[1] 42"]);
    }

    #[test]
    fn multi_line_block_waits_for_closing_brace() {
        let mut session = Session::new();
        assert_eq!(session.process_line("for (i in c(1, 2)) {"), LineResult::Continue);
        assert_eq!(session.prompt(), CONTINUATION_PROMPT);
        assert_eq!(session.process_line("  print(i)"), LineResult::Continue);
        assert_eq!(session.process_line("}"),
                   LineResult::Done(vec!["[1] 1".into(), "[1] 2".into()]));
        assert_eq!(session.prompt(), PROMPT);
    }

    #[test]
    fn reset_clears_environment() {
        let out = session_output(&["x <- 1", ":reset", "x"]);
        assert_eq!(out, vec!["[1] Error: Object 'x' not found"]);
    }

    #[test]
    fn quit_ends_session() {
        let mut session = Session::new();
        assert_eq!(session.process_line(":quit"), LineResult::Quit);
    }

    #[test]
    fn syntax_error_is_reported_and_input_cleared() {
        let mut session = Session::new();
        assert_eq!(session.process_line("x <- )"),
                   LineResult::Done(vec!["Syntax error on line 1: unexpected ')'".into()]));
        assert_eq!(session.prompt(), PROMPT);
    }

    #[test]
    fn braces_inside_strings_and_comments_are_ignored() {
        assert!(!is_incomplete("cat(\"{\") # {"));
        assert!(is_incomplete("if (1) { # }"));
    }

    #[test]
    fn blank_line_produces_nothing() {
        assert!(session_output(&["", "   "]).is_empty());
    }
}
