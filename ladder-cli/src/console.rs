//! Terminal implementations of the session's input and output traits.

use std::io::{self, BufRead, Write};

use ladder_core::{InputSource, Ladder, Name, Outcome, OutputSink, ResultBoard, Roster};

use crate::view;

/// Prompts on `prompt` and reads one line per answer from `reader`.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
    all_keyword: String,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W, all_keyword: impl Into<String>) -> Self {
        Self {
            reader,
            prompt,
            all_keyword: all_keyword.into(),
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.prompt, "\n{question}")?;
        self.prompt.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_names(&mut self) -> io::Result<Option<String>> {
        self.ask("Enter participant names, separated by commas.")
    }

    fn read_outcomes(&mut self) -> io::Result<Option<String>> {
        self.ask("Enter the outcomes, separated by commas.")
    }

    fn read_height(&mut self) -> io::Result<Option<String>> {
        self.ask("How tall should the ladder be?")
    }

    fn read_query(&mut self) -> io::Result<Option<String>> {
        let question = format!(
            "Whose result do you want to see? ('{}' shows everyone)",
            self.all_keyword
        );
        self.ask(&question)
    }
}

/// Writes rendered ladders, outcomes and errors to a writer.
pub struct ConsoleOutput<W> {
    out: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn show_ladder(
        &mut self,
        roster: &Roster,
        ladder: &Ladder,
        outcomes: &[Outcome],
    ) -> io::Result<()> {
        writeln!(self.out, "\nLadder\n")?;
        writeln!(self.out, "{}", view::render_ladder(roster, ladder, outcomes))
    }

    fn show_outcome(&mut self, _name: &Name, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.out, "\nResult\n{outcome}")
    }

    fn show_board(&mut self, board: &ResultBoard) -> io::Result<()> {
        writeln!(self.out, "\nResult\n{}", view::render_board(board))
    }

    fn show_error(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.out, "[ERROR] {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::{GameConfig, Session};
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_newlines() {
        let mut input = ConsoleInput::new(Cursor::new("a,b\r\n3\n"), Vec::new(), "all");
        assert_eq!(input.read_names().unwrap(), Some("a,b".into()));
        assert_eq!(input.read_height().unwrap(), Some("3".into()));
        assert_eq!(input.read_query().unwrap(), None);
    }

    #[test]
    fn prompts_mention_keyword() {
        let mut prompt = Vec::new();
        {
            let mut input = ConsoleInput::new(Cursor::new("x\n"), &mut prompt, "everyone");
            input.read_query().unwrap();
        }
        let text = String::from_utf8(prompt).unwrap();
        assert!(text.contains("'everyone' shows everyone"));
    }

    #[test]
    fn console_session_end_to_end() {
        let script = "pobi,honux\n1\n1,2\n2\nnobody\nall\n";
        let input = ConsoleInput::new(Cursor::new(script), io::sink(), "all");
        let output = ConsoleOutput::new(Vec::new());
        let mut session = Session::new(input, output, GameConfig::default()).with_seed(5);

        let board = session.play().unwrap();
        let (_, output) = session.into_parts();
        let text = String::from_utf8(output.into_inner()).unwrap();

        assert!(text.contains("[ERROR] expected 2 outcomes (one per participant), got 1"));
        assert!(text.contains("[ERROR] no participant named 'nobody'"));
        assert!(text.contains(&view::render_board(&board)));
        assert!(text.contains("pobi  honux"));
    }
}
