//! The interactive lookup loop.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Arc;

use versepage_foundation::Result;
use versepage_index::PageIndex;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{self, Rendered};

/// REPL commands offered for completion.
pub const COMMANDS: &[&str] = &[":help", ":quit", ":stats"];

const HELP: &str = "\
Supported formats:
  John 3:16          a single verse
  John 3:16-18       verses within a chapter
  John 3             a whole chapter
  John 3-4           a span of whole chapters
  John 3:16-4:2      a span across chapters
Common abbreviations (Gen, Ps, Matt, Jn, 1Cor, ...) are accepted.

Commands:
  :help              Show this message
  :stats             Summarize the loaded dataset
  :quit, :q          Exit (or press Ctrl+D)";

/// What the loop should do after one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Print the output and keep reading.
    Output(Rendered),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Index answering lookups.
    index: Arc<PageIndex>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Render results as JSON instead of text.
    json_output: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(index: Arc<PageIndex>) -> Result<Self> {
        let editor = RustylineEditor::new(COMMANDS)?;
        Ok(Self::with_editor(editor, index))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, index: Arc<PageIndex>) -> Self {
        Self {
            editor,
            index,
            show_banner: true,
            json_output: false,
            prompt: "ref> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Renders results as JSON objects, one per line.
    #[must_use]
    pub const fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the index answering lookups.
    #[must_use]
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Step::Output(out) => print(&out),
                Step::Quit => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line of input: a command or a reference to look up.
    #[must_use]
    pub fn eval(&self, input: &str) -> Step {
        let input = input.trim();
        match input {
            ":quit" | ":q" => Step::Quit,
            ":help" | ":h" => Step::Output(Rendered {
                stdout: Some(HELP.to_string()),
                stderr: None,
            }),
            ":stats" => Step::Output(Rendered {
                stdout: Some(self.stats()),
                stderr: None,
            }),
            cmd if cmd.starts_with(':') => Step::Output(Rendered {
                stdout: None,
                stderr: Some(format!("Unknown command: {cmd} (try :help)")),
            }),
            reference => {
                let result = self.index.lookup(reference);
                if self.json_output {
                    Step::Output(Rendered {
                        stdout: Some(render::to_json(&result).to_string()),
                        stderr: None,
                    })
                } else {
                    Step::Output(render::human(reference, &result))
                }
            }
        }
    }

    fn stats(&self) -> String {
        let report = self.index.report();
        let mut out = format!(
            "{} rows, {} indexed, {} skipped, {} verses, {} overlaps",
            report.rows,
            report.indexed,
            report.skipped.len(),
            self.index.len(),
            report.overlaps,
        );
        for skipped in &report.skipped {
            let _ = write!(
                out,
                "\n  row {} (page {}): {:?}: {}",
                skipped.row, skipped.page, skipped.reference, skipped.error
            );
        }
        out
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mVersepage v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "{} verses indexed. Type a reference, :help for formats, Ctrl+D to exit.\n",
            self.index.len()
        );
        let _ = io::stdout().flush();
    }
}

/// Writes rendered output to stdout and stderr.
pub fn print(out: &Rendered) {
    if let Some(line) = &out.stdout {
        println!("{line}");
    }
    if let Some(line) = &out.stderr {
        eprintln!("{line}");
    }
}
