//! REPL tests driven through a scripted editor.

use std::sync::Arc;

use versepage_foundation::Result;
use versepage_index::{PageDataEntry, PageIndex};
use versepage_runtime::{LineEditor, ReadResult, Repl, Step};

struct Script {
    lines: std::vec::IntoIter<ReadResult>,
    history: Vec<String>,
}

impl Script {
    fn new(lines: Vec<ReadResult>) -> Self {
        Self {
            lines: lines.into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

fn index() -> Arc<PageIndex> {
    Arc::new(PageIndex::builder().build(&[
        PageDataEntry::new(88, "Isaiah 40:1-31"),
        PageDataEntry::new(89, "Isaiah 41:1-29"),
    ]))
}

fn line(text: &str) -> ReadResult {
    ReadResult::Line(text.to_string())
}

#[test]
fn interrupt_does_not_end_session() {
    let mut repl = Repl::with_editor(
        Script::new(vec![ReadResult::Interrupted, line("Isa 40:31"), line(":q")]),
        index(),
    )
    .without_banner();
    repl.run().unwrap();
}

#[test]
fn eval_renders_human_and_json() {
    let repl = Repl::with_editor(Script::new(vec![]), index()).without_banner();
    let Step::Output(out) = repl.eval("Isaiah 40:31-41:1") else {
        panic!("unexpected quit");
    };
    assert_eq!(out.stdout.as_deref(), Some("Isaiah 40:31-41:1 → pages 88-89"));

    let repl = repl.with_json_output(true);
    let Step::Output(out) = repl.eval("Isaiah 42:1") else {
        panic!("unexpected quit");
    };
    let value: serde_json::Value = serde_json::from_str(&out.stdout.unwrap()).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "All 1 verse(s) out of range.");
}

#[test]
fn stats_reflect_index() {
    let repl = Repl::with_editor(Script::new(vec![]), index());
    let Step::Output(out) = repl.eval(":stats") else {
        panic!("unexpected quit");
    };
    assert_eq!(
        out.stdout.as_deref(),
        Some("2 rows, 2 indexed, 0 skipped, 60 verses, 0 overlaps")
    );
}
