use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::state::SessionState;

/// Reserved input value terminating the collection loop (case-insensitive).
pub const SENTINEL: &str = "done";

/// Prompt loop filling `state.read_articles` one line at a time until the
/// sentinel is entered. The sentinel itself is never recorded. No content
/// validation, no length limit, no duplicate detection.
pub fn collect_history<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "読んだ技術記事の情報を入力してください（終了するには 'done' と入力）"
    )?;

    loop {
        write!(output, "記事のタイトルと内容の要約: ")?;
        output.flush()?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("failed to read article input")?;
        if bytes == 0 {
            // EOF terminates collection like the sentinel
            debug!("input closed, ending collection");
            break;
        }

        let article = line.trim_end_matches(['\r', '\n']);
        if article.trim().eq_ignore_ascii_case(SENTINEL) {
            break;
        }
        state.read_articles.push(article.to_string());
    }

    debug!(articles = state.read_articles.len(), "history collected");
    Ok(())
}
