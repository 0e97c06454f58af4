use anyhow::Result;
use std::io::Write;

use crate::state::SessionState;

/// Display stage: header plus each recommendation under a 1-based 推薦 label.
/// Pure function of the list; repeated runs produce identical output.
pub fn display_results<W: Write>(state: &SessionState, output: &mut W) -> Result<()> {
    writeln!(output, "\nおすすめの技術記事")?;
    for (i, rec) in state.recommendations.iter().enumerate() {
        writeln!(output, "\n推薦 {}", i + 1)?;
        writeln!(output, "{}", rec)?;
    }
    Ok(())
}
