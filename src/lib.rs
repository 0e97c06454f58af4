// Library interface for readnext modules
// This allows tests and other binaries to import modules

pub mod collector;
pub mod config;
pub mod llm;
pub mod present;
pub mod recommend;
pub mod state;

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::llm::LlmProvider;
use crate::state::SessionState;

/// Fixed linear pipeline: collect history, generate recommendations, display
/// results. One execution per process invocation; the session state is
/// returned so callers (tests) can inspect it.
pub async fn run_pipeline<R: BufRead, W: Write>(
    provider: &dyn LlmProvider,
    input: &mut R,
    output: &mut W,
) -> Result<SessionState> {
    let mut state = SessionState::new();
    collector::collect_history(&mut state, input, output)?;
    recommend::generate_recommendations(&mut state, provider).await?;
    present::display_results(&state, output)?;
    Ok(state)
}
