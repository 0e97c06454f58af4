/// In-memory record for one run: the collected reading history and the
/// generated recommendations. Created fresh at startup, mutated in place by
/// each pipeline stage, dropped at process exit.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Free-text descriptions of articles the user has read, in input order.
    /// Append-only during collection.
    pub read_articles: Vec<String>,
    /// Recommendation blocks from the model. Empty until generation has run.
    pub recommendations: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
