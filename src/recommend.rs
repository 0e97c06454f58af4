use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::llm::{LlmProvider, LlmRequest};
use crate::state::SessionState;

/// System instruction for the recommendation request.
pub const SYSTEM_PROMPT: &str = "あなたは技術記事の推薦エキスパートです。
ユーザーがこれまで読んだ技術記事の情報を基に、関連性の高い新しい技術記事を推薦してください。
推薦する際は以下の点を考慮してください：
1. ユーザーの興味分野との関連性
2. 最新の技術トレンド
3. 学習の連続性
4. 記事の質と信頼性

推薦記事は以下の形式で出力してください：
- タイトル
- 推薦理由
- 想定される学習効果";

/// User message embedding the newline-joined reading history.
pub fn build_user_prompt(read_articles: &[String]) -> String {
    format!(
        "読んだ記事の履歴：\n{}\n\nこれらの記事を基に、おすすめの技術記事を3つ提案してください。",
        read_articles.join("\n")
    )
}

/// Split a raw completion into recommendation blocks on blank-line
/// boundaries. Naive: nothing enforces the requested three-item structure.
pub fn split_recommendations(completion: &str) -> Vec<String> {
    completion
        .split("\n\n")
        .map(|block| block.to_string())
        .collect()
}

/// Generation stage: one completion request, single attempt, then the
/// blank-line split into `state.recommendations`.
pub async fn generate_recommendations(
    state: &mut SessionState,
    provider: &dyn LlmProvider,
) -> Result<()> {
    let request = LlmRequest {
        system: Some(SYSTEM_PROMPT.to_string()),
        prompt: build_user_prompt(&state.read_articles),
        max_tokens: None,
        temperature: None,
        timeout_seconds: None,
    };

    let response = provider
        .generate(request)
        .await
        .context("LLM generation failed")?;

    debug!(
        model = %response.model,
        total_tokens = response.usage.total_tokens,
        "completion received"
    );

    let blocks = split_recommendations(&response.content);
    if blocks.len() != 3 {
        // The prompt asks for exactly three; the split cannot enforce that.
        warn!(
            blocks = blocks.len(),
            "model returned a block count other than the requested three"
        );
    }
    state.recommendations = blocks;
    Ok(())
}
