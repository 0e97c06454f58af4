use anyhow::Result;
use std::env;
use std::io::Write;

/// Environment variable holding the API credential. Also honored when set
/// through a `.env` file in the working directory.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Fetch the API credential from the process environment. Returns `None` when
/// the variable is unset or empty; callers must not attempt any network call
/// in that case.
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

/// Credential gate for the pipeline entry point. When the credential is
/// absent, the user-facing message is written to `output` and `Ok(None)` is
/// returned; the caller must exit without constructing a provider.
pub fn require_api_key<W: Write>(output: &mut W) -> Result<Option<String>> {
    match api_key_from_env() {
        Some(key) => Ok(Some(key)),
        None => {
            writeln!(output, "エラー: {}が設定されていません。", API_KEY_ENV)?;
            writeln!(
                output,
                "環境変数ファイル(.env)に{}を設定してください。",
                API_KEY_ENV
            )?;
            Ok(None)
        }
    }
}
