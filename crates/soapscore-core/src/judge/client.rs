use super::prompt::Prompt;
use super::Judge;

/// Single completion round trip; returns the raw answer text.
pub(crate) async fn call_oracle(judge: &Judge, prompt: &Prompt) -> anyhow::Result<String> {
    let resp = judge.client.complete(&prompt.system, &prompt.user).await?;
    Ok(resp.text)
}
