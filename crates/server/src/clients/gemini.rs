//! Client for the Gemini generateContent REST API.
//! Text in, text out; commentary routes build the prompts.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client from config.
    /// Returns None if no API key is configured.
    pub fn new(config: &Config) -> Option<Self> {
        let api_key = config.gemini_api_key.clone()?;

        let client = Client::builder()
            .user_agent("ShadowChess/1.0")
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .ok()?;

        Some(Self {
            client,
            api_key,
            model: config.gemini_model.clone(),
        })
    }

    /// Send a free-text prompt and return the model's text completion.
    pub async fn generate(&self, prompt: &str) -> Result<String, String> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);

        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Request error: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Gemini API error: HTTP {}", resp.status()));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| format!("Body read error: {e}"))?;

        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| "No text in Gemini response".to_string())?;

        Ok(text.to_string())
    }
}

/// Pull a JSON object out of a free-text completion: strict parse of the
/// substring between the first `{` and the last `}`. Returns None when no
/// object can be extracted; callers substitute a typed default instead of
/// surfacing a parse error.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str::<Value>(&text[start..=end])
        .ok()
        .filter(|v| v.is_object())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_object() {
        let parsed = extract_json_object(r#"{"a": 1}"#).unwrap();
        assert_eq!(parsed["a"], 1);
    }

    #[test]
    fn test_extract_object_wrapped_in_prose() {
        let text = "Here is the answer:\n```json\n{\"tip\": \"develop first\"}\n```\nHope it helps.";
        let parsed = extract_json_object(text).unwrap();
        assert_eq!(parsed["tip"], "develop first");
    }

    #[test]
    fn test_extract_spans_first_to_last_brace() {
        let text = r#"intro {"outer": {"inner": 2}} trailing"#;
        let parsed = extract_json_object(text).unwrap();
        assert_eq!(parsed["outer"]["inner"], 2);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_json_object("no braces at all").is_none());
        assert!(extract_json_object("{not valid json}").is_none());
        assert!(extract_json_object("} {").is_none());
        // a bare array is not an object
        assert!(extract_json_object("[1, 2]").is_none());
    }
}
