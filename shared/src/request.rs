//! Invoke request payloads
//!
//! Argument objects for the three bridge commands. Keys are camelCase to
//! match what the desktop frontend sends.

use serde::{Deserialize, Serialize};

use crate::models::Prompt;

/// Arguments of `save_prompt`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePromptRequest {
    pub prompt: Prompt,
}

/// Arguments of `fetch_prompts` (none)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchPromptsRequest {}

/// Arguments of `delete_prompt`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePromptRequest {
    pub prompt_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_request_uses_prompt_id_key() {
        let req = DeletePromptRequest {
            prompt_id: "p1".to_string(),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "promptId": "p1" }));
    }

    #[test]
    fn test_fetch_request_is_empty_object() {
        let value = serde_json::to_value(FetchPromptsRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
