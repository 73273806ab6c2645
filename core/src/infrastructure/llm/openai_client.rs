use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_plan::{ports::CompletionClient, value_objects::CompletionRequest},
};

const SCHEMA_NAME: &str = "meal_plan";

/// OpenAI-compatible chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            client: Client::new(),
        }
    }

    fn chat_request(&self, request: CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model_name.clone(),
            temperature: self.temperature,
            messages: vec![
                Message {
                    role: "system",
                    content: request.system,
                },
                Message {
                    role: "user",
                    content: request.user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema: request.response_schema,
                },
            },
        }
    }

    async fn call_openai_api(&self, request: ChatRequest) -> Result<String, CoreError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_content(chat_response)
    }
}

fn first_content(response: ChatResponse) -> Result<String, CoreError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

impl CompletionClient for OpenAILLMClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let chat_request = self.chat_request(request);
        self.call_openai_api(chat_request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn client() -> OpenAILLMClient {
        OpenAILLMClient::new(&LLMConfig {
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-4.1-mini".to_string(),
            openai_base_url: "https://api.openai.com/".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        })
    }

    #[test]
    fn test_chat_request_body() {
        let body = serde_json::to_value(client().chat_request(CompletionRequest {
            system: "sys".to_string(),
            user: "usr".to_string(),
            response_schema: json!({ "type": "object" }),
        }))
        .unwrap();

        assert_eq!(body["model"], "gpt-4.1-mini");
        assert_eq!(body["messages"][0], json!({ "role": "system", "content": "sys" }));
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "meal_plan");
        assert_eq!(
            body["response_format"]["json_schema"]["schema"],
            json!({ "type": "object" })
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(client().base_url, "https://api.openai.com");
    }

    #[test]
    fn test_first_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"title\":\"x\"}" } }]
        }))
        .unwrap();
        assert_eq!(first_content(response).unwrap(), "{\"title\":\"x\"}");

        let empty: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            first_content(empty),
            Err(CoreError::ExternalServiceError(_))
        ));
    }
}
