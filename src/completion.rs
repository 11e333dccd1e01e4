use crate::utils::build_headers;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionApiResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum CompletionContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct CompletionMessageRole {
    pub role: String,
    pub content: Vec<CompletionContent>,
}

#[derive(Debug, Serialize)]
pub struct OpenAiCompletionRequestBody {
    pub model: String,
    pub messages: Vec<CompletionMessageRole>,
    pub max_tokens: u32,
}

/// Issues one chat-completion request and returns the trimmed text of the
/// first choice.
pub async fn request_completion(
    client: &Client,
    api_key: &str,
    api_url: &str,
    body: &OpenAiCompletionRequestBody,
) -> Result<String, Box<dyn Error>> {
    let headers = build_headers(api_key)?;
    let response = client
        .post(api_url)
        .headers(headers)
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        return Err(format!("completion request failed with status {}: {}", status, message).into());
    }

    let api_response = response.json::<CompletionApiResponse>().await?;
    let content = api_response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or("no choices in completion response")?;

    Ok(content.trim().to_string())
}
