use crate::completion::{
    request_completion, CompletionContent, CompletionMessageRole, OpenAiCompletionRequestBody,
};
use crate::constants::{
    CHAT_MODEL, GLAMI_IMAGE_HOST, KEYWORD_MAX_TOKENS, SCRAPE_TIMEOUT_SECS, SCRAPE_USER_AGENT,
};
use log::warn;
use regex::Regex;
use reqwest::{header::USER_AGENT, Client};
use std::{error::Error, time::Duration};

/// One gallery entry: the product photo URL plus a markdown label linking to
/// the search page it was found on.
pub type GalleryEntry = (String, String);

pub fn build_search_url(base_url: &str, keyword: &str) -> String {
    format!("{}/?q={}", base_url, keyword.replace(' ', "+"))
}

pub fn build_keyword_request(suggestion: &str) -> OpenAiCompletionRequestBody {
    OpenAiCompletionRequestBody {
        model: CHAT_MODEL.to_string(),
        messages: vec![CompletionMessageRole {
            role: "user".to_string(),
            content: vec![CompletionContent::Text {
                text: format!(
                    "Extract 2-4 short, searchable fashion product names from this suggestion:\n\n\
                     {}\n\n\
                     Return a comma-separated list like: 'beige sweatshirt, black trousers'",
                    suggestion
                ),
            }],
        }],
        max_tokens: KEYWORD_MAX_TOKENS,
    }
}

pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Asks the model for 2-4 searchable product phrases. Errors are absorbed
/// here: the caller only ever sees a possibly empty keyword list.
pub async fn extract_keywords(
    client: &Client,
    api_key: &str,
    api_url: &str,
    suggestion: &str,
) -> Vec<String> {
    if suggestion.trim().is_empty() {
        return Vec::new();
    }

    match request_completion(client, api_key, api_url, &build_keyword_request(suggestion)).await {
        Ok(raw_keywords) => parse_keywords(&raw_keywords),
        Err(err) => {
            warn!("keyword extraction failed: {}", err);
            Vec::new()
        }
    }
}

pub fn is_product_image_url(src: &str) -> bool {
    let lowered = src.to_lowercase();
    src.starts_with("http")
        && src.contains(GLAMI_IMAGE_HOST)
        && (src.ends_with(".jpg") || src.ends_with(".jpeg"))
        && !lowered.contains("logo")
        && !lowered.contains("placeholder")
        && !lowered.contains("sprite")
}

/// Scans `<img>` tags in document order, taking `src` and falling back to
/// `data-src`, and returns the first qualifying product photo URL.
pub fn first_product_image(html: &str) -> Option<String> {
    let tag_pattern = Regex::new(r"(?i)<img[^>]*>").unwrap();
    let src_pattern = Regex::new(r#"(?i)\ssrc\s*=\s*["']([^"']+)["']"#).unwrap();
    let data_src_pattern = Regex::new(r#"(?i)\sdata-src\s*=\s*["']([^"']+)["']"#).unwrap();

    for tag in tag_pattern.find_iter(html) {
        let tag = tag.as_str();
        let src = src_pattern
            .captures(tag)
            .or_else(|| data_src_pattern.captures(tag))
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string());
        if let Some(src) = src {
            if is_product_image_url(&src) {
                return Some(src);
            }
        }
    }

    None
}

async fn fetch_product_image(
    client: &Client,
    search_url: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    let response = client
        .get(search_url)
        .header(USER_AGENT, SCRAPE_USER_AGENT)
        .timeout(Duration::from_secs(SCRAPE_TIMEOUT_SECS))
        .send()
        .await?;
    let html = response.text().await?;
    Ok(first_product_image(&html))
}

/// Fetches the retailer search page for one keyword and picks the first
/// plausible product photo. Timeouts, connection errors and unparsable pages
/// all degrade to "no image found".
pub async fn find_product_image(client: &Client, base_url: &str, keyword: &str) -> Option<String> {
    let search_url = build_search_url(base_url, keyword);
    match fetch_product_image(client, &search_url).await {
        Ok(image_url) => image_url,
        Err(err) => {
            warn!("failed to fetch image for '{}': {}", keyword, err);
            None
        }
    }
}

/// Builds the gallery for one suggestion: extracts keywords, then scrapes the
/// search page for each keyword in order. The search-URL list covers every
/// keyword; the gallery only covers keywords that yielded a photo.
pub async fn create_image_gallery(
    client: &Client,
    api_key: &str,
    completions_url: &str,
    search_base_url: &str,
    suggestion: &str,
) -> (Vec<GalleryEntry>, Vec<String>) {
    let keywords = extract_keywords(client, api_key, completions_url, suggestion).await;
    let mut gallery = Vec::new();
    let mut search_urls = Vec::new();

    for keyword in &keywords {
        let search_url = build_search_url(search_base_url, keyword);
        let image_url = find_product_image(client, search_base_url, keyword).await;
        search_urls.push(search_url.clone());
        if let Some(image_url) = image_url {
            let label = format!("[{}]({})", keyword, search_url);
            gallery.push((image_url, label));
        }
    }

    (gallery, search_urls)
}
