use crate::completion::{
    request_completion, CompletionContent, CompletionMessageRole, ImageUrl,
    OpenAiCompletionRequestBody,
};
use crate::constants::{
    CHAT_MODEL, DALLE_API_URL, DESCRIPTION_MAX_TOKENS, GLAMI_BASE_URL, GPT_API_URL,
    RUN_AGAIN_LABEL,
};
use crate::gallery::create_image_gallery;
use crate::generator::generate_outfit_image;
use crate::utils::{capitalize_first, encode_image};
use image::DynamicImage;
use log::{debug, info};
use reqwest::Client;
use std::{error::Error, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    pub fn as_prompt_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Unisex => "unisex",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "unisex" => Ok(Gender::Unisex),
            other => Err(format!(
                "unknown gender '{}', expected men, women or unisex",
                other
            )),
        }
    }
}

/// Endpoints for the three external collaborators. Tests point these at mock
/// servers; production uses the defaults.
pub struct ServiceEndpoints {
    pub completions_url: String,
    pub generations_url: String,
    pub search_base_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            completions_url: GPT_API_URL.to_string(),
            generations_url: DALLE_API_URL.to_string(),
            search_base_url: GLAMI_BASE_URL.to_string(),
        }
    }
}

/// Everything one stylist run hands back to the presentation layer. Always
/// well-formed: on failure the description carries the error text and the
/// other fields are empty.
#[derive(Debug)]
pub struct StylistOutcome {
    pub description: String,
    pub suggestion: String,
    pub outfit_image: Option<DynamicImage>,
    pub search_links: String,
    pub button_label: &'static str,
}

/// Splits a model response at its first line break: the first line is the
/// item description, the remainder the outfit suggestion. A response with no
/// line break is all description.
pub fn split_description_suggestion(response: &str) -> (String, String) {
    match response.split_once('\n') {
        Some((description, suggestion)) => {
            (description.trim().to_string(), suggestion.trim().to_string())
        }
        None => (response.trim().to_string(), String::new()),
    }
}

pub fn stylist_persona_prompt(gender: Gender) -> String {
    format!(
        "You are a professional fashion stylist for {} fashion. \
         First, describe the fashion item in the image in 1 sentence. \
         Always mention the color and type of the item. Try to describe in details as much as possible. \
         Even if the item is unclear or difficult to find, describe any fashion item visible in the image. \
         Then, suggest 3 outfit items that would go well with it. Show them in a list. \
         Use clear, stylish, modern language.\n\n\
         Output will be in the following format:\n\n\
         This is ...\n\
         1. ...\n\
         2. ...\n\
         3. ...",
        gender.as_prompt_str()
    )
}

pub fn build_description_request(gender: Gender, photo_base64: &str) -> OpenAiCompletionRequestBody {
    OpenAiCompletionRequestBody {
        model: CHAT_MODEL.to_string(),
        messages: vec![CompletionMessageRole {
            role: "user".to_string(),
            content: vec![
                CompletionContent::Text {
                    text: stylist_persona_prompt(gender),
                },
                CompletionContent::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{}", photo_base64),
                    },
                },
            ],
        }],
        max_tokens: DESCRIPTION_MAX_TOKENS,
    }
}

pub fn build_image_prompt(gender: Gender, description: &str, suggestion: &str) -> String {
    format!(
        "Image of 1 person with outfit for {}. \
         Description of the outfit items: {} {} \
         Make sure the details of the items can be seen in the image. \
         Do not use any other items that are not mentioned. \
         Super realistic photo with cinematic background.",
        gender.as_prompt_str(),
        description,
        suggestion
    )
}

/// Renders the search-link block. Each label is the query value of its URL,
/// `+` turned back into spaces, capitalized.
pub fn format_search_links(search_urls: &[String]) -> String {
    let items: String = search_urls
        .iter()
        .map(|url| {
            let phrase = url
                .rsplit('=')
                .next()
                .unwrap_or_default()
                .replace('+', " ");
            format!(
                "<li><a href='{}' target='_blank'>{}</a></li>",
                url,
                capitalize_first(&phrase)
            )
        })
        .collect();

    format!(
        "<h2>Search Links to GLAMI</h2>\n<ul style='font-size: 20px;'>{}</ul>",
        items
    )
}

/// Drives the full stylist sequence for one uploaded photo. Never fails: any
/// error past this point is folded into a degraded but well-formed outcome.
pub async fn detect_and_suggest(
    client: &Client,
    api_key: &str,
    endpoints: &ServiceEndpoints,
    photo: &DynamicImage,
    gender: Gender,
) -> StylistOutcome {
    match run_stylist_sequence(client, api_key, endpoints, photo, gender).await {
        Ok(outcome) => outcome,
        Err(err) => StylistOutcome {
            description: format!("Error: {}", err),
            suggestion: String::new(),
            outfit_image: None,
            search_links: String::new(),
            button_label: RUN_AGAIN_LABEL,
        },
    }
}

async fn run_stylist_sequence(
    client: &Client,
    api_key: &str,
    endpoints: &ServiceEndpoints,
    photo: &DynamicImage,
    gender: Gender,
) -> Result<StylistOutcome, Box<dyn Error>> {
    let photo_base64 = encode_image(photo)?;

    let response = request_completion(
        client,
        api_key,
        &endpoints.completions_url,
        &build_description_request(gender, &photo_base64),
    )
    .await?;
    let (description, suggestion) = split_description_suggestion(&response);

    let prompt = build_image_prompt(gender, &description, &suggestion);
    info!("image generation prompt: {}", prompt);

    let outfit_image =
        generate_outfit_image(client, api_key, &endpoints.generations_url, &prompt).await?;

    let (gallery, search_urls) = create_image_gallery(
        client,
        api_key,
        &endpoints.completions_url,
        &endpoints.search_base_url,
        &suggestion,
    )
    .await;
    debug!("matched {} product photos on GLAMI", gallery.len());

    Ok(StylistOutcome {
        description,
        suggestion,
        outfit_image: Some(outfit_image),
        search_links: format_search_links(&search_urls),
        button_label: RUN_AGAIN_LABEL,
    })
}
