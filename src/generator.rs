use crate::constants::{DALLE_MODEL, OUTFIT_IMAGE_QUALITY, OUTFIT_IMAGE_SIZE};
use crate::images::{ImageApiResponse, OpenAiImageRequestBody};
use crate::utils::build_headers;
use image::DynamicImage;
use log::info;
use reqwest::Client;
use std::{error::Error, time::Instant};

/// Requests one generated outfit photo, fetches it from the returned URL and
/// decodes it. Failures propagate; the orchestrator's guard downgrades them.
pub async fn generate_outfit_image(
    client: &Client,
    api_key: &str,
    api_url: &str,
    prompt: &str,
) -> Result<DynamicImage, Box<dyn Error>> {
    info!("generating an outfit image");
    let started = Instant::now();

    let request_body = OpenAiImageRequestBody {
        model: DALLE_MODEL.to_string(),
        prompt: prompt.to_string(),
        n: 1,
        size: OUTFIT_IMAGE_SIZE.to_string(),
        quality: OUTFIT_IMAGE_QUALITY.to_string(),
    };
    let headers = build_headers(api_key)?;
    let response = client
        .post(api_url)
        .headers(headers)
        .json(&request_body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        return Err(format!("image generation failed with status {}: {}", status, message).into());
    }

    let response_body = response.text().await?;
    let api_response: ImageApiResponse = serde_json::from_str(&response_body)?;
    let image_url = api_response
        .data
        .into_iter()
        .next()
        .map(|generation| generation.url)
        .ok_or("no image in generation response")?;

    let image_bytes = client.get(&image_url).send().await?.bytes().await?;
    let outfit = image::load_from_memory(&image_bytes)?;

    info!(
        "image generated in {:.2} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(outfit)
}
