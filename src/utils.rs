use base64;
use image::{DynamicImage, ImageFormat};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::{error::Error, io::Cursor};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Re-encodes the photo as JPEG in memory and returns it base64-encoded,
/// ready to embed as an inline data URL.
pub fn encode_image(photo: &DynamicImage) -> Result<String, Box<dyn Error>> {
    let mut buffer = Cursor::new(Vec::new());
    photo.write_to(&mut buffer, ImageFormat::Jpeg)?;
    Ok(base64::encode(buffer.into_inner()))
}

/// Uppercases the first letter and lowercases the rest, e.g.
/// "black trousers" -> "Black trousers".
pub fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
