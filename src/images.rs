use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct OpenAiImageRequestBody {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    pub quality: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageGeneration {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageApiResponse {
    pub data: Vec<ImageGeneration>,
}
