pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const CHAT_MODEL: &str = "gpt-4.1-nano";
pub const DALLE_API_URL: &str = "https://api.openai.com/v1/images/generations";
pub const DALLE_MODEL: &str = "dall-e-3";
pub const OUTFIT_IMAGE_SIZE: &str = "1024x1024";
pub const OUTFIT_IMAGE_QUALITY: &str = "standard";
pub const OUTFIT_IMAGE_PATH: &str = "outfit.png";
pub const DESCRIPTION_MAX_TOKENS: u32 = 250;
pub const KEYWORD_MAX_TOKENS: u32 = 100;
pub const GLAMI_BASE_URL: &str = "https://www.glami.cz";
pub const GLAMI_IMAGE_HOST: &str = "glami.cz";
pub const SCRAPE_USER_AGENT: &str = "Mozilla/5.0";
pub const SCRAPE_TIMEOUT_SECS: u64 = 10;
pub const RUN_AGAIN_LABEL: &str = "Run again (if you get errors or want different results)";
