mod completion;
mod constants;
mod gallery;
mod generator;
mod images;
mod print_help;
mod stylist;
mod utils;

use crate::constants::OUTFIT_IMAGE_PATH;
use crate::print_help::print_help;
use crate::stylist::{detect_and_suggest, Gender, ServiceEndpoints};
use crate::utils::create_spinner;
use colored::Colorize;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let api_key = env::var("OPENAI_API_KEY")?;
    let photo = image::open(&args[1])?;
    let gender = match args.get(2) {
        Some(raw) => raw.parse::<Gender>()?,
        None => Gender::Unisex,
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let spinner = create_spinner("magenta", "Styling your outfit...".to_string());
    let outcome =
        detect_and_suggest(&client, &api_key, &ServiceEndpoints::default(), &photo, gender).await;
    spinner.finish_and_clear();

    println!("{} {}", "Detected item:".bold().cyan(), outcome.description);
    if !outcome.suggestion.is_empty() {
        println!(
            "{}\n{}",
            "Suggested outfit:".bold().green(),
            outcome.suggestion
        );
    }
    if let Some(outfit_image) = &outcome.outfit_image {
        outfit_image.save(OUTFIT_IMAGE_PATH)?;
        println!(
            "{} {}",
            "Generated outfit saved to".bold().magenta(),
            OUTFIT_IMAGE_PATH
        );
    }
    if !outcome.search_links.is_empty() {
        println!(
            "{}\n{}",
            "Search links:".bold().yellow(),
            outcome.search_links
        );
    }
    println!("{}", outcome.button_label.italic());

    Ok(())
}
