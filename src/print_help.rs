use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " AI Fashion Stylist ".yellow());
    println!("Usage:");
    println!(
        "  {} <image_path> [gender]",
        "fashion-stylist".bold().green()
    );
    println!("\nArguments:");
    println!(
        "  {}  Path to a photo of a fashion item.",
        "<image_path>".bold().cyan()
    );
    println!(
        "  {}      Target gender: men, women or unisex (default: unisex).",
        "[gender]".bold().magenta()
    );
    println!("\nOptions:");
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nExamples:");
    println!("  {} red_scarf.jpg", "fashion-stylist".bold().green());
    println!(
        "  {} leather_jacket.png women",
        "fashion-stylist".bold().green()
    );
    println!("\nThe stylist describes the item, suggests three matching outfit");
    println!("pieces, generates a model photo wearing them and prints GLAMI");
    println!("search links. Requires OPENAI_API_KEY in the environment or a");
    println!(".env file.");
    println!("{:━^60}", "".yellow());
}
