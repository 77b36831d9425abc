//! Generate code once with GeminiProvider.
//!
//! Run with: cargo run -p gemini-provider --example generate
//! Or with a custom prompt: cargo run -p gemini-provider --example generate -- Rust "Parse a CSV line"
//!
//! Make sure to set environment variables in .env:
//!   GEMINI_API_KEY - Gemini API key for authentication

use gemini_provider::{CodeProvider, GeminiProvider};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Language and prompt from command line args, or defaults
    let args: Vec<String> = env::args().collect();
    let (language, prompt) = if args.len() > 2 {
        (args[1].clone(), args[2..].join(" "))
    } else {
        (
            "Python".to_string(),
            "Write a function to reverse a string".to_string(),
        )
    };

    println!("Initializing GeminiProvider...");
    let provider = GeminiProvider::from_env()?;

    println!("Provider initialized: {}", provider.name());
    println!("API URL: {}", provider.config().api_url);
    println!("Model: {}", provider.config().model);
    println!();

    println!("Language: {}", language);
    println!("Prompt: \"{}\"", prompt);
    println!("Waiting for response...\n");

    let code = provider.generate(&prompt, &language).await?;

    println!("=== Code ===");
    println!("{}", code);
    println!("============");

    Ok(())
}
