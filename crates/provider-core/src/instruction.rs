//! Instruction building and output cleanup shared by all providers.

use sha2::{Digest, Sha256};

use crate::error::ProviderError;

/// Build the full instruction sent to a provider.
///
/// The instruction asks for runnable code in `language`, asks for code only,
/// and then carries the user's prompt unchanged.
pub fn build_instruction(prompt: &str, language: &str) -> String {
    format!(
        "You are an expert code generator.\n\
         Generate clean, efficient, runnable code in {language}.\n\
         Return ONLY code, no explanations.\n\
         \n\
         Task: {prompt}"
    )
}

/// Trim provider output, rejecting an empty result.
pub fn clean_output(text: &str) -> Result<String, ProviderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::failed("provider returned no code"));
    }
    Ok(trimmed.to_string())
}

/// Stable SHA-256 fingerprint of the instruction template.
///
/// Logged at startup so deployments can tell which template they run.
pub fn instruction_fingerprint() -> String {
    let template = build_instruction("{prompt}", "{language}");
    let mut hasher = Sha256::new();
    hasher.update(template.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_language_and_keeps_prompt() {
        let prompt = "  Write a function to reverse a string\n(keep it short)";
        let instruction = build_instruction(prompt, "C++");

        assert!(instruction.contains("runnable code in C++."));
        assert!(instruction.contains("Return ONLY code"));
        assert!(instruction.ends_with(&format!("Task: {}", prompt)));
    }

    #[test]
    fn test_clean_output_trims() {
        let code = clean_output("\n\n  fn main() {}\n  ").unwrap();
        assert_eq!(code, "fn main() {}");

        let inner = clean_output(" a\n\n  b ").unwrap();
        assert_eq!(inner, "a\n\n  b");
    }

    #[test]
    fn test_clean_output_rejects_blank() {
        assert!(matches!(clean_output(" \n\t"), Err(ProviderError::Failed(_))));
        assert!(matches!(clean_output(""), Err(ProviderError::Failed(_))));
    }

    #[test]
    fn test_fingerprint_stable() {
        let first = instruction_fingerprint();
        let second = instruction_fingerprint();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }
}
