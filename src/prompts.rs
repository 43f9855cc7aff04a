//! Prompts for chunk summarisation.
//!
//! Every prompt lives here so the wording can change without touching the
//! provider call in [`crate::model`] or the retry loop in
//! [`crate::pipeline::llm`], and so tests can check
//! the rendered prompt directly.
//!
//! Callers can override the system prompt via
//! [`crate::config::SummaryConfig::system_prompt`]; the length instruction is
//! appended either way so the bounds keep working with custom prompts.

use crate::config::SummaryBounds;

/// Default system prompt for summarising one chunk of a document.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are an expert summariser. You receive one excerpt of a longer document extracted from a PDF.

Write an abstractive summary of the excerpt:

1. CONTENT
   - Paraphrase the main points in your own words
   - Keep names, figures and dates exactly as they appear
   - Use only information present in the excerpt; do not speculate about the rest of the document

2. FORM
   - Plain prose, a single paragraph
   - No headings, bullet points or Markdown
   - Words may be run together or split across lines by the PDF extraction; read through it

3. OUTPUT FORMAT
   - Output ONLY the summary
   - Do NOT add a "Summary:" label, quotes or commentary"#;

/// Length instruction appended to the system prompt.
pub fn length_instruction(bounds: &SummaryBounds) -> String {
    format!(
        "\n\nLENGTH: between {} and {} words.",
        bounds.min_length, bounds.max_length
    )
}

/// Full system prompt for a run.
pub fn system_prompt(custom: Option<&str>, bounds: &SummaryBounds) -> String {
    let base = custom.unwrap_or(DEFAULT_SYSTEM_PROMPT);
    format!("{}{}", base.trim_end(), length_instruction(bounds))
}

/// Wrap a chunk in the user message sent to the model.
pub fn chunk_message(chunk: &str) -> String {
    format!("Excerpt:\n\n\"\"\"{}\"\"\"", chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_carries_bounds() {
        let prompt = system_prompt(None, &SummaryBounds::new(30, 120));
        assert!(prompt.starts_with("You are an expert summariser."));
        assert!(prompt.ends_with("between 30 and 120 words."));
    }

    #[test]
    fn custom_prompt_still_gets_bounds() {
        let prompt = system_prompt(Some("Summarise tersely.\n"), &SummaryBounds::default());
        assert_eq!(
            prompt,
            "Summarise tersely.\n\nLENGTH: between 50 and 150 words."
        );
    }

    #[test]
    fn chunk_message_quotes_chunk() {
        assert_eq!(chunk_message("abc"), "Excerpt:\n\n\"\"\"abc\"\"\"");
    }
}
