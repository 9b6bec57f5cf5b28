// Prompt templates for the writing helpers.

use serde::Deserialize;

/// Target length of a generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    Medium,
    Long,
}

impl ArticleLength {
    pub fn word_count(self) -> u32 {
        match self {
            ArticleLength::Short => 300,
            ArticleLength::Medium => 600,
            ArticleLength::Long => 1000,
        }
    }

    /// Token budget: roughly four tokens per word plus a 20% margin.
    pub fn max_tokens(self) -> u32 {
        (self.word_count() * 4 * 12).div_ceil(10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStyle {
    Formal,
    Casual,
}

impl ArticleStyle {
    fn tone(self) -> &'static str {
        match self {
            ArticleStyle::Formal => "formal language and professional tone",
            ArticleStyle::Casual => "casual language and conversational tone",
        }
    }
}

pub const GENERATION_TEMPERATURE: f32 = 0.7;
pub const GENERATION_TOP_P: f32 = 0.9;
pub const HUMANIZE_MAX_TOKENS: u32 = 1000;

pub fn article_system_prompt(style: ArticleStyle) -> String {
    format!(
        "You are an expert article writer. Write articles that are engaging, informative, \
         and well-structured. Use {}.",
        style.tone()
    )
}

pub fn article_user_prompt(topic: &str, length: ArticleLength) -> String {
    format!(
        "Write an article about \"{topic}\". The article should be approximately {} words long.",
        length.word_count()
    )
}

/// Humanize prompt template. Replace `{text}` before sending.
pub const HUMANIZE_PROMPT_TEMPLATE: &str = "\
Rewrite the following text to make it more human-like while preserving its meaning and intent. \
Make it flow naturally and vary the sentence structure:

{text}

Rewritten text:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts() {
        assert_eq!(ArticleLength::Short.word_count(), 300);
        assert_eq!(ArticleLength::Medium.word_count(), 600);
        assert_eq!(ArticleLength::Long.word_count(), 1000);
    }

    #[test]
    fn test_max_tokens_budget() {
        assert_eq!(ArticleLength::Short.max_tokens(), 1440);
        assert_eq!(ArticleLength::Medium.max_tokens(), 2880);
        assert_eq!(ArticleLength::Long.max_tokens(), 4800);
    }

    #[test]
    fn test_style_selects_tone() {
        assert!(article_system_prompt(ArticleStyle::Formal).contains("professional tone"));
        assert!(article_system_prompt(ArticleStyle::Casual).contains("conversational tone"));
    }

    #[test]
    fn test_user_prompt_quotes_topic() {
        let prompt = article_user_prompt("Rust ownership", ArticleLength::Medium);
        assert!(prompt.contains("\"Rust ownership\""));
        assert!(prompt.contains("approximately 600 words"));
    }

    #[test]
    fn test_humanize_template_has_placeholder() {
        assert!(HUMANIZE_PROMPT_TEMPLATE.contains("{text}"));
        assert!(HUMANIZE_PROMPT_TEMPLATE.ends_with("Rewritten text:"));
    }
}
