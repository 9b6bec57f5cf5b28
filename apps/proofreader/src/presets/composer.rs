//! Prompt composer. Renders the system prompt for a (context, instruction) pair.
//!
//! Pure and deterministic: the same keys always produce the same string. Unknown keys
//! are rejected outright, never replaced by a default preset.

use std::sync::Arc;

use thiserror::Error;

use crate::presets::catalog::{ContextPreset, InstructionPreset, PresetCatalog, RenderMode};
use crate::presets::prompts::{APPROACH_HEADER, CLOSING_DIRECTIVE, UNIVERSAL_GUIDANCE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Invalid context key '{0}'")]
    InvalidContextKey(String),

    #[error("Invalid instruction key '{0}'")]
    InvalidInstructionKey(String),
}

#[derive(Debug, Clone)]
pub struct PromptComposer {
    catalog: Arc<PresetCatalog>,
}

impl PromptComposer {
    pub fn new(catalog: Arc<PresetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Renders the system prompt for `context_key` and `instruction_key`.
    ///
    /// Both keys are validated before anything is rendered, including for
    /// `Verbatim` contexts that ignore the instruction.
    pub fn compose(&self, context_key: &str, instruction_key: &str) -> Result<String, PromptError> {
        let context = self
            .catalog
            .find_context(context_key)
            .ok_or_else(|| PromptError::InvalidContextKey(context_key.to_string()))?;

        let instruction = self
            .catalog
            .find_instruction(instruction_key)
            .ok_or_else(|| PromptError::InvalidInstructionKey(instruction_key.to_string()))?;

        Ok(match context.render_mode {
            RenderMode::Verbatim => render_verbatim(context),
            RenderMode::Templated => render_templated(context, instruction),
        })
    }
}

fn render_verbatim(context: &ContextPreset) -> String {
    format!("{}\n\n{CLOSING_DIRECTIVE}", context.role_prompt)
}

fn render_templated(context: &ContextPreset, instruction: &InstructionPreset) -> String {
    let mut guidelines: Vec<String> = context.guidelines.clone().unwrap_or_default();
    guidelines.push(as_sentence(&instruction.prompt));

    let bullets = guidelines
        .iter()
        .map(|g| format!("- {g}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{role}\n\n{APPROACH_HEADER}\n{bullets}\n\n{UNIVERSAL_GUIDANCE}\n\n{CLOSING_DIRECTIVE}",
        role = context.role_prompt,
    )
}

/// Appends a period to an instruction phrase so it reads as a full bullet.
///
/// A phrase that already ends in `.` is kept as-is (after trimming trailing
/// whitespace), so the bullet never ends in `..`.
fn as_sentence(phrase: &str) -> String {
    let phrase = phrase.trim_end();
    if phrase.ends_with('.') {
        phrase.to_string()
    } else {
        format!("{phrase}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::catalog::test_catalog;
    use crate::presets::prompts::EMAIL_ROLE;

    fn composer() -> PromptComposer {
        PromptComposer::new(Arc::new(test_catalog()))
    }

    #[test]
    fn test_email_trim_scenario() {
        let prompt = composer().compose("email", "trim").unwrap();
        assert!(prompt.starts_with(EMAIL_ROLE));
        assert!(prompt.contains("\n- Employing a professional tone suitable for business emails.\n"));
        assert!(prompt.contains("\n- Trim the fat.\n"));
        assert!(prompt.ends_with(CLOSING_DIRECTIVE));

        let trim_at = prompt.find("- Trim the fat.").unwrap();
        let closing_at = prompt.find(CLOSING_DIRECTIVE).unwrap();
        assert!(trim_at < closing_at);
    }

    #[test]
    fn test_oral_polish_scenario() {
        let prompt = composer().compose("oral", "polish").unwrap();
        assert!(prompt.contains("- Using language that would sound natural when spoken aloud.\n"));
        assert!(prompt.contains("- Favoring short sentences that are easy to follow by ear.\n"));
        assert!(prompt.contains("- Polish any awkward words or phrases.\n"));
    }

    #[test]
    fn test_unknown_context_rejected() {
        let err = composer().compose("nonexistent", "basicProofread").unwrap_err();
        assert_eq!(err, PromptError::InvalidContextKey("nonexistent".to_string()));
    }

    #[test]
    fn test_unknown_context_rejected_regardless_of_instruction() {
        let err = composer().compose("nonexistent", "also-missing").unwrap_err();
        assert!(matches!(err, PromptError::InvalidContextKey(_)));
    }

    #[test]
    fn test_unknown_instruction_rejected() {
        for context in ["academic", "instantMessage", "email", "oral"] {
            let err = composer().compose(context, "rewriteEverything").unwrap_err();
            assert_eq!(
                err,
                PromptError::InvalidInstructionKey("rewriteEverything".to_string())
            );
        }
    }

    #[test]
    fn test_academic_ignores_instruction() {
        let c = composer();
        let trim = c.compose("academic", "trim").unwrap();
        let basic = c.compose("academic", "basicProofread").unwrap();
        assert_eq!(trim, basic);

        for instruction in c.catalog().instructions() {
            assert_eq!(c.compose("academic", &instruction.key).unwrap(), trim);
        }
    }

    #[test]
    fn test_academic_is_role_plus_closing() {
        let c = composer();
        let academic = c.catalog().find_context("academic").unwrap();
        let prompt = c.compose("academic", "polish").unwrap();
        assert_eq!(
            prompt,
            format!("{}\n\n{}", academic.role_prompt, CLOSING_DIRECTIVE)
        );
        assert!(!prompt.contains(APPROACH_HEADER));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let c = composer();
        for context in c.catalog().contexts() {
            for instruction in c.catalog().instructions() {
                let first = c.compose(&context.key, &instruction.key).unwrap();
                let second = c.compose(&context.key, &instruction.key).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_every_templated_prompt_lists_guidelines_in_order() {
        let c = composer();
        for context in c.catalog().contexts().iter().filter(|ctx| ctx.uses_instruction()) {
            for instruction in c.catalog().instructions() {
                let prompt = c.compose(&context.key, &instruction.key).unwrap();

                let mut cursor = prompt.find(APPROACH_HEADER).expect("header present");
                for guideline in context.guidelines.as_deref().unwrap_or_default() {
                    let line = format!("- {guideline}");
                    let at = prompt[cursor..]
                        .find(&line)
                        .unwrap_or_else(|| panic!("{} missing {line}", context.key));
                    cursor += at + line.len();
                }

                let instruction_line = format!("- {}.", instruction.prompt);
                assert!(prompt[cursor..].contains(&instruction_line));
                assert!(prompt.contains(UNIVERSAL_GUIDANCE));
                assert!(prompt.ends_with(CLOSING_DIRECTIVE));
            }
        }
    }

    #[test]
    fn test_templated_context_without_guidelines_only_lists_instruction() {
        let bare = ContextPreset {
            key: "notes".to_string(),
            label: "Notes".to_string(),
            role_prompt: "You edit personal notes.".to_string(),
            guidelines: None,
            render_mode: RenderMode::Templated,
        };
        let catalog = PresetCatalog::with_presets(
            vec!["m".to_string()],
            vec![bare],
            crate::presets::catalog::builtin_instructions(),
        )
        .unwrap();
        let prompt = PromptComposer::new(Arc::new(catalog))
            .compose("notes", "trim")
            .unwrap();
        assert!(prompt.contains(&format!("{APPROACH_HEADER}\n- Trim the fat.\n\n")));
    }

    #[test]
    fn test_as_sentence_does_not_double_period() {
        assert_eq!(as_sentence("Trim the fat"), "Trim the fat.");
        assert_eq!(as_sentence("Trim the fat."), "Trim the fat.");
        assert_eq!(as_sentence("Trim the fat  "), "Trim the fat.");
    }
}
