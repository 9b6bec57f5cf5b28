//! Preset catalog: the fixed set of models, writing contexts, and editing instructions.
//!
//! Built once at startup and shared read-only (`Arc<PresetCatalog>`) by every handler.
//! Lookups are exact key matches; a miss is reported as `None` and turned into an
//! error by the composer.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::presets::prompts;

/// How a context's system prompt is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    /// The role prompt is used as-is, followed only by the closing directive.
    /// The instruction selection does not contribute.
    Verbatim,
    /// Role prompt, guideline bullets, instruction bullet, universal guidance.
    Templated,
}

/// A writing context the user can proofread for (academic, email, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPreset {
    /// Stable identifier; persisted by clients, never renamed.
    pub key: String,
    pub label: String,
    pub role_prompt: String,
    /// Context-specific style directives, rendered in order. `None` for
    /// contexts whose role prompt already carries its own style guide.
    pub guidelines: Option<Vec<String>>,
    pub render_mode: RenderMode,
}

impl ContextPreset {
    /// Whether the instruction selection affects prompts rendered for this context.
    pub fn uses_instruction(&self) -> bool {
        self.render_mode == RenderMode::Templated
    }
}

/// An editing instruction controlling how aggressively the text is revised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionPreset {
    pub key: String,
    pub prompt: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate context key '{0}'")]
    DuplicateContextKey(String),

    #[error("Duplicate instruction key '{0}'")]
    DuplicateInstructionKey(String),

    #[error("At least one model must be configured")]
    NoModels,
}

/// Ordered, immutable collections of models, contexts, and instructions.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    models: Vec<String>,
    contexts: Vec<ContextPreset>,
    instructions: Vec<InstructionPreset>,
}

impl PresetCatalog {
    /// Builds the catalog from the configured model list and the built-in preset tables.
    pub fn new(models: Vec<String>) -> Result<Self, CatalogError> {
        Self::with_presets(models, builtin_contexts(), builtin_instructions())
    }

    /// Builds a catalog from arbitrary tables, enforcing key uniqueness.
    pub fn with_presets(
        models: Vec<String>,
        contexts: Vec<ContextPreset>,
        instructions: Vec<InstructionPreset>,
    ) -> Result<Self, CatalogError> {
        if models.is_empty() {
            return Err(CatalogError::NoModels);
        }

        let mut seen = HashSet::new();
        for context in &contexts {
            if !seen.insert(context.key.as_str()) {
                return Err(CatalogError::DuplicateContextKey(context.key.clone()));
            }
        }

        let mut seen = HashSet::new();
        for instruction in &instructions {
            if !seen.insert(instruction.key.as_str()) {
                return Err(CatalogError::DuplicateInstructionKey(
                    instruction.key.clone(),
                ));
            }
        }

        Ok(Self {
            models,
            contexts,
            instructions,
        })
    }

    pub fn find_context(&self, key: &str) -> Option<&ContextPreset> {
        self.contexts.iter().find(|c| c.key == key)
    }

    pub fn find_instruction(&self, key: &str) -> Option<&InstructionPreset> {
        self.instructions.iter().find(|i| i.key == key)
    }

    /// The configured models, in configuration order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    pub fn contexts(&self) -> &[ContextPreset] {
        &self.contexts
    }

    pub fn instructions(&self) -> &[InstructionPreset] {
        &self.instructions
    }
}

fn templated(key: &str, label: &str, role_prompt: &str, guidelines: &[&str]) -> ContextPreset {
    ContextPreset {
        key: key.to_string(),
        label: label.to_string(),
        role_prompt: role_prompt.to_string(),
        guidelines: Some(guidelines.iter().map(|g| g.to_string()).collect()),
        render_mode: RenderMode::Templated,
    }
}

/// The built-in writing contexts, in display order.
pub fn builtin_contexts() -> Vec<ContextPreset> {
    vec![
        ContextPreset {
            key: "academic".to_string(),
            label: "Academic".to_string(),
            role_prompt: prompts::ACADEMIC_ROLE.to_string(),
            guidelines: None,
            render_mode: RenderMode::Verbatim,
        },
        templated(
            "instantMessage",
            "Instant Message",
            prompts::INSTANT_MESSAGE_ROLE,
            prompts::INSTANT_MESSAGE_GUIDELINES,
        ),
        templated("email", "Email", prompts::EMAIL_ROLE, prompts::EMAIL_GUIDELINES),
        templated("oral", "Oral", prompts::ORAL_ROLE, prompts::ORAL_GUIDELINES),
    ]
}

/// The built-in editing instructions, from lightest to heaviest touch.
pub fn builtin_instructions() -> Vec<InstructionPreset> {
    [
        ("basicProofread", "Proofread this text"),
        ("awkwardParts", "Fix only awkward parts"),
        ("streamline", "Streamline any awkward words or phrases"),
        ("polish", "Polish any awkward words or phrases"),
        ("trim", "Trim the fat"),
        ("clarityAndFlow", "Improve clarity and flow"),
        (
            "significantClarityAndFlow",
            "Significantly improving clarity and flow",
        ),
    ]
    .into_iter()
    .map(|(key, prompt)| InstructionPreset {
        key: key.to_string(),
        prompt: prompt.to_string(),
    })
    .collect()
}

#[cfg(test)]
pub(crate) fn test_catalog() -> PresetCatalog {
    let models = crate::config::DEFAULT_MODELS
        .iter()
        .map(|m| m.to_string())
        .collect();
    PresetCatalog::new(models).expect("built-in presets are valid")
}
