// Prompt constants for the proofreading endpoints.
// Preset-driven prompts live in `presets`; this is the fixed persona used
// by the quick proofread endpoint, which takes no context or instruction.

/// System prompt for `POST /api/proofread`.
pub const QUICK_PROOFREAD_SYSTEM: &str = "You are an expert proofreader and editor. \
    Your task is to improve the text while maintaining its original meaning. \
    Focus on grammar, clarity, and flow. \
    Reply only with the corrected text, and nothing else; do not write explanations.";
