// Proofreading presets: the catalog of models/contexts/instructions and the
// composer that turns a (context, instruction) pair into a system prompt.

pub mod catalog;
pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod selection;

pub use catalog::PresetCatalog;
pub use composer::{PromptComposer, PromptError};
