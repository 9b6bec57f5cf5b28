// Proofreading endpoints: preset-driven completion and the quick fixed-persona proofread.
// All upstream calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod upstream;
