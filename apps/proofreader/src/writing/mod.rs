// Writing helpers beyond proofreading: article drafting and humanizing.
// All upstream calls go through llm_client.

pub mod handlers;
pub mod prompts;
