// Prompt/response layer: request model, validation, prompt construction,
// the single generation call, the JSON endpoint and the table parser.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod validation;
