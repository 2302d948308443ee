// Resume screening: PDF text extraction plus a single structured model call.
// All LLM calls go through llm_client; no direct Gemini requests here.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;

#[cfg(test)]
pub mod test_support;
