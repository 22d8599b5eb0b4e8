// Resume ↔ job analysis pipeline.
// Flow per job: prompt_builder → invoker → sanitizer → decoder, driven by orchestrator.
// All model calls go through the `ModelInvoker` capability: never a concrete client.

pub mod decoder;
pub mod extract;
pub mod handlers;
pub mod invoker;
pub mod orchestrator;
pub mod prompt_builder;
pub mod prompts;
pub mod sanitizer;
