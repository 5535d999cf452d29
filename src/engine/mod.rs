pub mod engine;
pub mod protocol;

pub mod llm_client;
pub mod pipeline;
pub mod prompt_builder;
pub mod transcript_parser;

#[cfg(test)]
mod test_support;
