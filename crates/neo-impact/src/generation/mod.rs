//! Narrative generation: prompts and response normalization

pub mod narrative;
pub mod prompt;

pub use narrative::NarrativeAnalysis;
pub use prompt::PromptBuilder;
