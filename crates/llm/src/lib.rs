pub mod generate;
pub mod normalize;
pub mod provider;
pub mod providers;

pub use generate::{FlashcardGenerator, GenerateError};
pub use normalize::{normalize, NormalizeError};
pub use provider::{LlmError, LlmProvider};
