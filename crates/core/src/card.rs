use serde::{Deserialize, Serialize};

/// A single question/answer pair generated from a document.
///
/// Cards have no identity beyond their position in the deck; the
/// normalizer guarantees both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
