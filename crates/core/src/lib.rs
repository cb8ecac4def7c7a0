pub mod card;
pub mod config;
pub mod deck;

pub use card::Flashcard;
pub use config::Config;
pub use deck::DeckSession;
