pub mod loaders;
pub mod sentence;

pub use loaders::{load_all_decks, load_deck, load_json_deck, load_toml_deck};
pub use sentence::{SentenceDeck, SentencePair};
