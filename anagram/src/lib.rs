mod bucket;
mod rehash;

pub mod canonical;
pub mod config;
pub mod error;
pub mod index;
pub mod words;

pub use canonical::{canonicalize, filter_letters, is_anagram, CanonicalKey};
pub use config::IndexConfig;
pub use error::IndexError;
pub use index::{AnagramIndex, Anagrams, IndexStats};
pub use words::{load_wordlist, read_wordlist};
