//! Query system for hyponym and frequency lookups.

pub mod collector;
pub mod hyponym;

pub use self::collector::TopWordsCollector;
pub use self::hyponym::{HyponymQuery, HyponymSearcher};
