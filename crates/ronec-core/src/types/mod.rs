pub mod corpus;
pub mod sentence;

pub use corpus::{Corpus, ReadStats};
pub use sentence::{Sentence, Token};
