pub mod decades;
pub mod driver;
pub mod emotion;
pub mod errors;
pub mod frequency;
mod information;
pub mod input;
pub mod lemmatizer;
pub mod lexicon;
pub mod loader;
pub mod normalizer;
pub mod output;
mod parallelism;
pub mod sentiment;
pub mod stopwords;
pub mod summary;
