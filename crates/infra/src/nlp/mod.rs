//! NLP adapters backing the name-extraction port

pub mod lexicon;

pub use lexicon::LexiconNameModel;
