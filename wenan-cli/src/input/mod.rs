//! Input handling: file reading and corpus paragraph extraction

pub mod corpus;
pub mod file_reader;

pub use corpus::{extract_paragraphs, read_corpus};
pub use file_reader::FileReader;
