//! Token file reading and boundary validation

mod file_reader;

pub use file_reader::TokenFileReader;
