pub mod benchmark;
pub mod engagement;
pub mod file_formats;
pub mod lead;
pub mod quote;
