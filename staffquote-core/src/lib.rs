pub mod catalog;
pub mod error;
pub mod gate;
pub mod logger;
pub mod quote;
