pub mod card;
pub mod charts;

pub use card::{Card, callout};
