pub mod assets;
pub mod core;
pub mod hub;
pub mod persistence;

pub use self::core::HttpClientFactory;
