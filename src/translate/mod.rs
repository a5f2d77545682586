pub mod catalog;
pub mod client;
pub mod interface;

pub use client::TranslationClient;
pub use interface::{TranslatePayload, TranslateTransport, TranslationRequest, TranslationResult};
