//! Core processing modules
//!
//! Text normalization and the intent table that drive command dispatch.

pub mod intent;
pub mod text_normalizer;

pub use intent::{classify, Classification, IntentKind};
pub use text_normalizer::{normalize, NormalizedCommand};
