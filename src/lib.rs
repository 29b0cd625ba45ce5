//! Ghost Protocol Library
//!
//! Command interpreter for the Ghost Protocol assistant: normalization,
//! intent dispatch, service adapters and the interactive session loop.

pub mod config;
pub mod core;
pub mod dispatcher;
pub mod error;
pub mod input;
pub mod render;
pub mod services;
pub mod session;
pub mod speechd;
pub mod tts;
