//! Core library functions for the social network analyzer

pub mod analysis;
pub mod analyzer;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;
pub mod viz;

pub use analyzer::Analyzer;
pub use anyhow::{anyhow, Result};
pub use error::AnalysisError;
