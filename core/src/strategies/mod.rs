#![deny(missing_docs)]

//! # Strategies
//!
//! This module defines the architecture for pluggable backend generation.
//!
//! - **traits**: Defines `BackendStrategy` for implementing new frameworks.
//! - **fastapi**: The implementation for FastAPI routers.

pub mod fastapi;
pub mod traits;

// Re-export for easier access downstream
pub use fastapi::FastApiStrategy;
pub use traits::BackendStrategy;

/// Target frameworks the generator knows how to emit routers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// FastAPI (`fastapi`).
    FastApi,
}

impl Framework {
    /// Recognizes a configured framework identifier (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fastapi" => Some(Framework::FastApi),
            _ => None,
        }
    }

    /// The canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            Framework::FastApi => "fastapi",
        }
    }
}
