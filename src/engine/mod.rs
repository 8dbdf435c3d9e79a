// src/engine/mod.rs

pub mod dispatcher;
pub mod request;
pub mod result;

// Re-export main types for convenience
pub use dispatcher::FactorizationEngine;
pub use request::FactorizationRequest;
pub use result::{FactorizationResult, SerializableFactorization};
