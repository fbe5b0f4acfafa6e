//! Class documentation extractors
//!
//! # Architecture
//!
//! - `base` - shared extractor state, model types and diagnostics
//! - `javascript` - JSDoc-aware JavaScript class extractor
//! - `manager` - ExtractorManager public API and the parse tiers

pub mod base;
pub mod javascript;
pub mod manager;
