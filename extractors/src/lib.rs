//! Extractors Crate
//!
//! This crate turns unstructured search-result documents into structured
//! leads. It is pure: no I/O, no state, every extraction branch falls back
//! to a sentinel value instead of failing.
//!
//! # Architecture
//!
//! - **Types**: `Lead` and friends are defined in the `shared-types` crate
//! - **Implementations**: pattern tables and the extractor live here
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{qualify_leads, ContactInfoExtractor};
//!
//! let extractor = ContactInfoExtractor::new();
//! let leads: Vec<_> = results.iter().map(|r| extractor.extract(r)).collect();
//! let leads = qualify_leads(leads, 10);
//! ```

pub mod contact_info;

// Re-export commonly used items
pub use contact_info::{qualify_leads, ContactInfoExtractor};
