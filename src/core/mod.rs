//! Core data access - framework-agnostic catalog readers.
//!
//! Every reader is read-only, filters out inactive rows, and returns `Ok(None)` or an
//! empty list for absent data. Only store failures are errors.

/// Category reader
pub mod category;
/// Related-row loading and price conversion shared by the product readers
pub mod enrichment;
/// Raw image projection
pub mod image;
/// Product reader
pub mod product;
/// Sub-category reader
pub mod sub_category;
