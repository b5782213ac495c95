//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click statistics
//! - [`NewLink`] - Creation input, separate from the stored record
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod link;

pub use link::{Link, NewLink};
