//! Link repository implementations.
//!
//! Concrete implementations of the domain repository trait: PostgreSQL via
//! sqlx prepared statements, and an in-memory map for database-less runs and
//! hermetic tests.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL link storage
//! - [`MemoryLinkRepository`] - in-process store, nothing persisted

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
