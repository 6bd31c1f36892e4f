//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_business_repo;

pub use file_business_repo::FileBusinessRepository;
