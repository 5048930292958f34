//! Business logic for the marketplace.
//!
//! Services own the business rules and depend on their collaborators through
//! traits, so the rules stay testable without a running database.

pub mod search;
pub mod stores;

pub use search::KeywordRecorder;
pub use stores::{CreateStore, StoreDetail, StoreRepository, StoreService, UserDirectory};
