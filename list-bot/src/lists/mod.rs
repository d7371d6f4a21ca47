//! List storage: the in-memory collection and its JSON document

pub mod persistence;
pub mod store;

pub use store::ListStore;
