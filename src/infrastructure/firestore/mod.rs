//! Firestore document store adapter.

mod client;
/// REST payloads.
pub mod dto;

pub use client::{FirestoreClient, FirestoreConfig};
