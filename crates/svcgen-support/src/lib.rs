//! Runtime library for code generated by `svcgen`.
//!
//! Generated shapes use [`Field`] for optional attributes and implement
//! [`Serializable`]. Generated resources carry a [`ClientHandle`], implement
//! [`Resource`] and, when they expose a status attribute, [`StatusResource`]
//! so the shared [`Waiter`] loop can poll them.

mod body;
mod client;
mod error;
mod field;
mod types;
mod waiter;

// Generated code derives through these so it only needs this crate.
pub use bon;
pub use serde;

pub use body::{RequestBody, Serializable, from_response, merge_response, response_field};
pub use client::{ApiClient, ClientError, ClientHandle, SharedClient};
pub use error::ResourceError;
pub use field::Field;
pub use types::{Blob, Timestamp};
pub use waiter::{
  DEFAULT_POLL_INTERVAL, Resource, StatusResource, WaitConfig, WaitState, Waiter, wait_for_status,
  wait_until_terminal,
};
