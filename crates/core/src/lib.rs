//! Domain core of the quotes service.
//!
//! Holds the quote model, the concurrent in-memory [`store`], and the
//! [`service`] layer that validates requests before they reach the store.
//! Nothing in this crate performs I/O or logs; every failure is returned
//! to the caller as a [`error::CoreError`].

pub mod error;
pub mod quote;
pub mod service;
pub mod store;
pub mod types;
