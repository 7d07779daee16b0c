//! # skillrec API
//!
//! HTTP boundary for the skillrec recommender: a landing page and a single
//! form-encoded recommendation endpoint.

pub mod rest;

pub use rest::RestApi;
