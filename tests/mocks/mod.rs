//! Test doubles for the prediction API.
//!
//! `server` runs a throwaway HTTP server on localhost for the real client to
//! talk to; `client` is an in-process client with scripted replies.

pub mod client;
pub mod server;

pub use client::*;
pub use server::*;
