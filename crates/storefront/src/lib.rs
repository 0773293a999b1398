//! Remix Beats storefront library.
//!
//! Exposes the API surface as a library so handlers and services can be
//! unit tested without spinning up the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod search;
pub mod services;
pub mod state;
