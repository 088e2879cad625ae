//! Waypoint - single-request HTTP responder
//!
//! Core library for the route table and HTTP connection handling.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
