//! HTTP protocol implementation.
//!
//! This module implements a single-request HTTP/1.1 server: one request is
//! read per connection, one response is written, and the connection is
//! closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`identity`**: Client address resolution (`X-Real-IP` override)
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until \r\n\r\n arrives
//!        └──────┬──────┘
//!               │ Terminator found
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve client IP, route lookup
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼ Closed (always — no keep-alive)
//! ```
//!
//! A disconnect while Reading skips straight to Closed: the buffer is
//! discarded and no response is attempted.

pub mod connection;
pub mod identity;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
