//! Question-answering client
//!
//! Sends one question, optionally grounded in a context blob, to the remote
//! endpoint and parses its fixed-shape JSON answer. One attempt per call:
//! there is no retry and no backoff.

mod client;
mod transport;
mod types;

pub use client::{QaClient, CONTEXT_PREAMBLE};
pub use transport::{HttpTransport, Transport};
pub use types::{QaRequest, QaResponse, Reference};
