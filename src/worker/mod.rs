//! Background worker for seed loading.
//!
//! Reading and validating a seed file happens on Zellij's worker thread so a
//! large collection never stalls rendering.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::BlognestWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
