//! cadence-engine: the transition engine and workflow service.
//!
//! Two layers:
//!
//! - [`transition`] -- the pure decision rules: pick the initial state of
//!   a definition, decide whether a requested action is legal from an
//!   instance's current state, and produce the moved instance with its
//!   appended history entry. No I/O, fully unit-testable.
//! - [`service::WorkflowService`] -- the seven public operations over a
//!   [`cadence_storage::WorkflowStore`]: create/get/list definitions,
//!   start/get/list instances, execute actions. Owns id generation (via
//!   [`IdGenerator`]) and serializes the read-decide-write sequence per
//!   instance so concurrent actions cannot race each other.
//!
//! Every refusal is a distinct [`EngineError`] variant; transport adapters
//! map [`EngineError::class`] to status codes without inspecting message
//! strings.

pub mod error;
pub mod ids;
pub mod service;
pub mod transition;

pub use error::{EngineError, ErrorClass};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use service::WorkflowService;
