//! cadence-core: domain model and definition validator for cadence.
//!
//! A workflow *definition* is a named finite-state machine: a set of
//! states (exactly one initial, any number final) and a set of actions,
//! each declaring the states it may fire from and the single state it
//! moves to. A workflow *instance* is one execution of a definition,
//! holding a single current state and an append-only history.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`WorkflowDefinition`], [`State`], [`Action`] -- the static schema
//! - [`WorkflowInstance`], [`HistoryEntry`] -- one running execution
//! - [`DefinitionRequest`] -- loosely-typed creation input
//! - [`validate_definition()`] -- structural validation of a request
//! - [`ValidationError`] -- the validator's error type
//!
//! Validation happens exactly once, at creation time:
//! [`DefinitionRequest::into_definition`] is the only path from a request
//! to a [`WorkflowDefinition`], so every definition downstream code sees
//! is structurally sound.

pub mod error;
pub mod model;
pub mod request;
pub mod validate;

pub use error::ValidationError;
pub use model::{Action, HistoryEntry, State, WorkflowDefinition, WorkflowInstance};
pub use request::{ActionRequest, DefinitionRequest, StateRequest};
pub use validate::validate_definition;
