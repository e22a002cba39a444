//! Validated domain entities.
//!
//! These types are DISTINCT from the request carriers in [`crate::request`]:
//! a `WorkflowDefinition` can only be obtained through validation, so code
//! holding one may assume the structural invariants (unique ids, exactly
//! one initial state, all action references resolvable) without rechecking.
//!
//! All types serialize with camelCase field names and RFC 3339 timestamps,
//! the wire format of the HTTP API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named node in a workflow definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Unique within the owning definition.
    pub id: String,
    pub name: String,
    /// Entry point for new instances. Exactly one state per definition.
    pub is_initial: bool,
    /// Final states are absorbing: no action may fire from them.
    pub is_final: bool,
    pub enabled: bool,
    pub description: Option<String>,
}

/// A transition rule: fires from any of `from_states`, lands on `to_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Unique within the owning definition.
    pub id: String,
    pub name: String,
    /// Disabled actions exist structurally but never execute.
    pub enabled: bool,
    /// Source states this action may fire from. An empty list is legal:
    /// the action is simply unreachable.
    pub from_states: Vec<String>,
    /// The single target state.
    pub to_state: String,
    pub description: Option<String>,
}

/// The static schema of a workflow. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    /// Globally unique, caller-supplied.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub states: Vec<State>,
    pub actions: Vec<Action>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl WorkflowDefinition {
    /// Look up a state by id.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Look up an action by id.
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// The state new instances start in.
    ///
    /// Validation guarantees exactly one for any definition it admitted;
    /// `None` means the definition reached storage through some other
    /// path and callers must refuse to start instances rather than panic.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_initial)
    }
}

/// One running execution of a workflow definition.
///
/// Holds a weak reference to its definition (`definition_id`, resolved
/// through the store on every use) and exactly one current state. Only
/// the transition engine mutates an instance, and a successful action
/// changes exactly the (`current_state_id`, `history`, `last_modified`)
/// group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInstance {
    pub id: String,
    pub definition_id: String,
    pub current_state_id: String,
    /// Append-only; insertion order is chronological order.
    pub history: Vec<HistoryEntry>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

/// Record of one executed action. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub action_id: String,
    /// Snapshot of the action's name at execution time, not a live
    /// reference into the definition.
    pub action_name: String,
    pub from_state_id: String,
    pub to_state_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
