//! Pure transition rules.
//!
//! Each workflow instance is a small deterministic automaton: its states
//! are the owning definition's state set, and the transition function is
//! "the requested action, if enabled, if its source set contains the
//! current state". The action id is always explicit in the request, so no
//! ambiguity resolution is needed even when several actions share a source
//! state.
//!
//! These functions never touch storage. The service loads the definition
//! and instance, calls in here, and persists the returned value — so a
//! refusal anywhere in the chain leaves stored state untouched.

use time::OffsetDateTime;

use cadence_core::{HistoryEntry, State, WorkflowDefinition, WorkflowInstance};

use crate::error::EngineError;

/// The state a new instance of `definition` starts in.
///
/// Validation guarantees exactly one initial state for every definition it
/// admitted; a definition persisted through some other path yields
/// [`EngineError::NoInitialState`] instead of a crash.
pub fn initial_state(definition: &WorkflowDefinition) -> Result<&State, EngineError> {
    definition
        .initial_state()
        .ok_or_else(|| EngineError::NoInitialState {
            definition_id: definition.id.clone(),
        })
}

/// Decide whether `action_id` may fire on `instance` and produce the moved
/// instance.
///
/// The precondition chain runs in a fixed order and the first failing
/// check is the single reported error:
///
/// 1. the action must exist in the definition,
/// 2. the action must be enabled,
/// 3. the current state must exist in the definition (consistency check),
/// 4. the current state must not be final — final states are absorbing,
/// 5. the action's source set must contain the current state,
/// 6. the action's target must exist in the definition (consistency check).
///
/// On success the returned instance has one appended history entry (with
/// the action's name snapshotted at execution time), the new current
/// state, and `last_modified = now`. The input instance is untouched.
pub fn apply_action(
    definition: &WorkflowDefinition,
    instance: &WorkflowInstance,
    action_id: &str,
    now: OffsetDateTime,
) -> Result<WorkflowInstance, EngineError> {
    let action = definition
        .action(action_id)
        .ok_or_else(|| EngineError::ActionNotFound {
            action_id: action_id.to_string(),
            definition_id: definition.id.clone(),
        })?;

    if !action.enabled {
        return Err(EngineError::ActionDisabled {
            action_id: action.id.clone(),
        });
    }

    let current = definition.state(&instance.current_state_id).ok_or_else(|| {
        EngineError::UnknownCurrentState {
            state_id: instance.current_state_id.clone(),
            definition_id: definition.id.clone(),
        }
    })?;

    if current.is_final {
        return Err(EngineError::FinalState {
            state_id: current.id.clone(),
        });
    }

    if !action.from_states.iter().any(|s| *s == current.id) {
        return Err(EngineError::WrongSourceState {
            action_id: action.id.clone(),
            state_id: current.id.clone(),
        });
    }

    let target = definition
        .state(&action.to_state)
        .ok_or_else(|| EngineError::UnknownTargetState {
            action_id: action.id.clone(),
            state_id: action.to_state.clone(),
        })?;

    let mut moved = instance.clone();
    moved.history.push(HistoryEntry {
        action_id: action.id.clone(),
        action_name: action.name.clone(),
        from_state_id: current.id.clone(),
        to_state_id: target.id.clone(),
        timestamp: now,
    });
    moved.current_state_id = target.id.clone();
    moved.last_modified = now;
    Ok(moved)
}
