use thiserror::Error;

/// Structural violations a [`crate::DefinitionRequest`] can carry.
///
/// One variant per rule, in the order the validator checks them; messages
/// name the offending ids so the client can fix the request without
/// guessing. Duplicate-id variants report every duplicate found, not just
/// the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("workflow definition id is required")]
    MissingId,

    #[error("workflow definition name is required")]
    MissingName,

    #[error("workflow definition must have at least one state")]
    NoStates,

    #[error("workflow definition must have an actions collection (it may be empty)")]
    MissingActions,

    #[error("duplicate state ids: {}", .ids.join(", "))]
    DuplicateStateIds { ids: Vec<String> },

    #[error("duplicate action ids: {}", .ids.join(", "))]
    DuplicateActionIds { ids: Vec<String> },

    #[error("workflow definition must have exactly one initial state, found {count}")]
    InitialStateCount { count: usize },

    #[error("action id is required")]
    ActionMissingId,

    #[error("action '{action_id}' has no name")]
    ActionMissingName { action_id: String },

    #[error("action '{action_id}' references unknown target state '{to_state}'")]
    UnknownToState { action_id: String, to_state: String },

    #[error("action '{action_id}' references unknown source state '{from_state}'")]
    UnknownFromState {
        action_id: String,
        from_state: String,
    },
}
