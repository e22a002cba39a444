use cadence_core::ValidationError;
use cadence_storage::StorageError;
use thiserror::Error;

/// Coarse error classification for transport adapters.
///
/// Adapters match on this, never on message text, to pick a status code.
/// Everything except `Storage` is client-recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Definition creation input violates a structural rule.
    InvalidRequest,
    /// A referenced definition, instance, or action id does not exist.
    NotFound,
    /// The entities exist but stored state is inconsistent (collaborator
    /// corruption: diagnosable, never a crash).
    IllegalState,
    /// The entities exist and are consistent, but the requested transition
    /// is refused.
    IllegalTransition,
    /// The persistence collaborator failed.
    Storage,
}

/// All errors the workflow service can return.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The definition request failed structural validation.
    #[error("invalid workflow definition: {0}")]
    InvalidDefinition(#[from] ValidationError),

    /// No definition stored under the requested id.
    #[error("workflow definition '{definition_id}' not found")]
    DefinitionNotFound { definition_id: String },

    /// No instance stored under the requested id.
    #[error("workflow instance '{instance_id}' not found")]
    InstanceNotFound { instance_id: String },

    /// The definition has no action with the requested id.
    #[error("action '{action_id}' not found in workflow definition '{definition_id}'")]
    ActionNotFound {
        action_id: String,
        definition_id: String,
    },

    /// The definition has no initial state. Cannot happen for a validated
    /// definition; kept as a refusal rather than a panic for definitions
    /// persisted through some other path.
    #[error("workflow definition '{definition_id}' has no initial state")]
    NoInitialState { definition_id: String },

    /// An instance references a definition that is no longer stored.
    /// Definitions are never deleted, so this indicates storage-level
    /// corruption.
    #[error(
        "workflow definition '{definition_id}' referenced by instance '{instance_id}' no longer exists"
    )]
    MissingDefinition {
        definition_id: String,
        instance_id: String,
    },

    /// An instance's current state is not part of its definition.
    #[error("current state '{state_id}' not found in workflow definition '{definition_id}'")]
    UnknownCurrentState {
        state_id: String,
        definition_id: String,
    },

    /// The requested action exists but is disabled.
    #[error("action '{action_id}' is disabled")]
    ActionDisabled { action_id: String },

    /// The instance sits in a final state; final states are absorbing.
    #[error("no actions may execute on final state '{state_id}'")]
    FinalState { state_id: String },

    /// The action does not list the instance's current state as a source.
    #[error("action '{action_id}' cannot be executed from state '{state_id}'")]
    WrongSourceState {
        action_id: String,
        state_id: String,
    },

    /// The action targets a state missing from the definition. Guaranteed
    /// absent for validated definitions; checked defensively.
    #[error("action '{action_id}' targets unknown state '{state_id}'")]
    UnknownTargetState {
        action_id: String,
        state_id: String,
    },

    /// The persistence collaborator failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl EngineError {
    /// Classify for status-code mapping.
    pub fn class(&self) -> ErrorClass {
        match self {
            EngineError::InvalidDefinition(_) => ErrorClass::InvalidRequest,
            EngineError::DefinitionNotFound { .. }
            | EngineError::InstanceNotFound { .. }
            | EngineError::ActionNotFound { .. } => ErrorClass::NotFound,
            EngineError::NoInitialState { .. }
            | EngineError::MissingDefinition { .. }
            | EngineError::UnknownCurrentState { .. }
            | EngineError::UnknownTargetState { .. } => ErrorClass::IllegalState,
            EngineError::ActionDisabled { .. }
            | EngineError::FinalState { .. }
            | EngineError::WrongSourceState { .. } => ErrorClass::IllegalTransition,
            EngineError::Storage(_) => ErrorClass::Storage,
        }
    }
}
