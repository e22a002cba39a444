//! Loosely-typed request carriers for definition creation.
//!
//! The create endpoint accepts whatever shape the client sent; these types
//! absorb it without failing deserialization. Missing strings default to
//! `""`, missing collections to `None`, missing `enabled` flags to `true`,
//! so that structural problems surface as [`ValidationError`]s with
//! actionable messages instead of opaque serde errors.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ValidationError;
use crate::model::{Action, State, WorkflowDefinition};
use crate::validate::validate_definition;

fn default_enabled() -> bool {
    true
}

/// Creation input for a workflow definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefinitionRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// `None` when the field was absent; distinct from an empty list.
    pub states: Option<Vec<StateRequest>>,
    /// `None` when the field was absent; an empty list is valid, a missing
    /// one is not.
    pub actions: Option<Vec<ActionRequest>>,
}

/// One state in a [`DefinitionRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_initial: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// One action in a [`DefinitionRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub from_states: Vec<String>,
    #[serde(default)]
    pub to_state: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl DefinitionRequest {
    /// Validate and construct the immutable [`WorkflowDefinition`].
    ///
    /// This is the only way to obtain a `WorkflowDefinition` from client
    /// input; an unvalidated request never reaches storage.
    pub fn into_definition(
        self,
        created_at: OffsetDateTime,
    ) -> Result<WorkflowDefinition, ValidationError> {
        validate_definition(&self)?;

        // Both collections are present: the validator rejected the
        // request otherwise.
        let states = self
            .states
            .unwrap_or_default()
            .into_iter()
            .map(|s| State {
                id: s.id,
                name: s.name,
                is_initial: s.is_initial,
                is_final: s.is_final,
                enabled: s.enabled,
                description: s.description,
            })
            .collect();
        let actions = self
            .actions
            .unwrap_or_default()
            .into_iter()
            .map(|a| Action {
                id: a.id,
                name: a.name,
                enabled: a.enabled,
                from_states: a.from_states,
                to_state: a.to_state,
                description: a.description,
            })
            .collect();

        Ok(WorkflowDefinition {
            id: self.id,
            name: self.name,
            description: self.description,
            states,
            actions,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let request: DefinitionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.id, "");
        assert!(request.states.is_none());
        assert!(request.actions.is_none());
    }

    #[test]
    fn enabled_defaults_to_true() {
        let state: StateRequest =
            serde_json::from_str(r#"{"id": "s1", "name": "S1", "isInitial": true}"#).unwrap();
        assert!(state.enabled);

        let action: ActionRequest =
            serde_json::from_str(r#"{"id": "a1", "name": "A1", "toState": "s1"}"#).unwrap();
        assert!(action.enabled);
        assert!(action.from_states.is_empty());
    }

    #[test]
    fn into_definition_preserves_declaration_order() {
        let request: DefinitionRequest = serde_json::from_str(
            r#"{
                "id": "wf1",
                "name": "Flow",
                "states": [
                    {"id": "b", "name": "B", "isInitial": true},
                    {"id": "a", "name": "A"}
                ],
                "actions": []
            }"#,
        )
        .unwrap();

        let definition = request
            .into_definition(OffsetDateTime::UNIX_EPOCH)
            .unwrap();
        let ids: Vec<&str> = definition.states.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(definition.created_at, OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn into_definition_rejects_invalid_input() {
        let request: DefinitionRequest = serde_json::from_str(r#"{"id": "wf1"}"#).unwrap();
        let err = request
            .into_definition(OffsetDateTime::UNIX_EPOCH)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }
}
