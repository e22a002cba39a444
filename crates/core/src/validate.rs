//! Workflow definition validator.
//!
//! Pure structural validation of a [`DefinitionRequest`], run exactly once
//! at creation time. Every later transition decision assumes a definition
//! that passed here, so the transition engine never re-validates state or
//! action references.
//!
//! Checks run in a fixed order and the first violated rule is reported;
//! later rules stay unchecked. The two duplicate-id rules aggregate every
//! offender into one error. Rules deliberately NOT here:
//!
//! - `enabled` flags and `is_final` are not validated — any combination is
//!   structurally legal and only consulted at execution time.
//! - An action with empty `from_states` is accepted. It can never fire
//!   (no state satisfies the source check), which makes it dead weight,
//!   not an invalid definition.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::request::DefinitionRequest;

/// Validate the structural well-formedness of a definition request.
pub fn validate_definition(request: &DefinitionRequest) -> Result<(), ValidationError> {
    if request.id.trim().is_empty() {
        return Err(ValidationError::MissingId);
    }
    if request.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    let states = match &request.states {
        Some(states) if !states.is_empty() => states,
        _ => return Err(ValidationError::NoStates),
    };
    // An empty actions list is a valid workflow (one that never moves);
    // an absent one is a malformed request.
    let actions = match &request.actions {
        Some(actions) => actions,
        None => return Err(ValidationError::MissingActions),
    };

    let ids = duplicate_ids(states.iter().map(|s| s.id.as_str()));
    if !ids.is_empty() {
        return Err(ValidationError::DuplicateStateIds { ids });
    }
    let ids = duplicate_ids(actions.iter().map(|a| a.id.as_str()));
    if !ids.is_empty() {
        return Err(ValidationError::DuplicateActionIds { ids });
    }

    let count = states.iter().filter(|s| s.is_initial).count();
    if count != 1 {
        return Err(ValidationError::InitialStateCount { count });
    }

    let state_ids: HashSet<&str> = states.iter().map(|s| s.id.as_str()).collect();
    for action in actions {
        if action.id.trim().is_empty() {
            return Err(ValidationError::ActionMissingId);
        }
        if action.name.trim().is_empty() {
            return Err(ValidationError::ActionMissingName {
                action_id: action.id.clone(),
            });
        }
        if !state_ids.contains(action.to_state.as_str()) {
            return Err(ValidationError::UnknownToState {
                action_id: action.id.clone(),
                to_state: action.to_state.clone(),
            });
        }
        for from_state in &action.from_states {
            if !state_ids.contains(from_state.as_str()) {
                return Err(ValidationError::UnknownFromState {
                    action_id: action.id.clone(),
                    from_state: from_state.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Ids that occur more than once, listed once each in first-occurrence
/// order. Case-sensitive exact match.
fn duplicate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let all: Vec<&str> = ids.collect();
    let mut duplicates = Vec::new();
    for (index, id) in all.iter().enumerate() {
        if all[..index].contains(id) {
            continue; // already counted at its first occurrence
        }
        if all[index + 1..].contains(id) {
            duplicates.push((*id).to_string());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ActionRequest, StateRequest};

    fn state(id: &str, is_initial: bool) -> StateRequest {
        StateRequest {
            id: id.to_string(),
            name: id.to_uppercase(),
            is_initial,
            is_final: false,
            enabled: true,
            description: None,
        }
    }

    fn action(id: &str, from: &[&str], to: &str) -> ActionRequest {
        ActionRequest {
            id: id.to_string(),
            name: id.to_uppercase(),
            enabled: true,
            from_states: from.iter().map(|s| s.to_string()).collect(),
            to_state: to.to_string(),
            description: None,
        }
    }

    fn request() -> DefinitionRequest {
        DefinitionRequest {
            id: "wf1".to_string(),
            name: "Flow".to_string(),
            description: None,
            states: Some(vec![state("start", true), state("end", false)]),
            actions: Some(vec![action("done", &["start"], "end")]),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert_eq!(validate_definition(&request()), Ok(()));
    }

    #[test]
    fn rejects_blank_or_whitespace_id_first() {
        let mut r = request();
        r.id = "   ".to_string();
        r.name = String::new(); // also invalid, but id is reported first
        assert_eq!(validate_definition(&r), Err(ValidationError::MissingId));
    }

    #[test]
    fn rejects_blank_name() {
        let mut r = request();
        r.name = String::new();
        assert_eq!(validate_definition(&r), Err(ValidationError::MissingName));
    }

    #[test]
    fn rejects_absent_and_empty_states_alike() {
        let mut r = request();
        r.states = None;
        assert_eq!(validate_definition(&r), Err(ValidationError::NoStates));

        r.states = Some(vec![]);
        assert_eq!(validate_definition(&r), Err(ValidationError::NoStates));
    }

    #[test]
    fn rejects_absent_actions_but_accepts_empty() {
        let mut r = request();
        r.actions = None;
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::MissingActions)
        );

        r.actions = Some(vec![]);
        assert_eq!(validate_definition(&r), Ok(()));
    }

    #[test]
    fn reports_every_duplicate_state_id_once() {
        let mut r = request();
        r.states = Some(vec![
            state("a", true),
            state("b", false),
            state("a", false),
            state("b", false),
            state("a", false),
        ]);
        r.actions = Some(vec![]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::DuplicateStateIds {
                ids: vec!["a".to_string(), "b".to_string()],
            })
        );
    }

    #[test]
    fn duplicate_state_ids_are_case_sensitive() {
        let mut r = request();
        r.states = Some(vec![state("a", true), state("A", false)]);
        r.actions = Some(vec![]);
        assert_eq!(validate_definition(&r), Ok(()));
    }

    #[test]
    fn reports_duplicate_action_ids() {
        let mut r = request();
        r.actions = Some(vec![
            action("done", &["start"], "end"),
            action("done", &["start"], "end"),
        ]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::DuplicateActionIds {
                ids: vec!["done".to_string()],
            })
        );
    }

    #[test]
    fn reports_actual_initial_state_count() {
        let mut r = request();
        r.states = Some(vec![state("a", true), state("b", true)]);
        r.actions = Some(vec![]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::InitialStateCount { count: 2 })
        );

        r.states = Some(vec![state("a", false), state("b", false)]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::InitialStateCount { count: 0 })
        );
    }

    #[test]
    fn rejects_action_with_blank_id() {
        let mut r = request();
        r.actions = Some(vec![action("", &["start"], "end")]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::ActionMissingId)
        );
    }

    #[test]
    fn rejects_action_with_blank_name() {
        let mut r = request();
        let mut a = action("done", &["start"], "end");
        a.name = " ".to_string();
        r.actions = Some(vec![a]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::ActionMissingName {
                action_id: "done".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unknown_target_state() {
        let mut r = request();
        r.actions = Some(vec![action("done", &["start"], "nowhere")]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::UnknownToState {
                action_id: "done".to_string(),
                to_state: "nowhere".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unknown_source_state() {
        let mut r = request();
        r.actions = Some(vec![action("done", &["start", "nowhere"], "end")]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::UnknownFromState {
                action_id: "done".to_string(),
                from_state: "nowhere".to_string(),
            })
        );
    }

    #[test]
    fn accepts_action_with_empty_from_states() {
        // Unreachable, not invalid.
        let mut r = request();
        r.actions = Some(vec![action("orphan", &[], "end")]);
        assert_eq!(validate_definition(&r), Ok(()));
    }

    #[test]
    fn per_action_checks_run_in_declaration_order() {
        let mut r = request();
        r.actions = Some(vec![
            action("first", &["start"], "nowhere"),
            action("", &["start"], "end"),
        ]);
        assert_eq!(
            validate_definition(&r),
            Err(ValidationError::UnknownToState {
                action_id: "first".to_string(),
                to_state: "nowhere".to_string(),
            })
        );
    }
}
