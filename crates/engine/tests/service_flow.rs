//! End-to-end service scenarios: definition → instance → actions.

use serde_json::json;

use cadence_core::DefinitionRequest;
use cadence_engine::{EngineError, ErrorClass, WorkflowService};
use cadence_storage::InMemoryWorkflowStore;

fn service() -> WorkflowService<InMemoryWorkflowStore> {
    WorkflowService::new(InMemoryWorkflowStore::new())
}

fn two_state_request() -> DefinitionRequest {
    serde_json::from_value(json!({
        "id": "wf1",
        "name": "Two-state flow",
        "states": [
            {"id": "start", "name": "Start", "isInitial": true},
            {"id": "end", "name": "End", "isFinal": true}
        ],
        "actions": [
            {"id": "done", "name": "Done", "fromStates": ["start"], "toState": "end"}
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn full_lifecycle_ends_in_an_absorbing_final_state() {
    let svc = service();
    svc.create_definition(two_state_request()).await.unwrap();

    let instance = svc.start_instance("wf1").await.unwrap();
    assert_eq!(instance.current_state_id, "start");
    assert!(instance.history.is_empty());

    let moved = svc.execute_action(&instance.id, "done").await.unwrap();
    assert_eq!(moved.current_state_id, "end");
    assert_eq!(moved.history.len(), 1);
    assert_eq!(moved.history[0].action_id, "done");
    assert_eq!(moved.history[0].from_state_id, "start");
    assert_eq!(moved.history[0].to_state_id, "end");

    // The instance now sits in a final state: every further action is
    // refused, including the one that worked a moment ago.
    let err = svc.execute_action(&instance.id, "done").await.unwrap_err();
    assert_eq!(err.class(), ErrorClass::IllegalTransition);
    assert!(matches!(err, EngineError::FinalState { .. }));

    let stored = svc.get_instance(&instance.id).await.unwrap().unwrap();
    assert_eq!(stored.current_state_id, "end");
    assert_eq!(stored.history.len(), 1);
}

#[tokio::test]
async fn two_initial_states_are_rejected_with_the_count() {
    let svc = service();
    let request: DefinitionRequest = serde_json::from_value(json!({
        "id": "wf2",
        "name": "Broken flow",
        "states": [
            {"id": "a", "name": "A", "isInitial": true},
            {"id": "b", "name": "B", "isInitial": true}
        ],
        "actions": []
    }))
    .unwrap();

    let err = svc.create_definition(request).await.unwrap_err();
    assert_eq!(err.class(), ErrorClass::InvalidRequest);
    assert!(err.to_string().contains("found 2"));
    assert!(svc.get_definition("wf2").await.unwrap().is_none());
}

#[tokio::test]
async fn wrong_source_state_refusal_leaves_the_instance_unchanged() {
    let svc = service();
    let request: DefinitionRequest = serde_json::from_value(json!({
        "id": "wf3",
        "name": "Review flow",
        "states": [
            {"id": "review", "name": "Review", "isInitial": true},
            {"id": "start", "name": "Start"},
            {"id": "end", "name": "End", "isFinal": true}
        ],
        "actions": [
            {"id": "done", "name": "Done", "fromStates": ["start"], "toState": "end"}
        ]
    }))
    .unwrap();
    svc.create_definition(request).await.unwrap();

    let instance = svc.start_instance("wf3").await.unwrap();
    assert_eq!(instance.current_state_id, "review");

    let err = svc.execute_action(&instance.id, "done").await.unwrap_err();
    assert!(matches!(err, EngineError::WrongSourceState { .. }));

    let stored = svc.get_instance(&instance.id).await.unwrap().unwrap();
    assert_eq!(stored.current_state_id, "review");
    assert_eq!(stored.history.len(), 0);
    assert_eq!(stored.last_modified, instance.last_modified);
}

#[tokio::test]
async fn reads_are_idempotent() {
    let svc = service();
    svc.create_definition(two_state_request()).await.unwrap();
    let instance = svc.start_instance("wf1").await.unwrap();

    let d1 = svc.get_definition("wf1").await.unwrap();
    let d2 = svc.get_definition("wf1").await.unwrap();
    assert_eq!(d1, d2);

    let i1 = svc.get_instance(&instance.id).await.unwrap();
    let i2 = svc.get_instance(&instance.id).await.unwrap();
    assert_eq!(i1, i2);
}
