//! The workflow service: the seven public operations over a store.
//!
//! This is the layer transport adapters call. It owns the storage round
//! trips, id generation, and timestamps; every decision with actual rules
//! behind it is delegated to [`crate::transition`] or to the validator in
//! `cadence-core`.

use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{info, warn};

use cadence_core::{DefinitionRequest, WorkflowDefinition, WorkflowInstance};
use cadence_storage::WorkflowStore;

use crate::error::EngineError;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::transition;

/// Workflow service over a [`WorkflowStore`] backend.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct WorkflowService<S: WorkflowStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    /// One async mutex per instance id, so the read-decide-write sequence
    /// of `execute_action` is serialized per instance. Entries are kept
    /// for the process lifetime (bounded by the number of instances).
    instance_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: WorkflowStore> WorkflowService<S> {
    /// Service with the production (UUID v4) id generator.
    pub fn new(store: S) -> Self {
        Self::with_id_generator(store, Box::new(UuidIdGenerator))
    }

    /// Service with an injected id generator.
    pub fn with_id_generator(store: S, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            instance_locks: Mutex::new(HashMap::new()),
        }
    }

    // ── Definitions ──────────────────────────────────────────────────────

    /// Validate a definition request and persist the definition.
    ///
    /// `put` is an upsert, so re-creating an existing id replaces the old
    /// definition; instances keep referring to the id.
    pub async fn create_definition(
        &self,
        request: DefinitionRequest,
    ) -> Result<WorkflowDefinition, EngineError> {
        let definition = request.into_definition(OffsetDateTime::now_utc())?;
        self.store.put_definition(definition.clone()).await?;
        info!(
            definition_id = %definition.id,
            states = definition.states.len(),
            actions = definition.actions.len(),
            "workflow definition created"
        );
        Ok(definition)
    }

    /// Read a definition by id. Reads never mutate stored state.
    pub async fn get_definition(
        &self,
        id: &str,
    ) -> Result<Option<WorkflowDefinition>, EngineError> {
        Ok(self.store.get_definition(id).await?)
    }

    pub async fn list_definitions(&self) -> Result<Vec<WorkflowDefinition>, EngineError> {
        Ok(self.store.list_definitions().await?)
    }

    // ── Instances ────────────────────────────────────────────────────────

    /// Start a new instance of the definition at its initial state.
    pub async fn start_instance(
        &self,
        definition_id: &str,
    ) -> Result<WorkflowInstance, EngineError> {
        let definition = self
            .store
            .get_definition(definition_id)
            .await?
            .ok_or_else(|| EngineError::DefinitionNotFound {
                definition_id: definition_id.to_string(),
            })?;
        let initial = transition::initial_state(&definition)?;

        let now = OffsetDateTime::now_utc();
        let instance = WorkflowInstance {
            id: self.ids.next_id(),
            definition_id: definition.id.clone(),
            current_state_id: initial.id.clone(),
            history: Vec::new(),
            created_at: now,
            last_modified: now,
        };
        self.store.put_instance(instance.clone()).await?;
        info!(
            instance_id = %instance.id,
            definition_id = %definition.id,
            state = %instance.current_state_id,
            "workflow instance started"
        );
        Ok(instance)
    }

    /// Read an instance by id. Reads never mutate stored state.
    pub async fn get_instance(&self, id: &str) -> Result<Option<WorkflowInstance>, EngineError> {
        Ok(self.store.get_instance(id).await?)
    }

    pub async fn list_instances(&self) -> Result<Vec<WorkflowInstance>, EngineError> {
        Ok(self.store.list_instances().await?)
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Execute an action on an instance.
    ///
    /// Atomic from the caller's perspective: the instance is persisted
    /// once, after every check passed, so a refusal leaves stored state
    /// unchanged. The whole read-decide-write sequence holds the
    /// per-instance lock.
    pub async fn execute_action(
        &self,
        instance_id: &str,
        action_id: &str,
    ) -> Result<WorkflowInstance, EngineError> {
        let lock = self.instance_lock(instance_id).await;
        let _guard = lock.lock().await;

        let instance = self
            .store
            .get_instance(instance_id)
            .await?
            .ok_or_else(|| EngineError::InstanceNotFound {
                instance_id: instance_id.to_string(),
            })?;
        let definition = match self.store.get_definition(&instance.definition_id).await? {
            Some(definition) => definition,
            None => {
                // Definitions are never deleted; this is collaborator-level
                // corruption and must stay diagnosable.
                warn!(
                    instance_id = %instance.id,
                    definition_id = %instance.definition_id,
                    "instance references a definition that is no longer stored"
                );
                return Err(EngineError::MissingDefinition {
                    definition_id: instance.definition_id.clone(),
                    instance_id: instance.id.clone(),
                });
            }
        };

        let moved = transition::apply_action(
            &definition,
            &instance,
            action_id,
            OffsetDateTime::now_utc(),
        )?;
        self.store.put_instance(moved.clone()).await?;
        info!(
            instance_id = %moved.id,
            action_id,
            from = %instance.current_state_id,
            to = %moved.current_state_id,
            "action executed"
        );
        Ok(moved)
    }

    async fn instance_lock(&self, instance_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.instance_locks.lock().await;
        locks
            .entry(instance_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
