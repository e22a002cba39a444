//! In-memory workflow store.
//!
//! The reference backend: two `RwLock<HashMap>` tables, one per entity
//! kind. Suited for tests and single-process deployments; a database
//! backend implements the same trait for anything durable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cadence_core::{WorkflowDefinition, WorkflowInstance};

use crate::error::StorageError;
use crate::traits::WorkflowStore;

/// In-memory `WorkflowStore` backed by `tokio::sync::RwLock<HashMap>`.
///
/// Upserts and reads are atomic per key (the write lock covers the whole
/// map operation). Values are cloned on the way in and out, so no caller
/// ever holds a reference into the store.
#[derive(Default)]
pub struct InMemoryWorkflowStore {
    definitions: RwLock<HashMap<String, WorkflowDefinition>>,
    instances: RwLock<HashMap<String, WorkflowInstance>>,
}

impl InMemoryWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkflowStore for InMemoryWorkflowStore {
    async fn put_definition(&self, definition: WorkflowDefinition) -> Result<(), StorageError> {
        self.definitions
            .write()
            .await
            .insert(definition.id.clone(), definition);
        Ok(())
    }

    async fn get_definition(&self, id: &str) -> Result<Option<WorkflowDefinition>, StorageError> {
        Ok(self.definitions.read().await.get(id).cloned())
    }

    async fn list_definitions(&self) -> Result<Vec<WorkflowDefinition>, StorageError> {
        Ok(self.definitions.read().await.values().cloned().collect())
    }

    async fn put_instance(&self, instance: WorkflowInstance) -> Result<(), StorageError> {
        self.instances
            .write()
            .await
            .insert(instance.id.clone(), instance);
        Ok(())
    }

    async fn get_instance(&self, id: &str) -> Result<Option<WorkflowInstance>, StorageError> {
        Ok(self.instances.read().await.get(id).cloned())
    }

    async fn list_instances(&self) -> Result<Vec<WorkflowInstance>, StorageError> {
        Ok(self.instances.read().await.values().cloned().collect())
    }
}
