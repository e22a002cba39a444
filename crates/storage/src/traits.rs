use async_trait::async_trait;

use cadence_core::{WorkflowDefinition, WorkflowInstance};

use crate::error::StorageError;

/// The storage trait for cadence workflow backends.
///
/// A `WorkflowStore` implementation provides keyed storage for workflow
/// definitions and workflow instances. Keys are exact-match strings (the
/// entity ids); `put_*` is an insert-or-replace upsert.
///
/// ## Consistency
///
/// Each `put` and `get` must be atomic per key: a reader sees either the
/// previous value or the new one, never a partial write. The store is NOT
/// required to serialize a caller's read-decide-write sequence — the
/// workflow service holds a per-instance lock around `execute_action` so
/// that concurrent transitions on one instance cannot both observe the
/// same prior state.
///
/// List order is unspecified and may differ between calls.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync + 'static` to be shared across
/// async task boundaries and axum application state.
#[async_trait]
pub trait WorkflowStore: Send + Sync + 'static {
    // ── Definitions ──────────────────────────────────────────────────────

    /// Upsert a workflow definition keyed by `definition.id`.
    async fn put_definition(&self, definition: WorkflowDefinition) -> Result<(), StorageError>;

    /// Read a workflow definition by id. `Ok(None)` if absent.
    async fn get_definition(&self, id: &str) -> Result<Option<WorkflowDefinition>, StorageError>;

    /// List all stored workflow definitions.
    async fn list_definitions(&self) -> Result<Vec<WorkflowDefinition>, StorageError>;

    // ── Instances ────────────────────────────────────────────────────────

    /// Upsert a workflow instance keyed by `instance.id`.
    async fn put_instance(&self, instance: WorkflowInstance) -> Result<(), StorageError>;

    /// Read a workflow instance by id. `Ok(None)` if absent.
    async fn get_instance(&self, id: &str) -> Result<Option<WorkflowInstance>, StorageError>;

    /// List all stored workflow instances.
    async fn list_instances(&self) -> Result<Vec<WorkflowInstance>, StorageError>;
}
