/// All errors that can be returned by a WorkflowStore implementation.
///
/// Missing keys are not errors: `get_*` returns `Ok(None)` for an unknown
/// id, and the caller decides what absence means. `Backend` is reserved
/// for infrastructure failures (connection loss, serialization, ...) that
/// a database-backed implementation can hit; the in-memory backend never
/// emits it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// A backend-specific storage error (DB connection, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
