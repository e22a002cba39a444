//! Instance id generation.

use uuid::Uuid;

/// Injectable capability producing unique opaque instance ids.
///
/// The service never inspects ids; anything unique and stable works. Tests
/// substitute a deterministic generator.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}

/// Production generator: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
