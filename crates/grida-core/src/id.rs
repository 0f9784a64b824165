//! Node and paint identifier generation.

use uuid::Uuid;

/// Unique identifier of a node in a [`DocumentDefinition`](crate::DocumentDefinition).
pub type NodeId = String;

/// Source of fresh identifiers for gradients and importer-created nodes.
///
/// Implementations must be safe to share between threads; converters only ever
/// hold a shared reference.
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier that has not been handed out before.
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs. Stateless, so it needs no coordination across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Deterministic generator for tests: `"{prefix}-0"`, `"{prefix}-1"`, ...
#[cfg(test)]
pub(crate) struct SequentialIds {
    prefix: &'static str,
    counter: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl SequentialIds {
    pub(crate) fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
