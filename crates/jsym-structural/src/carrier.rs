//! Carrier type handles, carrier objects, and component accessors.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Runtime handle for a carrier type: the aggregate whose structural
/// methods are being synthesized.
///
/// Identity (equality, hashing, cache keying) is the underlying Rust
/// type's [`TypeId`]; the simple name is carried only for diagnostics
/// and `toString` rendering.
#[derive(Debug, Clone)]
pub struct CarrierType {
    type_id: TypeId,
    simple_name: Arc<str>,
}

impl CarrierType {
    /// Handle for carrier type `T` with the given simple (unqualified)
    /// display name.
    pub fn of<T: Any>(simple_name: &str) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            simple_name: Arc::from(simple_name),
        }
    }

    /// Identity token of the carrier.
    pub fn id(&self) -> TypeId {
        self.type_id
    }

    /// Simple name used in diagnostics and `toString` output.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

impl PartialEq for CarrierType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for CarrierType {}

impl std::hash::Hash for CarrierType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// The receiver of a synthesized structural method.
///
/// Implementations expose their runtime carrier type (for the
/// class-identity check in `equals`) and a downcast hook accessors use
/// to reach the concrete fields.
pub trait CarrierObject: Any + Send + Sync {
    fn carrier_type(&self) -> &CarrierType;
    fn as_any(&self) -> &dyn Any;
}

/// A zero-argument component getter bound to the receiver at call time.
///
/// Cloning is cheap; clones share the underlying function.
#[derive(Clone)]
pub struct Accessor {
    get: Arc<dyn Fn(&dyn CarrierObject) -> Value + Send + Sync>,
}

impl Accessor {
    pub fn new(get: impl Fn(&dyn CarrierObject) -> Value + Send + Sync + 'static) -> Self {
        Self { get: Arc::new(get) }
    }

    /// Read the component off `receiver`.
    pub fn get(&self, receiver: &dyn CarrierObject) -> Value {
        (self.get)(receiver)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor")
    }
}
