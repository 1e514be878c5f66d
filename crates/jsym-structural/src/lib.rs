//! Structural-method bootstrap and synthesis.
//!
//! Given a carrier type, an ordered list of component names, and the
//! matching component accessors, this crate dynamically builds `equals`,
//! `hashCode`, and `toString` implementations defined purely in terms of
//! the declared components. Requests are validated strictly against the
//! expected method shape before any synthesis work; built callables are
//! committed to a concurrent cache with atomic insert-if-absent, so every
//! call site linking the same construct observes one callable identity.
//!
//! Modules:
//! - [`value`] - the dynamically-typed component value boundary
//! - [`carrier`] - carrier type handles, carrier objects, accessors
//! - [`shape`] - structural kinds and canonical method shapes
//! - [`validate`] - bootstrap request validation (fail-closed)
//! - [`synthesize`] - callable construction and the monotonic cache

pub mod carrier;
pub mod shape;
pub mod synthesize;
pub mod validate;
pub mod value;

pub use carrier::{Accessor, CarrierObject, CarrierType};
pub use shape::{MethodShape, ShapeType, StructuralKind};
pub use synthesize::{StructuralFn, StructuralSynthesizer};
pub use validate::{BootstrapError, BootstrapRequest, ValidatedRequest, validate};
pub use value::{StructuralObject, Value};
