//! Bootstrap request validation.
//!
//! Validation completes fully before any synthesis side effect: a
//! request that fails here never touches the callable cache. Failure
//! precedence is fixed so callers observe deterministic errors when
//! several conditions are violated at once: absent inputs first, then
//! unknown kind, then shape mismatch, then arity.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::carrier::{Accessor, CarrierType};
use crate::shape::{MethodShape, StructuralKind};

/// Delimiter joining component names in the bootstrap's static argument.
/// Must not appear inside any legal component name.
pub const COMPONENT_NAME_DELIMITER: char = ';';

/// Raw linkage arguments as the dynamic-linkage host hands them over.
/// `None` models an absent (`null`) argument.
#[derive(Clone, Default)]
pub struct BootstrapRequest {
    pub carrier: Option<Arc<CarrierType>>,
    pub shape: Option<MethodShape>,
    /// Delimiter-joined component names; empty means zero components.
    pub component_names: Option<String>,
    pub accessors: Option<Vec<Option<Accessor>>>,
}

/// A request that passed every check in [`validate`].
#[derive(Clone)]
pub struct ValidatedRequest {
    carrier: Arc<CarrierType>,
    kind: StructuralKind,
    names: Vec<Arc<str>>,
    accessors: SmallVec<[Accessor; 4]>,
}

impl ValidatedRequest {
    pub fn carrier(&self) -> &Arc<CarrierType> {
        &self.carrier
    }

    pub fn kind(&self) -> StructuralKind {
        self.kind
    }

    pub fn component_names(&self) -> &[Arc<str>] {
        &self.names
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }
}

/// Structural-bootstrap validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// A required linkage argument (or an accessor element) was absent.
    /// Takes precedence over every other failure.
    NullInput { field: &'static str },
    /// The requested name is not one of the three structural methods.
    UnknownKind { name: String },
    /// The requested shape is not the canonical shape for the kind.
    ShapeMismatch { kind: StructuralKind },
    /// Component-name count and accessor count differ.
    Arity { names: usize, accessors: usize },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::NullInput { field } => {
                write!(f, "absent bootstrap argument: {field}")
            }
            BootstrapError::UnknownKind { name } => {
                write!(f, "unknown structural method: {name:?}")
            }
            BootstrapError::ShapeMismatch { kind } => {
                write!(f, "method shape does not match canonical {kind} shape")
            }
            BootstrapError::Arity { names, accessors } => {
                write!(
                    f,
                    "component name count {names} does not match accessor count {accessors}"
                )
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

/// Validate a structural bootstrap request.
///
/// Zero components is legal: an empty name string with an empty accessor
/// list describes a degenerate carrier with no compared fields.
pub fn validate(
    name: Option<&str>,
    request: BootstrapRequest,
) -> Result<ValidatedRequest, BootstrapError> {
    // Absent inputs fail first, before the name is even inspected.
    let name = name.ok_or(BootstrapError::NullInput {
        field: "method name",
    })?;
    let carrier = request.carrier.ok_or(BootstrapError::NullInput {
        field: "carrier type",
    })?;
    let shape = request.shape.ok_or(BootstrapError::NullInput {
        field: "method shape",
    })?;
    let raw_names = request.component_names.ok_or(BootstrapError::NullInput {
        field: "component names",
    })?;
    let raw_accessors = request.accessors.ok_or(BootstrapError::NullInput {
        field: "accessors",
    })?;
    let mut accessors: SmallVec<[Accessor; 4]> = SmallVec::with_capacity(raw_accessors.len());
    for accessor in raw_accessors {
        accessors.push(accessor.ok_or(BootstrapError::NullInput { field: "accessor" })?);
    }

    let kind = StructuralKind::from_name(name).ok_or_else(|| BootstrapError::UnknownKind {
        name: name.to_string(),
    })?;

    if shape != MethodShape::canonical(kind, &carrier) {
        return Err(BootstrapError::ShapeMismatch { kind });
    }

    let names: Vec<Arc<str>> = if raw_names.is_empty() {
        Vec::new()
    } else {
        raw_names
            .split(COMPONENT_NAME_DELIMITER)
            .map(Arc::from)
            .collect()
    };
    if names.len() != accessors.len() {
        return Err(BootstrapError::Arity {
            names: names.len(),
            accessors: accessors.len(),
        });
    }

    Ok(ValidatedRequest {
        carrier,
        kind,
        names,
        accessors,
    })
}
