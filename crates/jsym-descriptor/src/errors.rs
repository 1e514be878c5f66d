//! Error types for descriptor parsing, navigation, resolution, and
//! recipe reconstruction.
//!
//! Every failure here is local, synchronous, and recoverable by the
//! caller: no retries, no fallback, no partial results.

use std::fmt;

/// Malformed descriptor text: empty input, trailing characters, an
/// unterminated `L...;` form, an absurd array dimension count, or a bare
/// primitive code where a reference-or-array descriptor is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSyntaxError {
    descriptor: String,
}

impl DescriptorSyntaxError {
    pub(crate) fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    /// The rejected input text.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Display for DescriptorSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not a valid reference type descriptor: {:?}",
            self.descriptor
        )
    }
}

impl std::error::Error for DescriptorSyntaxError {}

/// `component_type` was requested on a descriptor with array depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDepthError {
    descriptor: String,
}

impl ArrayDepthError {
    pub(crate) fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    /// The non-array descriptor the component was requested on.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Display for ArrayDepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not an array descriptor: {:?}", self.descriptor)
    }
}

impl std::error::Error for ArrayDepthError {}

/// Resolution-time failure, surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The named type (or primitive code) is unknown to the context.
    NameResolution { name: String },
    /// The named type exists but the context denies visibility.
    Access { name: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NameResolution { name } => {
                write!(f, "type not found: {name}")
            }
            ResolveError::Access { name } => {
                write!(f, "access to type denied: {name}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Failure reconstructing a [`TypeDescriptor`](crate::TypeDescriptor) from
/// a [`ConstantRecipe`](crate::ConstantRecipe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// The recipe names a bootstrap this crate does not implement.
    WrongBootstrap { bootstrap_id: String },
    /// The recipe carries the wrong number of static arguments.
    WrongArity { expected: usize, found: usize },
    /// The static argument is not a valid descriptor.
    Syntax(DescriptorSyntaxError),
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::WrongBootstrap { bootstrap_id } => {
                write!(f, "unknown bootstrap: {bootstrap_id}")
            }
            RecipeError::WrongArity { expected, found } => {
                write!(
                    f,
                    "wrong static argument count: expected {expected}, found {found}"
                )
            }
            RecipeError::Syntax(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecipeError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DescriptorSyntaxError> for RecipeError {
    fn from(err: DescriptorSyntaxError) -> Self {
        RecipeError::Syntax(err)
    }
}
