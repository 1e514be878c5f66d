//! The immutable descriptor entity.

use std::fmt;
use std::sync::Arc;

use crate::errors::{ArrayDepthError, DescriptorSyntaxError};
use crate::grammar;

/// A nominal descriptor for a class, interface, or array type.
///
/// Wraps exactly one validated descriptor string. Equality and hashing
/// are defined solely by exact string equality: two descriptors with
/// different strings are never equal, even if they would resolve to the
/// same runtime type under some context.
///
/// A bare primitive descriptor with no brackets cannot be constructed
/// through [`TypeDescriptor::of_descriptor`]; primitives only appear here
/// as the component of an array, derived via
/// [`TypeDescriptor::component_type`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    descriptor: Arc<str>,
}

impl TypeDescriptor {
    /// Create a descriptor from a reference-or-array descriptor string.
    ///
    /// Fails with [`DescriptorSyntaxError`] on any malformed input; an
    /// invalid string never produces an instance.
    pub fn of_descriptor(descriptor: &str) -> Result<Self, DescriptorSyntaxError> {
        grammar::validate_reference_or_array(descriptor)?;
        Ok(Self {
            descriptor: Arc::from(descriptor),
        })
    }

    /// Wrap a scan-valid any-type span without the surface-level
    /// reference-or-array check. Used only for array component
    /// derivation, where a primitive component encoding is legal.
    fn any_type(descriptor: &str) -> Self {
        debug_assert_ne!(grammar::scan(descriptor, 0), 0);
        Self {
            descriptor: Arc::from(descriptor),
        }
    }

    /// The exact descriptor string this entity was built from.
    pub fn descriptor_string(&self) -> &str {
        &self.descriptor
    }

    /// Number of array dimensions; derived from the leading `[` run.
    pub fn array_depth(&self) -> usize {
        self.descriptor.bytes().take_while(|&b| b == b'[').count()
    }

    /// Whether this descriptor denotes an array type.
    pub fn is_array(&self) -> bool {
        self.descriptor.starts_with('[')
    }

    /// Whether this descriptor is a bare primitive component encoding
    /// (only reachable through [`TypeDescriptor::component_type`]).
    pub fn is_primitive(&self) -> bool {
        self.descriptor.len() == 1
    }

    /// The component descriptor, one array dimension down.
    ///
    /// Fails with [`ArrayDepthError`] when this is not an array. The
    /// component may be a bare primitive encoding.
    pub fn component_type(&self) -> Result<TypeDescriptor, ArrayDepthError> {
        if !self.is_array() {
            return Err(ArrayDepthError::new(self.descriptor.as_ref()));
        }
        Ok(Self::any_type(&self.descriptor[1..]))
    }

    /// The dotted binary name, for non-array reference descriptors only.
    pub fn binary_name(&self) -> Option<String> {
        if self.is_array() || self.is_primitive() {
            return None;
        }
        let internal = &self.descriptor[1..self.descriptor.len() - 1];
        Some(internal.replace('/', "."))
    }

    /// Human-readable form: the simple name without package, with a
    /// `[]` suffix per array dimension. Primitive components display
    /// their keyword (`int`, `long`, ...).
    pub fn display_name(&self) -> String {
        let depth = self.array_depth();
        let base = &self.descriptor[depth..];
        let simple = if base.len() == 1 {
            primitive_keyword(base.as_bytes()[0])
        } else {
            let internal = &base[1..base.len() - 1];
            internal.rsplit('/').next().unwrap_or(internal)
        };
        let mut name = String::with_capacity(simple.len() + 2 * depth);
        name.push_str(simple);
        for _ in 0..depth {
            name.push_str("[]");
        }
        name
    }
}

fn primitive_keyword(code: u8) -> &'static str {
    match code {
        b'B' => "byte",
        b'C' => "char",
        b'D' => "double",
        b'F' => "float",
        b'I' => "int",
        b'J' => "long",
        b'S' => "short",
        b'Z' => "boolean",
        _ => unreachable!("validated descriptor holds an unknown primitive code"),
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({:?})", self.descriptor)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor[{}]", self.display_name())
    }
}
