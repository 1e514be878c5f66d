//! Descriptor resolution against a caller-supplied context.
//!
//! Resolution is a pure function of `(descriptor, context)`. Nothing is
//! cached here: the same descriptor string resolved under two different
//! contexts may legitimately yield two different runtime types.

use tracing::trace;

use crate::TypeDescriptor;
use crate::errors::ResolveError;

/// Capability encapsulating class visibility and loading scope.
///
/// Supplied by the caller, assumed safe for concurrent reads, and never
/// mutated by this crate.
pub trait ResolutionContext {
    /// Opaque handle to a loaded runtime type.
    type RuntimeType;

    /// Map a primitive descriptor code (`b'I'`, `b'J'`, ...) to its
    /// runtime type, or `None` when the context has no such primitive.
    fn find_primitive(&self, code: u8) -> Option<Self::RuntimeType>;

    /// Find a reference type by dotted binary name under the context's
    /// access-control rules.
    fn find_reference_type(&self, binary_name: &str) -> Result<Self::RuntimeType, ResolveError>;

    /// The array type with `component` as its element, one dimension up.
    fn array_of(&self, component: Self::RuntimeType) -> Self::RuntimeType;
}

/// Resolve `descriptor` to a runtime type through `context`.
///
/// Strips the array dimensions, resolves the base (primitive code or
/// binary name), then re-applies "array of" innermost first. Failures
/// surface as-is and are never retried.
pub fn resolve<C: ResolutionContext>(
    descriptor: &TypeDescriptor,
    context: &C,
) -> Result<C::RuntimeType, ResolveError> {
    let text = descriptor.descriptor_string();
    let depth = descriptor.array_depth();
    let base = &text[depth..];

    let result = if base.len() == 1 {
        let code = base.as_bytes()[0];
        context
            .find_primitive(code)
            .ok_or_else(|| ResolveError::NameResolution {
                name: base.to_string(),
            })
    } else {
        let binary_name = base[1..base.len() - 1].replace('/', ".");
        context.find_reference_type(&binary_name)
    };

    trace!(
        target: "jsym::descriptor",
        descriptor = text,
        depth,
        ok = result.is_ok(),
        "resolve"
    );

    let mut resolved = result?;
    for _ in 0..depth {
        resolved = context.array_of(resolved);
    }
    Ok(resolved)
}
