//! Nominal type descriptors for class, interface, and array types.
//!
//! A descriptor is the canonical text symbol a compiled artifact uses to
//! refer to a type without loading it:
//!
//! - a single primitive code (`I`, `J`, `Z`, ...),
//! - `L<internal-name>;` for a class or interface,
//! - one leading `[` per array dimension prefixed to either form.
//!
//! This crate provides:
//! - `grammar` - pure scanner/validator for the descriptor text grammar
//! - [`TypeDescriptor`] - immutable, validated reference-or-array descriptor
//! - `resolver` - turns a descriptor into a runtime type through a
//!   caller-supplied [`ResolutionContext`]
//! - `recipe` - self-describing constant form ([`ConstantRecipe`]) so a
//!   descriptor can be embedded as literal data and rebuilt later

pub mod errors;
pub mod grammar;
pub mod recipe;
pub mod resolver;
mod type_descriptor;

pub use errors::{ArrayDepthError, DescriptorSyntaxError, RecipeError, ResolveError};
pub use grammar::MAX_ARRAY_DEPTH;
pub use recipe::{ConstantRecipe, TYPE_DESCRIPTOR_BOOTSTRAP, descriptor_bootstrap};
pub use resolver::{ResolutionContext, resolve};
pub use type_descriptor::TypeDescriptor;
