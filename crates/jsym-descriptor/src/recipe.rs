//! Self-describing constant form for descriptors.
//!
//! A [`ConstantRecipe`] is an explicit, serializable value (bootstrap
//! identifier plus ordered static arguments) rather than any reflective
//! self-reference: reconstruction is a plain pure function from recipe
//! to descriptor, performed without resolution.

use serde::{Deserialize, Serialize};

use crate::TypeDescriptor;
use crate::errors::RecipeError;

/// Bootstrap identifier for descriptor reconstruction.
pub const TYPE_DESCRIPTOR_BOOTSTRAP: &str = "jsym:type-descriptor";

/// An embeddable recipe: invoke the named bootstrap with the static
/// arguments to rebuild the original constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantRecipe {
    pub bootstrap_id: String,
    pub args: Vec<String>,
}

impl ConstantRecipe {
    /// Apply the recipe, rebuilding the descriptor it describes.
    ///
    /// Checks the bootstrap identifier, then hands the static arguments
    /// to [`descriptor_bootstrap`].
    pub fn reconstruct(&self) -> Result<TypeDescriptor, RecipeError> {
        if self.bootstrap_id != TYPE_DESCRIPTOR_BOOTSTRAP {
            return Err(RecipeError::WrongBootstrap {
                bootstrap_id: self.bootstrap_id.clone(),
            });
        }
        descriptor_bootstrap(&self.args)
    }
}

impl TypeDescriptor {
    /// Describe this descriptor as embeddable data: the fixed bootstrap
    /// identifier plus the descriptor's own string as sole argument.
    ///
    /// [`ConstantRecipe::reconstruct`] on the result yields a descriptor
    /// equal (by string) to `self`.
    pub fn to_recipe(&self) -> ConstantRecipe {
        ConstantRecipe {
            bootstrap_id: TYPE_DESCRIPTOR_BOOTSTRAP.to_string(),
            args: vec![self.descriptor_string().to_string()],
        }
    }
}

/// Bootstrap entry point for descriptor constants: exactly one static
/// argument, the descriptor string, re-validated through
/// [`TypeDescriptor::of_descriptor`].
pub fn descriptor_bootstrap(args: &[String]) -> Result<TypeDescriptor, RecipeError> {
    match args {
        [descriptor] => Ok(TypeDescriptor::of_descriptor(descriptor)?),
        _ => Err(RecipeError::WrongArity {
            expected: 1,
            found: args.len(),
        }),
    }
}
