//! jsym - symbolic type descriptors and structural-method synthesis.
//!
//! Facade over the workspace crates:
//! - [`jsym_descriptor`]: the nominal descriptor grammar, the
//!   [`TypeDescriptor`] entity, context-driven resolution, and the
//!   embeddable [`ConstantRecipe`]
//! - [`jsym_structural`]: validation and synthesis of `equals`,
//!   `hashCode`, and `toString` over a carrier's declared components

pub use jsym_descriptor::{
    ArrayDepthError, ConstantRecipe, DescriptorSyntaxError, MAX_ARRAY_DEPTH, RecipeError,
    ResolutionContext, ResolveError, TYPE_DESCRIPTOR_BOOTSTRAP, TypeDescriptor,
    descriptor_bootstrap, resolve,
};
pub use jsym_structural::{
    Accessor, BootstrapError, BootstrapRequest, CarrierObject, CarrierType, MethodShape,
    ShapeType, StructuralFn, StructuralKind, StructuralObject, StructuralSynthesizer,
    ValidatedRequest, Value, validate,
};

pub mod tracing_config;
