//! Structural kinds and canonical method shapes.

use std::any::TypeId;
use std::fmt;

use crate::carrier::CarrierType;

/// Which of the three structural methods a bootstrap request names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    Equals,
    HashCode,
    ToString,
}

impl StructuralKind {
    /// Parse the requested method name; anything else is an unknown kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "equals" => Some(Self::Equals),
            "hashCode" => Some(Self::HashCode),
            "toString" => Some(Self::ToString),
            _ => None,
        }
    }

    pub fn method_name(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::HashCode => "hashCode",
            Self::ToString => "toString",
        }
    }
}

impl fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// One slot in a method shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    Bool,
    Int32,
    Str,
    /// Any reference type (the right-hand side of `equals`).
    AnyObject,
    /// Exactly the carrier type with this identity.
    Carrier(TypeId),
}

/// Return type plus ordered parameter types of a requested method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodShape {
    pub ret: ShapeType,
    pub params: Vec<ShapeType>,
}

impl MethodShape {
    pub fn new(ret: ShapeType, params: impl Into<Vec<ShapeType>>) -> Self {
        Self {
            ret,
            params: params.into(),
        }
    }

    /// The one shape a structural method of `kind` may have on `carrier`:
    /// `equals: (bool)(T, AnyObject)`, `hashCode: (i32)(T)`,
    /// `toString: (str)(T)`.
    pub fn canonical(kind: StructuralKind, carrier: &CarrierType) -> Self {
        let receiver = ShapeType::Carrier(carrier.id());
        match kind {
            StructuralKind::Equals => {
                Self::new(ShapeType::Bool, vec![receiver, ShapeType::AnyObject])
            }
            StructuralKind::HashCode => Self::new(ShapeType::Int32, vec![receiver]),
            StructuralKind::ToString => Self::new(ShapeType::Str, vec![receiver]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    #[test]
    fn parses_the_three_names_only() {
        assert_eq!(
            StructuralKind::from_name("equals"),
            Some(StructuralKind::Equals)
        );
        assert_eq!(
            StructuralKind::from_name("hashCode"),
            Some(StructuralKind::HashCode)
        );
        assert_eq!(
            StructuralKind::from_name("toString"),
            Some(StructuralKind::ToString)
        );
        assert_eq!(StructuralKind::from_name("clone"), None);
        assert_eq!(StructuralKind::from_name("Equals"), None);
    }

    #[test]
    fn canonical_shapes_are_tied_to_the_carrier() {
        let carrier = CarrierType::of::<Point>("Point");
        let equals = MethodShape::canonical(StructuralKind::Equals, &carrier);
        assert_eq!(equals.ret, ShapeType::Bool);
        assert_eq!(equals.params.len(), 2);
        assert_eq!(equals.params[1], ShapeType::AnyObject);

        let hash = MethodShape::canonical(StructuralKind::HashCode, &carrier);
        assert_eq!(
            hash,
            MethodShape::new(ShapeType::Int32, equals.params[..1].to_vec())
        );
    }
}
