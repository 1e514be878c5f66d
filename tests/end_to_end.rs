//! End-to-end: a descriptor embedded as a recipe, revived, resolved, and
//! a carrier whose structural methods come from the bootstrap.

use std::any::Any;
use std::sync::Arc;

use once_cell::sync::Lazy;

use jsym::{
    Accessor, BootstrapRequest, CarrierObject, CarrierType, MethodShape, ResolutionContext,
    ResolveError, StructuralKind, StructuralSynthesizer, TypeDescriptor, Value, resolve,
};

struct Registry;

impl ResolutionContext for Registry {
    type RuntimeType = String;

    fn find_primitive(&self, code: u8) -> Option<String> {
        Some(format!("prim:{}", code as char))
    }

    fn find_reference_type(&self, binary_name: &str) -> Result<String, ResolveError> {
        Ok(format!("class:{binary_name}"))
    }

    fn array_of(&self, component: String) -> String {
        format!("array<{component}>")
    }
}

struct Pair {
    label: Arc<str>,
    count: i64,
}

static PAIR_TYPE: Lazy<Arc<CarrierType>> = Lazy::new(|| Arc::new(CarrierType::of::<Pair>("Pair")));

impl CarrierObject for Pair {
    fn carrier_type(&self) -> &CarrierType {
        &PAIR_TYPE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn pair_accessors() -> Vec<Option<Accessor>> {
    vec![
        Some(Accessor::new(|obj| {
            obj.as_any()
                .downcast_ref::<Pair>()
                .map_or(Value::Null, |p| Value::Str(Arc::clone(&p.label)))
        })),
        Some(Accessor::new(|obj| {
            obj.as_any()
                .downcast_ref::<Pair>()
                .map_or(Value::Null, |p| Value::Long(p.count))
        })),
    ]
}

#[test]
fn embedded_descriptor_revives_and_resolves() {
    let desc = TypeDescriptor::of_descriptor("[Ljava/util/List;").unwrap();

    // Embed as literal data, revive through the bootstrap, resolve.
    let json = serde_json::to_string(&desc.to_recipe()).unwrap();
    let revived = serde_json::from_str::<jsym::ConstantRecipe>(&json)
        .unwrap()
        .reconstruct()
        .unwrap();
    assert_eq!(revived, desc);

    assert_eq!(
        resolve(&revived, &Registry).unwrap(),
        "array<class:java.util.List>"
    );
}

#[test]
fn carrier_links_all_three_structural_methods() {
    let synthesizer = StructuralSynthesizer::new();
    let request = |kind| BootstrapRequest {
        carrier: Some(Arc::clone(&PAIR_TYPE)),
        shape: Some(MethodShape::canonical(kind, &PAIR_TYPE)),
        component_names: Some("label;count".to_string()),
        accessors: Some(pair_accessors()),
    };

    let equals = synthesizer
        .bootstrap(Some("equals"), request(StructuralKind::Equals))
        .unwrap()
        .as_equals()
        .unwrap();
    let hash = synthesizer
        .bootstrap(Some("hashCode"), request(StructuralKind::HashCode))
        .unwrap()
        .as_hash_code()
        .unwrap();
    let render = synthesizer
        .bootstrap(Some("toString"), request(StructuralKind::ToString))
        .unwrap()
        .as_to_string()
        .unwrap();

    let a = Pair {
        label: Arc::from("ops"),
        count: 3,
    };
    let b = Pair {
        label: Arc::from("ops"),
        count: 3,
    };
    assert!(equals(&a, Some(&b)));
    assert_eq!(hash(&a), hash(&b));
    assert_eq!(render(&a), "Pair[label=ops, count=3]");

    let c = Pair {
        label: Arc::from("ops"),
        count: 4,
    };
    assert!(!equals(&a, Some(&c)));
}
