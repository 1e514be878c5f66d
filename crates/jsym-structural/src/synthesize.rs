//! Structural method synthesis and the concurrent callable cache.
//!
//! Builds are pure and deterministic, so concurrent first requests for
//! one key may each build independently; only the commit needs atomicity.
//! The cache is monotonic: empty, then populated once per key, never
//! invalidated or recomputed.

use std::any::TypeId;
use std::fmt::Write as _;
use std::sync::Arc;

use dashmap::DashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::carrier::{Accessor, CarrierObject};
use crate::shape::StructuralKind;
use crate::validate::{BootstrapRequest, ValidatedRequest, validate};

pub type EqualsFn = dyn Fn(&dyn CarrierObject, Option<&dyn CarrierObject>) -> bool + Send + Sync;
pub type HashCodeFn = dyn Fn(&dyn CarrierObject) -> i32 + Send + Sync;
pub type ToStringFn = dyn Fn(&dyn CarrierObject) -> String + Send + Sync;

/// A synthesized structural method, reusable across call sites.
///
/// Clones share the underlying callable; [`StructuralFn::same_callable`]
/// compares that identity.
#[derive(Clone)]
pub enum StructuralFn {
    Equals(Arc<EqualsFn>),
    HashCode(Arc<HashCodeFn>),
    ToString(Arc<ToStringFn>),
}

impl std::fmt::Debug for StructuralFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StructuralFn::Equals(_) => "Equals",
            StructuralFn::HashCode(_) => "HashCode",
            StructuralFn::ToString(_) => "ToString",
        };
        f.debug_tuple(name).finish()
    }
}

impl StructuralFn {
    pub fn kind(&self) -> StructuralKind {
        match self {
            StructuralFn::Equals(_) => StructuralKind::Equals,
            StructuralFn::HashCode(_) => StructuralKind::HashCode,
            StructuralFn::ToString(_) => StructuralKind::ToString,
        }
    }

    pub fn as_equals(&self) -> Option<Arc<EqualsFn>> {
        match self {
            StructuralFn::Equals(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }

    pub fn as_hash_code(&self) -> Option<Arc<HashCodeFn>> {
        match self {
            StructuralFn::HashCode(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }

    pub fn as_to_string(&self) -> Option<Arc<ToStringFn>> {
        match self {
            StructuralFn::ToString(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }

    /// Whether both values share one underlying callable.
    pub fn same_callable(&self, other: &StructuralFn) -> bool {
        match (self, other) {
            (StructuralFn::Equals(a), StructuralFn::Equals(b)) => Arc::ptr_eq(a, b),
            (StructuralFn::HashCode(a), StructuralFn::HashCode(b)) => Arc::ptr_eq(a, b),
            (StructuralFn::ToString(a), StructuralFn::ToString(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    carrier: TypeId,
    names: Vec<Arc<str>>,
    kind: StructuralKind,
}

impl CacheKey {
    fn of(request: &ValidatedRequest) -> Self {
        Self {
            carrier: request.carrier().id(),
            names: request.component_names().to_vec(),
            kind: request.kind(),
        }
    }
}

/// Builds and caches structural method callables.
///
/// One synthesizer instance is shared by the linkage host; the cache
/// spans its lifetime.
pub struct StructuralSynthesizer {
    cache: DashMap<CacheKey, StructuralFn>,
}

impl StructuralSynthesizer {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Linkage entry point: validate the raw request, then synthesize.
    /// No cache write happens before validation completes.
    pub fn bootstrap(
        &self,
        name: Option<&str>,
        request: BootstrapRequest,
    ) -> Result<StructuralFn, crate::validate::BootstrapError> {
        let validated = validate(name, request)?;
        Ok(self.synthesize(&validated))
    }

    /// Return the callable for the request's `(carrier identity,
    /// component names, kind)` key, building it on first use.
    ///
    /// A cache hit returns the committed callable unconditionally.
    /// Concurrent misses each build; insert-if-absent commits exactly
    /// one result, and losing builders return the winner's callable.
    pub fn synthesize(&self, request: &ValidatedRequest) -> StructuralFn {
        let key = CacheKey::of(request);
        if let Some(existing) = self.cache.get(&key) {
            trace!(
                target: "jsym::structural",
                kind = %existing.kind(),
                carrier = request.carrier().simple_name(),
                cache_hit = true,
                "synthesize"
            );
            return existing.clone();
        }

        // Build outside the map lock; the entry call below only holds
        // the shard for the commit itself.
        let built = build(request);
        trace!(
            target: "jsym::structural",
            kind = %key.kind,
            carrier = request.carrier().simple_name(),
            cache_hit = false,
            "synthesize"
        );
        self.cache.entry(key).or_insert(built).clone()
    }
}

impl Default for StructuralSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn build(request: &ValidatedRequest) -> StructuralFn {
    match request.kind() {
        StructuralKind::Equals => StructuralFn::Equals(build_equals(request)),
        StructuralKind::HashCode => StructuralFn::HashCode(build_hash_code(request)),
        StructuralKind::ToString => StructuralFn::ToString(build_to_string(request)),
    }
}

fn build_equals(request: &ValidatedRequest) -> Arc<EqualsFn> {
    let accessors: SmallVec<[Accessor; 4]> = request.accessors().iter().cloned().collect();
    Arc::new(move |a: &dyn CarrierObject, b: Option<&dyn CarrierObject>| {
        let Some(b) = b else {
            return false;
        };
        if std::ptr::addr_eq(a as *const dyn CarrierObject, b as *const dyn CarrierObject) {
            return true;
        }
        if a.carrier_type() != b.carrier_type() {
            return false;
        }
        accessors
            .iter()
            .all(|accessor| accessor.get(a).component_eq(&accessor.get(b)))
    })
}

fn build_hash_code(request: &ValidatedRequest) -> Arc<HashCodeFn> {
    let accessors: SmallVec<[Accessor; 4]> = request.accessors().iter().cloned().collect();
    Arc::new(move |a: &dyn CarrierObject| {
        accessors.iter().fold(0i32, |acc, accessor| {
            acc.wrapping_mul(31)
                .wrapping_add(accessor.get(a).component_hash())
        })
    })
}

fn build_to_string(request: &ValidatedRequest) -> Arc<ToStringFn> {
    let simple_name: Arc<str> = Arc::from(request.carrier().simple_name());
    let names = request.component_names().to_vec();
    let accessors: SmallVec<[Accessor; 4]> = request.accessors().iter().cloned().collect();
    Arc::new(move |a: &dyn CarrierObject| {
        let mut out = String::new();
        out.push_str(&simple_name);
        out.push('[');
        for (i, (name, accessor)) in names.iter().zip(&accessors).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", name, accessor.get(a));
        }
        out.push(']');
        out
    })
}
