use core::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use pk_utils::TypeIdMap;

use crate::info::{EnumeratedValue, Identity, Relation, TypeInfo, Typed};
use crate::render::{DateTimeRenderer, EnumeratedRenderer, IdentityRenderer, Renderer};
use crate::value::Value;

#[derive(Clone)]
struct Registration {
    target: &'static TypeInfo,
    renderer: Arc<dyn Renderer>,
}

// -----------------------------------------------------------------------------
// RenderRegistry

/// Renderers keyed by value type.
///
/// [`new`](Self::new) registers the defaults: enumerated constants render
/// their label, entities render `TypeName#id`, and timestamps and dates
/// use [`DateTimeRenderer`]. [`empty`](Self::empty) registers nothing.
pub struct RenderRegistry {
    renderers: TypeIdMap<Registration>,
}

impl RenderRegistry {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            renderers: TypeIdMap::new(),
        }
    }

    pub fn new() -> Self {
        Self::with_date_time_renderer(DateTimeRenderer::new())
    }

    /// Creates a registry with the defaults and a custom date renderer.
    pub fn with_date_time_renderer(date_time: DateTimeRenderer) -> Self {
        let date_time = Arc::new(date_time);

        let mut registry = Self::empty();
        registry.register::<EnumeratedValue>(EnumeratedRenderer);
        registry.register::<Identity>(IdentityRenderer);
        registry.register_for(<DateTime<Utc>>::type_info(), date_time.clone());
        registry.register_for(NaiveDate::type_info(), date_time);
        registry
    }

    /// Registers `renderer` for `T`, returning the one it replaces.
    #[inline]
    pub fn register<T: Typed>(&mut self, renderer: impl Renderer) -> Option<Arc<dyn Renderer>> {
        self.register_for(T::type_info(), Arc::new(renderer))
    }

    pub fn register_for(
        &mut self,
        target: &'static TypeInfo,
        renderer: Arc<dyn Renderer>,
    ) -> Option<Arc<dyn Renderer>> {
        let previous = self
            .renderers
            .insert(target.id(), Registration { target, renderer })
            .map(|registration| registration.renderer);

        if previous.is_some() {
            log::warn!("replaced the renderer registered for `{}`", target.path());
        } else {
            log::debug!("registered a renderer for `{}`", target.path());
        }
        previous
    }

    #[inline]
    pub fn unregister<T: Typed>(&mut self) -> bool {
        self.unregister_for(T::type_info())
    }

    pub fn unregister_for(&mut self, target: &'static TypeInfo) -> bool {
        let removed = self.renderers.remove(&target.id()).is_some();
        if removed {
            log::debug!("unregistered the renderer for `{}`", target.path());
        }
        removed
    }

    #[inline]
    pub fn contains(&self, target: &TypeInfo) -> bool {
        self.renderers.contains(&target.id())
    }

    /// Finds the renderer for the runtime type of `value`.
    ///
    /// Returns `None` for `Null`, for the text `"null"` and for values
    /// without type info (lists).
    pub fn resolve(&self, value: &Value) -> Option<&Arc<dyn Renderer>> {
        if value.is_null() || value.as_str() == Some("null") {
            return None;
        }
        self.resolve_type(value.type_info()?)
    }

    /// Finds the renderer for `info`: exact type, then capabilities,
    /// then supertypes, each nearest first.
    pub fn resolve_type(&self, info: &'static TypeInfo) -> Option<&Arc<dyn Renderer>> {
        if let Some(registration) = self.renderers.get(&info.id()) {
            return Some(&registration.renderer);
        }
        if self.renderers.is_empty() {
            return None;
        }

        let lineage = info.lineage();
        let find = |wanted: Relation| {
            lineage
                .iter()
                .filter(|(relation, _)| *relation == wanted)
                .find_map(|(_, ancestor)| self.renderers.get(&ancestor.id()))
        };
        find(Relation::Capability)
            .or_else(|| find(Relation::Supertype))
            .map(|registration| &registration.renderer)
    }

    /// Renders `value`, or returns `None` if no renderer applies.
    pub fn render(&self, value: &Value) -> Option<Value> {
        self.resolve(value).map(|renderer| renderer.render(value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &'static TypeInfo> + '_ {
        self.renderers.values().map(|registration| registration.target)
    }

    /// Registers every renderer submitted with
    /// [`submit_renderer!`](crate::submit_renderer).
    ///
    /// Returns `false` when the `auto_register` feature is disabled.
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register::RendererSubmission;

            for submission in inventory::iter::<RendererSubmission> {
                self.register_for((submission.target)(), (submission.renderer)());
            }
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}

impl Default for RenderRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.targets().map(TypeInfo::name)).finish()
    }
}

// -----------------------------------------------------------------------------
// RenderRegistryArc

/// A shareable, lock-protected [`RenderRegistry`].
#[derive(Clone, Default)]
pub struct RenderRegistryArc {
    /// The wrapped [`RenderRegistry`].
    pub internal: Arc<RwLock<RenderRegistry>>,
}

impl RenderRegistryArc {
    #[inline]
    pub fn new(registry: RenderRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// The process-wide registry, holding the defaults.
    pub fn global() -> &'static Self {
        static GLOBAL: LazyLock<RenderRegistryArc> = LazyLock::new(RenderRegistryArc::default);
        &GLOBAL
    }

    pub fn read(&self) -> RwLockReadGuard<'_, RenderRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, RenderRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn resolve(&self, value: &Value) -> Option<Arc<dyn Renderer>> {
        self.read().resolve(value).cloned()
    }

    /// Renders `value` without holding the lock while the renderer runs.
    pub fn render(&self, value: &Value) -> Option<Value> {
        self.resolve(value).map(|renderer| renderer.render(value))
    }
}

impl fmt::Debug for RenderRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}
