use core::fmt;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use pk_utils::TypeIdMap;

use crate::convert::builtin::{
    BooleanConverter, CharacterConverter, DEFAULT_DATE_TIME_FORMATS, DateConverter,
    DateTimeConverter, NumberConverter, PathConverter, StringConverter,
};
use crate::convert::{ConversionError, Converter, convert_unregistered};
use crate::engine::EngineConfig;
use crate::info::{Number, TypeInfo, Typed};
use crate::value::Value;

#[derive(Clone)]
struct Registration {
    target: &'static TypeInfo,
    converter: Arc<dyn Converter>,
}

// -----------------------------------------------------------------------------
// ConversionRegistry

/// Custom converters keyed by target type.
///
/// The registry starts empty; the built-in conversions apply to any
/// target it cannot resolve. Registering a converter for a type replaces
/// the built-in behaviour for that type and for every descendant type
/// without a nearer registration.
///
/// # Examples
///
/// ```
/// use pk_reflect::convert::ConversionRegistry;
/// use pk_reflect::convert::builtin::NumberConverter;
/// use pk_reflect::info::{Number, Typed};
/// use pk_reflect::value::Value;
///
/// let mut registry = ConversionRegistry::new();
/// registry.register::<Number>(NumberConverter::new().with_computed_default());
///
/// // `i16` has no converter of its own, so the `Number` one is used.
/// assert_eq!(registry.convert(i16::type_info(), Value::Null), Ok(Value::I16(0)));
///
/// assert!(registry.unregister::<Number>());
/// assert_eq!(registry.convert(i16::type_info(), Value::Null), Ok(Value::Null));
/// ```
pub struct ConversionRegistry {
    converters: TypeIdMap<Registration>,
}

impl ConversionRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            converters: TypeIdMap::new(),
        }
    }

    /// Creates a registry whose built-in converters yield computed
    /// defaults (`false`, `0`, `""`, the current time, ...) for absent
    /// input instead of `Null`.
    pub fn with_computed_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_computed_defaults(DateTimeConverter::new());
        registry
    }

    /// Creates a registry honouring an [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Self {
        let formats = &config.date_time.input_formats;
        let custom_formats = formats.iter().map(String::as_str).ne(DEFAULT_DATE_TIME_FORMATS.iter().copied());
        let date_time = DateTimeConverter::with_formats(formats.iter().cloned());

        let mut registry = Self::new();
        if config.computed_defaults {
            registry.register_computed_defaults(date_time);
        } else if custom_formats {
            registry.register::<DateTime<Utc>>(date_time);
        }
        registry
    }

    fn register_computed_defaults(&mut self, date_time: DateTimeConverter) {
        self.register::<bool>(BooleanConverter::new().with_computed_default());
        self.register::<char>(CharacterConverter::new().with_computed_default());
        self.register::<Number>(NumberConverter::new().with_computed_default());
        self.register::<String>(StringConverter::new().with_computed_default());
        self.register::<DateTime<Utc>>(date_time.with_computed_default());
        self.register::<NaiveDate>(DateConverter::new().with_computed_default());
        self.register::<PathBuf>(PathConverter::new().with_computed_default());
    }

    /// Registers `converter` for `T`, returning the one it replaces.
    #[inline]
    pub fn register<T: Typed>(&mut self, converter: impl Converter) -> Option<Arc<dyn Converter>> {
        self.register_for(T::type_info(), Arc::new(converter))
    }

    /// Registers a shared converter for `target`.
    pub fn register_for(
        &mut self,
        target: &'static TypeInfo,
        converter: Arc<dyn Converter>,
    ) -> Option<Arc<dyn Converter>> {
        let previous = self
            .converters
            .insert(target.id(), Registration { target, converter })
            .map(|registration| registration.converter);

        if previous.is_some() {
            log::warn!("replaced the converter registered for `{}`", target.path());
        } else {
            log::debug!("registered a converter for `{}`", target.path());
        }
        previous
    }

    /// Removes the converter registered for `T`.
    ///
    /// Returns `false` if there was none.
    #[inline]
    pub fn unregister<T: Typed>(&mut self) -> bool {
        self.unregister_for(T::type_info())
    }

    pub fn unregister_for(&mut self, target: &'static TypeInfo) -> bool {
        let removed = self.converters.remove(&target.id()).is_some();
        if removed {
            log::debug!("unregistered the converter for `{}`", target.path());
        }
        removed
    }

    /// Returns `true` if a converter is registered for exactly `target`.
    #[inline]
    pub fn contains(&self, target: &TypeInfo) -> bool {
        self.converters.contains(&target.id())
    }

    /// Finds the converter for `target`.
    ///
    /// The exact registration wins; otherwise the nearest ancestor in
    /// [`TypeInfo::lineage`] order with a registration is used.
    pub fn resolve(&self, target: &'static TypeInfo) -> Option<&Arc<dyn Converter>> {
        if let Some(registration) = self.converters.get(&target.id()) {
            return Some(&registration.converter);
        }
        if self.converters.is_empty() {
            return None;
        }
        target.lineage().into_iter().find_map(|(_, ancestor)| {
            let registration = self.converters.get(&ancestor.id())?;
            log::debug!(
                "`{}` resolved to the converter of `{}`",
                target.name(),
                ancestor.name()
            );
            Some(&registration.converter)
        })
    }

    /// Converts `raw` to `target`.
    ///
    /// Uses the resolved converter if any, the built-in conversion
    /// otherwise.
    pub fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        match self.resolve(target) {
            Some(converter) => converter.convert(target, raw),
            None => convert_unregistered(target, raw, &|element, item| self.convert(element, item)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    pub fn clear(&mut self) {
        self.converters.clear();
    }

    /// Iterates over the targets with a registration, in arbitrary order.
    pub fn targets(&self) -> impl Iterator<Item = &'static TypeInfo> + '_ {
        self.converters.values().map(|registration| registration.target)
    }

    /// Registers every converter submitted with
    /// [`submit_converter!`](crate::submit_converter).
    ///
    /// Returns `false` when the `auto_register` feature is disabled.
    /// Calling it again re-registers the same converters.
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register::ConverterSubmission;

            for submission in inventory::iter::<ConverterSubmission> {
                self.register_for((submission.target)(), (submission.converter)());
            }
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}

impl Default for ConversionRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.targets().map(TypeInfo::name)).finish()
    }
}

// -----------------------------------------------------------------------------
// ConversionRegistryArc

/// A shareable, lock-protected [`ConversionRegistry`].
///
/// Lookups take the read lock only while resolving; the converter runs
/// after the lock is released.
#[derive(Clone, Default)]
pub struct ConversionRegistryArc {
    /// The wrapped [`ConversionRegistry`].
    pub internal: Arc<RwLock<ConversionRegistry>>,
}

impl ConversionRegistryArc {
    #[inline]
    pub fn new(registry: ConversionRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// The process-wide registry used by [`PropertyPathEngine::shared`].
    ///
    /// [`PropertyPathEngine::shared`]: crate::engine::PropertyPathEngine::shared
    pub fn global() -> &'static Self {
        static GLOBAL: LazyLock<ConversionRegistryArc> = LazyLock::new(ConversionRegistryArc::default);
        &GLOBAL
    }

    /// Takes a read lock on the underlying [`ConversionRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, ConversionRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`ConversionRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, ConversionRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn resolve(&self, target: &'static TypeInfo) -> Option<Arc<dyn Converter>> {
        self.read().resolve(target).cloned()
    }

    /// Same as [`ConversionRegistry::convert`], without holding the lock
    /// while a converter runs.
    pub fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        match self.resolve(target) {
            Some(converter) => converter.convert(target, raw),
            None => convert_unregistered(target, raw, &|element, item| self.convert(element, item)),
        }
    }
}

impl fmt::Debug for ConversionRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{ConversionRegistry, ConversionRegistryArc};
    use crate::convert::ConversionError;
    use crate::convert::builtin::{NumberConverter, StringConverter};
    use crate::info::{Number, TypeInfo, Typed};
    use crate::value::Value;

    fn constant(value: i32) -> impl Fn(&'static TypeInfo, Value) -> Result<Value, ConversionError> + Send + Sync {
        move |_, _| Ok(Value::I32(value))
    }

    #[test]
    fn exact_registration_beats_ancestor() {
        let mut registry = ConversionRegistry::new();
        registry.register::<Number>(constant(1));
        registry.register::<i32>(constant(2));

        assert_eq!(registry.convert(i32::type_info(), "x".into()), Ok(Value::I32(2)));
        assert_eq!(registry.convert(i64::type_info(), "x".into()), Ok(Value::I32(1)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_returns_replaced_converter() {
        let mut registry = ConversionRegistry::new();
        assert!(registry.register::<i32>(constant(1)).is_none());
        assert!(registry.register::<i32>(constant(2)).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_restores_builtin() {
        let mut registry = ConversionRegistry::new();
        registry.register::<String>(StringConverter::new().with_default("n/a"));
        assert_eq!(registry.convert(String::type_info(), Value::Null), Ok(Value::from("n/a")));

        assert!(registry.unregister::<String>());
        assert!(!registry.unregister::<String>());
        assert_eq!(registry.convert(String::type_info(), Value::Null), Ok(Value::Null));
    }

    #[test]
    fn unregistered_targets_use_builtins() {
        let registry = ConversionRegistry::new();

        assert_eq!(registry.convert(i32::type_info(), "7".into()), Ok(Value::I32(7)));
        assert_eq!(
            registry.convert(<Vec<u8>>::type_info(), Value::List(vec!["1".into(), "2".into()])),
            Ok(Value::List(vec![Value::U8(1), Value::U8(2)]))
        );
        assert_eq!(
            registry.convert(<Vec<u8>>::type_info(), "3".into()),
            Ok(Value::List(vec![Value::U8(3)]))
        );
    }

    #[test]
    fn elements_use_registered_converters() {
        let mut registry = ConversionRegistry::new();
        registry.register::<i32>(constant(9));

        assert_eq!(
            registry.convert(<Vec<i32>>::type_info(), Value::List(vec![Value::Null])),
            Ok(Value::List(vec![Value::I32(9)]))
        );
    }

    #[test]
    fn computed_defaults_registry() {
        let registry = ConversionRegistry::with_computed_defaults();

        assert_eq!(registry.convert(bool::type_info(), Value::Null), Ok(Value::Bool(false)));
        assert_eq!(registry.convert(u32::type_info(), "null".into()), Ok(Value::U32(0)));
        assert_eq!(registry.convert(String::type_info(), Value::Null), Ok(Value::from("")));
    }

    #[test]
    fn shared_registry_across_threads() {
        let shared = ConversionRegistryArc::default();
        shared
            .write()
            .register::<Number>(NumberConverter::new().with_default(-1_i64));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.convert(i64::type_info(), Value::Null))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(Value::I64(-1)));
        }
    }
}
