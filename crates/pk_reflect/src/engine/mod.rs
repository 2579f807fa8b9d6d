//! The property-path facade.
//!
//! [`PropertyPathEngine`] parses a dotted, optionally indexed path and
//! walks it segment by segment with a
//! [`PropertyAccessResolver`](crate::access::PropertyAccessResolver).
//! Intermediate segments are always read; only the terminal segment is
//! written, after converting the raw value to the declared type.

// -----------------------------------------------------------------------------
// Modules

mod config;

// -----------------------------------------------------------------------------
// Exports

pub use config::{DateTimeConfig, EngineConfig};

// -----------------------------------------------------------------------------
// PropertyPathEngine

use alloc::collections::BTreeSet;

use crate::access::{CLASS_PROPERTY, PropertyAccessResolver, PropertyError};
use crate::constraint::{self, MarkerKind};
use crate::convert::{ConversionError, ConversionRegistry, ConversionRegistryArc};
use crate::info::TypeInfo;
use crate::path::{PathSegment, PropertyPath, is_indexed, is_nested};
use crate::render::{DateTimeRenderer, RenderRegistry, RenderRegistryArc};
use crate::value::{FromValue, Value};
use crate::{PropertyDescriptor, Reflect, ReflectRef, Slot};

/// Selects the properties returned by
/// [`PropertyPathEngine::list_properties`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyFilter {
    All,
    Readable,
    Writable,
}

impl PropertyFilter {
    fn accepts(self, descriptor: &PropertyDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::Readable => descriptor.is_readable(),
            Self::Writable => descriptor.is_writable(),
        }
    }
}

/// Reads and writes values addressed by property paths.
///
/// An engine owns handles to a conversion registry and a render
/// registry. [`new`](Self::new) and [`from_config`](Self::from_config)
/// create private registries; [`shared`](Self::shared) uses the
/// process-wide ones, so registrations made through any shared engine
/// are visible to all of them.
///
/// # Examples
///
/// ```
/// use pk_reflect::derive::Reflect;
/// use pk_reflect::engine::PropertyPathEngine;
/// use pk_reflect::value::Value;
///
/// #[derive(Reflect, Clone, Default)]
/// #[reflect(rename_all = "camelCase")]
/// struct Address {
///     zip_code: Option<String>,
/// }
///
/// #[derive(Reflect, Clone, Default)]
/// struct Order {
///     quantity: u32,
///     address: Option<Address>,
/// }
///
/// let engine = PropertyPathEngine::new();
/// let mut order = Order {
///     address: Some(Address::default()),
///     ..Order::default()
/// };
///
/// engine.set(&mut order, "quantity", "12").unwrap();
/// engine.set(&mut order, "address.zipCode", 8001).unwrap();
///
/// assert_eq!(engine.get(&order, "quantity").unwrap(), Value::U32(12));
/// assert_eq!(engine.get(&order, "address.zipCode").unwrap(), Value::from("8001"));
/// ```
#[derive(Clone, Debug)]
pub struct PropertyPathEngine {
    converters: ConversionRegistryArc,
    renderers: RenderRegistryArc,
    class_property: bool,
}

impl PropertyPathEngine {
    /// Creates an engine with private default registries.
    pub fn new() -> Self {
        Self::with_registries(
            ConversionRegistryArc::new(ConversionRegistry::new()),
            RenderRegistryArc::new(RenderRegistry::new()),
        )
    }

    /// Creates an engine with private registries built from `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let date_time = DateTimeRenderer::with_formats(
            config.date_time.display_format.as_str(),
            DateTimeRenderer::DEFAULT_DATE_FORMAT,
        );
        Self::with_registries(
            ConversionRegistryArc::new(ConversionRegistry::from_config(config)),
            RenderRegistryArc::new(RenderRegistry::with_date_time_renderer(date_time)),
        )
        .with_class_property(config.class_property)
    }

    /// Creates an engine over the process-wide registries.
    pub fn shared() -> Self {
        Self::with_registries(
            ConversionRegistryArc::global().clone(),
            RenderRegistryArc::global().clone(),
        )
    }

    #[inline]
    pub fn with_registries(converters: ConversionRegistryArc, renderers: RenderRegistryArc) -> Self {
        Self {
            converters,
            renderers,
            class_property: true,
        }
    }

    /// Enables or disables the read-only `class` pseudo-property.
    #[inline]
    pub fn with_class_property(mut self, enabled: bool) -> Self {
        self.class_property = enabled;
        self
    }

    #[inline]
    pub fn converters(&self) -> &ConversionRegistryArc {
        &self.converters
    }

    #[inline]
    pub fn renderers(&self) -> &RenderRegistryArc {
        &self.renderers
    }

    /// Registers every converter and renderer submitted with
    /// `submit_converter!` and `submit_renderer!`.
    ///
    /// Returns `false` if the `auto_register` feature is disabled.
    pub fn auto_register(&self) -> bool {
        let converters = self.converters.write().auto_register();
        let renderers = self.renderers.write().auto_register();
        converters && renderers
    }

    #[inline]
    pub fn resolver(&self) -> PropertyAccessResolver<'_> {
        PropertyAccessResolver::new(&self.converters).with_class_property(self.class_property)
    }

    // -------------------------------------------------------------------------
    // Reading

    /// Reads the value at `path`.
    ///
    /// A `Null` value anywhere before the last segment fails with
    /// [`PropertyError::NullReference`], naming the segment that held it
    /// and the type owning that segment. A `Null` value at the last
    /// segment is returned as [`Value::Null`].
    pub fn get(&self, target: &dyn Reflect, path: &str) -> Result<Value, PropertyError> {
        let path = PropertyPath::parse(path)?;
        log::trace!("get `{path}` on `{}`", target.reflect_type_info().name());
        self.get_segments(target, path.segments())
    }

    fn get_segments(&self, target: &dyn Reflect, segments: &[PathSegment<'_>]) -> Result<Value, PropertyError> {
        let Some((head, rest)) = segments.split_first() else {
            return Err(PropertyError::missing_name());
        };
        let slot = self.resolver().read_segment(target, head)?;
        if rest.is_empty() {
            return Ok(slot.into_value());
        }
        if slot.is_null() {
            return Err(null_reference(target, head));
        }

        match slot {
            Slot::Borrowed(intermediate) => self.get_segments(intermediate, rest),
            Slot::Owned(Value::Object(object)) => self.get_segments(object.as_reflect(), rest),
            Slot::Owned(value) => self.get_detached(&value, rest),
        }
    }

    // Computed scalars have no properties besides `class`.
    fn get_detached(&self, value: &Value, segments: &[PathSegment<'_>]) -> Result<Value, PropertyError> {
        match segments {
            [segment] if self.class_property && segment.name() == CLASS_PROPERTY && segment.index().is_none() => {
                Ok(Value::String(value.type_name().to_owned()))
            }
            [segment, ..] => Err(PropertyError::NoSuchProperty {
                property: segment.name().to_owned(),
                owner: value.type_name(),
            }),
            [] => Err(PropertyError::missing_name()),
        }
    }

    /// Reads the value at `path` and extracts a `T` from it.
    ///
    /// No conversion is applied; the value must already be a `T`.
    pub fn get_as<T: FromValue>(&self, target: &dyn Reflect, path: &str) -> Result<T, PropertyError> {
        let value = self.get(target, path)?;
        T::from_value(value).map_err(|error| PropertyError::FailedToReadProperty {
            property: path.to_owned(),
            owner: target.reflect_type_info().name(),
            source: Box::new(error),
        })
    }

    // -------------------------------------------------------------------------
    // Writing

    /// Converts `value` to the declared type of the property at `path`
    /// and stores it.
    ///
    /// An indexed terminal segment replaces one element of a sequence,
    /// converting to the element type.
    pub fn set(&self, target: &mut dyn Reflect, path: &str, value: impl Into<Value>) -> Result<(), PropertyError> {
        let path = PropertyPath::parse(path)?;
        log::trace!("set `{path}` on `{}`", target.reflect_type_info().name());
        self.set_segments(target, path.segments(), value.into())
    }

    fn set_segments(
        &self,
        target: &mut dyn Reflect,
        segments: &[PathSegment<'_>],
        raw: Value,
    ) -> Result<(), PropertyError> {
        let resolver = self.resolver();
        match segments {
            [] => Err(PropertyError::missing_name()),
            [terminal] => resolver.write_segment(target, terminal, raw),
            [head, rest @ ..] => {
                let owner = target.reflect_type_info().name();
                match resolver.read_segment_mut(target, head)? {
                    Some(intermediate) => self.set_segments(intermediate, rest, raw),
                    None => Err(PropertyError::NullReference {
                        property: head.name().to_owned(),
                        owner,
                    }),
                }
            }
        }
    }

    /// Writes a single, plain property.
    ///
    /// Fails with [`PropertyError::InvalidArgument`] if `name` is empty,
    /// nested or indexed.
    pub fn set_simple(&self, target: &mut dyn Reflect, name: &str, value: impl Into<Value>) -> Result<(), PropertyError> {
        if name.trim().is_empty() {
            return Err(PropertyError::missing_name());
        }
        if is_nested(name) || is_indexed(name) {
            return Err(PropertyError::not_simple(name));
        }
        self.resolver().write_simple(target, name, value.into())
    }

    /// Applies [`set`](Self::set) to every entry, in iteration order.
    ///
    /// Writes are not transactional: the first failure is returned and
    /// the entries before it stay applied.
    pub fn set_all<I, K, V>(&self, target: &mut dyn Reflect, values: I) -> Result<(), PropertyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .try_for_each(|(path, value)| self.set(target, path.as_ref(), value))
    }

    /// Converts `raw` to `target` through this engine's registry.
    #[inline]
    pub fn convert(&self, target: &'static TypeInfo, raw: impl Into<Value>) -> Result<Value, ConversionError> {
        self.converters.convert(target, raw.into())
    }

    // -------------------------------------------------------------------------
    // Introspection

    /// Lists the property names of `target` accepted by `filter`, in
    /// declaration order.
    ///
    /// The `class` pseudo-property, when enabled, comes first for
    /// [`All`](PropertyFilter::All) and
    /// [`Readable`](PropertyFilter::Readable).
    pub fn list_properties(&self, target: &dyn Reflect, filter: PropertyFilter) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.class_property && filter != PropertyFilter::Writable {
            names.push(CLASS_PROPERTY);
        }
        if let ReflectRef::Host(host) = target.reflect_ref() {
            for descriptor in host.descriptors() {
                if filter.accepts(descriptor) && !names.contains(&descriptor.name()) {
                    names.push(descriptor.name());
                }
            }
        }
        names
    }

    /// Names of the writable properties of `target` marked with `kind`.
    #[inline]
    pub fn find_marked(&self, target: &dyn Reflect, kind: MarkerKind) -> BTreeSet<&'static str> {
        constraint::find_marked(target, kind)
    }

    // -------------------------------------------------------------------------
    // Display

    /// Formats `value` with its registered renderer, falling back to its
    /// `Display` form.
    pub fn describe(&self, value: &Value) -> String {
        match self.renderers.render(value) {
            Some(rendered) => rendered.to_string(),
            None => value.to_string(),
        }
    }

    /// Reads the value at `path` and [`describe`](Self::describe)s it.
    pub fn describe_property(&self, target: &dyn Reflect, path: &str) -> Result<String, PropertyError> {
        self.get(target, path).map(|value| self.describe(&value))
    }
}

impl Default for PropertyPathEngine {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

fn null_reference(owner: &dyn Reflect, segment: &PathSegment<'_>) -> PropertyError {
    PropertyError::NullReference {
        property: segment.name().to_owned(),
        owner: owner.reflect_type_info().name(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{EngineConfig, PropertyFilter, PropertyPathEngine};
    use crate::access::PropertyError;
    use crate::constraint::MarkerKind;
    use crate::convert::ConversionError;
    use crate::fixtures::{Account, Customer, Rectangle, Status, ValueObject};
    use crate::info::Typed;
    use crate::value::Value;

    fn nested() -> ValueObject {
        ValueObject {
            value_object: Some(Box::new(ValueObject::default())),
            value_object_list: vec![ValueObject::with_value("a"), ValueObject::with_value("b")],
            ..ValueObject::default()
        }
    }

    // -------------------------------------------------------------------------
    // get

    #[test]
    fn get_simple_and_nested() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::chain(3, "deep");

        assert_eq!(engine.get(&root, "value").unwrap(), Value::Null);
        assert_eq!(
            engine.get(&root, "valueObject.valueObject.value").unwrap(),
            Value::from("deep")
        );
        assert_eq!(engine.get(&root, "count").unwrap(), Value::I32(0));
    }

    #[test]
    fn get_through_null_intermediate() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::chain(2, "x");

        let error = engine
            .get(&root, "valueObject.valueObject.valueObject.value")
            .unwrap_err();
        let PropertyError::NullReference { property, owner } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(property, "valueObject");
        assert_eq!(*owner, "ValueObject");
        assert_eq!(
            error.to_string(),
            "Null property value for `valueObject` on type `ValueObject`"
        );
    }

    #[test]
    fn get_indexed() {
        let engine = PropertyPathEngine::new();
        let root = nested();

        assert_eq!(engine.get(&root, "valueObjectList[1].value").unwrap(), Value::from("b"));
        assert!(matches!(
            engine.get(&root, "valueObjectList[5]"),
            Err(PropertyError::FailedToReadProperty { .. })
        ));
        // An absent sequence reads as null.
        assert_eq!(engine.get(&root, "tags[0]").unwrap(), Value::Null);
    }

    #[test]
    fn get_index_into_scalar() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::with_value("text");

        let error = engine.get(&root, "value[0]").unwrap_err();
        let PropertyError::FailedToReadProperty { property, source, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(property, "value");
        let cause = source.downcast_ref::<PropertyError>().unwrap();
        assert!(matches!(cause, PropertyError::InvalidArgument(_)));
        assert!(cause.to_string().contains("is not an array or Collection type"));
    }

    #[test]
    fn get_rejects_missing_and_unreadable() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::default();

        assert!(matches!(engine.get(&root, ""), Err(PropertyError::InvalidArgument(_))));
        assert_eq!(
            engine.get(&root, "  ").unwrap_err().to_string(),
            "The name of the property must be specified"
        );
        assert!(matches!(
            engine.get(&root, "missing"),
            Err(PropertyError::NoSuchProperty { .. })
        ));
        assert!(matches!(
            engine.get(&root, "cache"),
            Err(PropertyError::NoSuchProperty { .. })
        ));
        assert!(matches!(
            engine.get(&root, "secret"),
            Err(PropertyError::UnreadableProperty { .. })
        ));
    }

    #[test]
    fn class_property() {
        let engine = PropertyPathEngine::new();
        let mut root = nested();

        assert_eq!(engine.get(&root, "class").unwrap(), Value::from("ValueObject"));
        assert_eq!(engine.get(&root, "count.class").unwrap(), Value::from("i32"));
        assert!(matches!(
            engine.set(&mut root, "class", "Other"),
            Err(PropertyError::UnwritableProperty { .. })
        ));

        let engine = PropertyPathEngine::new().with_class_property(false);
        assert!(matches!(
            engine.get(&root, "class"),
            Err(PropertyError::NoSuchProperty { .. })
        ));
    }

    #[test]
    fn computed_properties() {
        let engine = PropertyPathEngine::new();
        let mut rectangle = Rectangle {
            width: 3.0,
            height: 4.0,
        };

        assert_eq!(engine.get(&rectangle, "area").unwrap(), Value::F64(12.0));
        assert_eq!(engine.get(&rectangle, "sides[1]").unwrap(), Value::F64(4.0));
        assert_eq!(engine.get(&rectangle, "diagonal").unwrap(), Value::F64(5.0));
        assert!(matches!(
            engine.get(&rectangle, "sides[4]"),
            Err(PropertyError::FailedToReadProperty { .. })
        ));

        engine.set(&mut rectangle, "width", "6").unwrap();
        assert_eq!(rectangle.width, 6.0);
        assert!(matches!(
            engine.set(&mut rectangle, "area", 1),
            Err(PropertyError::UnwritableProperty { .. })
        ));

        rectangle.width = -1.0;
        let error = engine.get(&rectangle, "diagonal").unwrap_err();
        let PropertyError::FailedToReadProperty { source, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(source.to_string(), "negative side length");
    }

    #[test]
    fn get_as_extracts() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::chain(2, "inner");

        assert_eq!(engine.get_as::<Option<String>>(&root, "valueObject.value").unwrap(), Some("inner".to_owned()));
        assert!(engine.get_as::<bool>(&root, "count").is_err());
    }

    // -------------------------------------------------------------------------
    // set

    #[test]
    fn set_converts_to_declared_type() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        engine.set(&mut root, "count", "42").unwrap();
        engine.set(&mut root, "flag", "yes").unwrap();
        engine.set(&mut root, "ratio", 2).unwrap();
        engine.set(&mut root, "initial", "x").unwrap();
        engine.set(&mut root, "created", "2023-05-01T08:30:00Z").unwrap();
        engine.set(&mut root, "homepage", "https://example.com/").unwrap();
        engine.set(&mut root, "secret", 1234).unwrap();

        assert_eq!(root.count, 42);
        assert!(root.flag);
        assert_eq!(root.ratio, 2.0);
        assert_eq!(root.initial, 'x');
        assert_eq!(root.created, Some(Utc.with_ymd_and_hms(2023, 5, 1, 8, 30, 0).unwrap()));
        assert_eq!(root.homepage.as_ref().map(|url| url.as_str()), Some("https://example.com/"));
        assert_eq!(root.secret, "1234");

        engine.set(&mut root, "created", Value::Null).unwrap();
        assert_eq!(root.created, None);
    }

    #[test]
    fn set_then_get_matches_conversion() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        for raw in ["17", " -3 ", "null"] {
            let expected = engine.convert(i32::type_info(), raw);
            match engine.set(&mut root, "count", raw) {
                Ok(()) => assert_eq!(Ok(engine.get(&root, "count").unwrap()), expected),
                // `null` converts to `Null`, which an `i32` cannot hold.
                Err(_) => assert_eq!(expected, Ok(Value::Null)),
            }
        }
        assert_eq!(root.count, -3);
    }

    #[test]
    fn set_capability_targets() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        engine.set(&mut root, "customer", "7").unwrap();
        engine.set(&mut root, "status", "SUSP").unwrap();
        assert_eq!(root.customer, Some(Customer::with_id(7)));
        assert_eq!(root.status, Some(Status::Suspended));

        engine.set(&mut root, "status", 1).unwrap();
        assert_eq!(root.status, Some(Status::Active));

        engine.set(&mut root, "customer.name", "Ada").unwrap();
        assert_eq!(engine.get(&root, "customer.name").unwrap(), Value::from("Ada"));
    }

    #[test]
    fn set_wraps_failures() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        let error = engine.set(&mut root, "count", "abc").unwrap_err();
        assert_eq!(error.to_string(), "Failed to set property `count` of type `i32` to `abc`");
        let PropertyError::FailedToWriteProperty { value, source, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(value, &Value::from("abc"));
        assert!(source.downcast_ref::<ConversionError>().is_some());

        assert!(matches!(
            engine.set(&mut root, "revision", 3),
            Err(PropertyError::UnwritableProperty { .. })
        ));
        assert!(matches!(
            engine.set(&mut root, "unknown", 3),
            Err(PropertyError::NoSuchProperty { .. })
        ));
    }

    #[test]
    fn set_reports_setter_failures() {
        let engine = PropertyPathEngine::new();
        let mut account = Account::default();

        engine.set(&mut account, "email", "ada@example.com").unwrap();
        assert_eq!(account.email, "ada@example.com");

        let error = engine.set(&mut account, "email", "nope").unwrap_err();
        let PropertyError::FailedToWriteProperty { source, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(source.to_string(), "`nope` is not a valid e-mail address");
        assert_eq!(account.email, "ada@example.com");
    }

    #[test]
    fn set_nested_and_indexed() {
        let engine = PropertyPathEngine::new();
        let mut root = nested();

        engine.set(&mut root, "valueObject.value", 1).unwrap();
        engine.set(&mut root, "valueObjectList[1].count", "5").unwrap();
        engine
            .set(&mut root, "valueObjectList[0]", Value::object(ValueObject::with_value("z")))
            .unwrap();

        assert_eq!(root.value_object.as_ref().unwrap().value.as_deref(), Some("1"));
        assert_eq!(root.value_object_list[1].count, 5);
        assert_eq!(root.value_object_list[0].value.as_deref(), Some("z"));

        root.tags = Some(vec!["one".to_owned()]);
        engine.set(&mut root, "tags[0]", 2).unwrap();
        assert_eq!(root.tags, Some(vec!["2".to_owned()]));

        assert!(matches!(
            engine.set(&mut root, "tags[3]", "x"),
            Err(PropertyError::FailedToWriteProperty { .. })
        ));
    }

    #[test]
    fn set_through_null_intermediate() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        let error = engine.set(&mut root, "valueObject.value", "x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Null property value for `valueObject` on type `ValueObject`"
        );
        assert!(matches!(
            engine.set(&mut root, "tags[0]", "x"),
            Err(PropertyError::NullReference { .. })
        ));
    }

    #[test]
    fn set_simple_rejects_paths() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        engine.set_simple(&mut root, "value", "plain").unwrap();
        assert_eq!(root.value.as_deref(), Some("plain"));

        let error = engine.set_simple(&mut root, "valueObject.value", "x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot set the value of an indexed or nested property: `valueObject.value`"
        );
        assert!(matches!(
            engine.set_simple(&mut root, "tags[0]", "x"),
            Err(PropertyError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.set_simple(&mut root, "", "x"),
            Err(PropertyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_all_applies_each_entry() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject {
            value_object: Some(Box::default()),
            value_object_list: vec![ValueObject::default()],
            ..ValueObject::default()
        };

        engine
            .set_all(
                &mut root,
                [
                    ("value", Value::from("test")),
                    ("valueObject.value", Value::from(1)),
                    ("valueObjectList[0].value", Value::from(true)),
                ],
            )
            .unwrap();

        assert_eq!(root.value.as_deref(), Some("test"));
        assert_eq!(root.value_object.as_ref().unwrap().value.as_deref(), Some("1"));
        assert_eq!(root.value_object_list[0].value.as_deref(), Some("true"));
    }

    #[test]
    fn set_all_is_not_atomic() {
        let engine = PropertyPathEngine::new();
        let mut root = ValueObject::default();

        let result = engine.set_all(
            &mut root,
            vec![("value", "kept"), ("valueObject.value", "fails"), ("count", "3")],
        );

        assert!(matches!(result, Err(PropertyError::NullReference { .. })));
        assert_eq!(root.value.as_deref(), Some("kept"));
        assert_eq!(root.count, 0);
    }

    // -------------------------------------------------------------------------
    // introspection and display

    #[test]
    fn list_properties_by_filter() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject::default();

        let all = engine.list_properties(&root, PropertyFilter::All);
        assert_eq!(all.first(), Some(&"class"));
        assert!(all.contains(&"valueObjectList"));
        assert!(all.contains(&"secret"));
        assert!(!all.contains(&"cache"));

        let readable = engine.list_properties(&root, PropertyFilter::Readable);
        assert!(readable.contains(&"class"));
        assert!(readable.contains(&"revision"));
        assert!(!readable.contains(&"secret"));

        let writable = engine.list_properties(&root, PropertyFilter::Writable);
        assert!(!writable.contains(&"class"));
        assert!(!writable.contains(&"revision"));
        assert!(writable.contains(&"secret"));

        assert_eq!(
            engine.list_properties(&Rectangle::default(), PropertyFilter::Writable),
            ["width"]
        );
        assert_eq!(engine.list_properties(&5_u8, PropertyFilter::All), ["class"]);
    }

    #[test]
    fn find_marked_properties() {
        let engine = PropertyPathEngine::new();
        let required = engine.find_marked(&Account::default(), MarkerKind::Required);
        assert_eq!(required.into_iter().collect::<Vec<_>>(), ["age", "email"]);
    }

    #[test]
    fn describe_values() {
        let engine = PropertyPathEngine::new();
        let root = ValueObject {
            customer: Some(Customer::with_id(7)),
            status: Some(Status::Suspended),
            created: Some(Utc.with_ymd_and_hms(2023, 5, 1, 8, 30, 0).unwrap()),
            ..ValueObject::default()
        };

        assert_eq!(engine.describe_property(&root, "customer").unwrap(), "Customer#7");
        assert_eq!(engine.describe_property(&root, "status").unwrap(), "Suspended account");
        assert_eq!(engine.describe_property(&root, "created").unwrap(), "2023-05-01 08:30:00");
        assert_eq!(engine.describe_property(&root, "count").unwrap(), "0");
        assert_eq!(engine.describe(&Value::Null), "null");
    }

    // -------------------------------------------------------------------------
    // configuration

    #[test]
    fn computed_defaults_from_config() {
        let config = EngineConfig {
            computed_defaults: true,
            ..EngineConfig::default()
        };
        let engine = PropertyPathEngine::from_config(&config);
        let mut root = ValueObject::with_value("before");

        engine.set(&mut root, "value", Value::Null).unwrap();
        engine.set(&mut root, "count", "null").unwrap();
        assert_eq!(root.value.as_deref(), Some(""));
        assert_eq!(root.count, 0);
    }

    #[test]
    fn date_time_formats_from_config() {
        let config: EngineConfig = serde_json::from_str(
            r#"{
                "class_property": false,
                "date_time": {
                    "input_formats": ["%d.%m.%Y %H:%M"],
                    "display_format": "%d.%m.%Y"
                }
            }"#,
        )
        .unwrap();
        let engine = PropertyPathEngine::from_config(&config);
        let mut root = ValueObject::default();

        engine.set(&mut root, "created", "01.05.2023 08:30").unwrap();
        assert_eq!(root.created, Some(Utc.with_ymd_and_hms(2023, 5, 1, 8, 30, 0).unwrap()));
        assert_eq!(engine.describe_property(&root, "created").unwrap(), "01.05.2023");
        assert!(engine.get(&root, "class").is_err());
    }
}
