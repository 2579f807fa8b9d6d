use core::fmt;

use crate::constraint::{ConstraintMarker, MarkerKind};
use crate::info::TypeInfo;
use crate::reflection::{InvocationError, PropertyHost, Reflect, Slot};
use crate::value::Value;

/// Shared read accessor.
pub type ReadFn = for<'a> fn(&'a dyn PropertyHost) -> Result<Slot<'a>, InvocationError>;

/// Mutable read accessor, used to walk into nested values for writing.
pub type ReadMutFn =
    for<'a> fn(&'a mut dyn PropertyHost) -> Result<&'a mut dyn Reflect, InvocationError>;

/// Write accessor. The value has already been converted to the declared type.
pub type WriteFn = fn(&mut dyn PropertyHost, Value) -> Result<(), InvocationError>;

// -----------------------------------------------------------------------------
// Reader

#[derive(Clone, Copy)]
pub struct Reader {
    get: ReadFn,
    get_mut: Option<ReadMutFn>,
}

impl Reader {
    #[inline]
    pub const fn new(get: ReadFn) -> Self {
        Self { get, get_mut: None }
    }

    #[inline]
    pub const fn with_mut(mut self, get_mut: ReadMutFn) -> Self {
        self.get_mut = Some(get_mut);
        self
    }

    #[inline]
    pub fn read<'a>(&self, host: &'a dyn PropertyHost) -> Result<Slot<'a>, InvocationError> {
        (self.get)(host)
    }

    /// Borrows the property mutably, failing with
    /// [`InvocationError::Detached`] for computed properties.
    pub fn read_mut<'a>(
        &self,
        host: &'a mut dyn PropertyHost,
        name: &'static str,
    ) -> Result<&'a mut dyn Reflect, InvocationError> {
        match self.get_mut {
            Some(get_mut) => get_mut(host),
            None => Err(InvocationError::Detached(name)),
        }
    }

    #[inline]
    pub const fn is_detached(&self) -> bool {
        self.get_mut.is_none()
    }
}

// -----------------------------------------------------------------------------
// PropertyDescriptor

/// Static metadata and accessors of one property.
///
/// All builders are `const`, so tables can live in `static` items. This
/// is what `#[derive(Reflect)]` generates, and what a hand-written host
/// with computed properties looks like:
///
/// ```
/// use pk_reflect::info::Typed;
/// use pk_reflect::value::Value;
/// use pk_reflect::{InvocationError, PropertyDescriptor, PropertyHost, Reader, Slot};
///
/// fn read_area(host: &dyn PropertyHost) -> Result<Slot<'_>, InvocationError> {
///     let _ = host;
///     Ok(Slot::Owned(Value::F64(12.0)))
/// }
///
/// static AREA: PropertyDescriptor =
///     PropertyDescriptor::new("area", <f64 as Typed>::type_info).with_reader(Reader::new(read_area));
///
/// assert!(AREA.is_readable());
/// assert!(!AREA.is_writable());
/// assert_eq!(AREA.declared_type().name(), "f64");
/// ```
#[derive(Clone, Copy)]
pub struct PropertyDescriptor {
    name: &'static str,
    declared: fn() -> &'static TypeInfo,
    reader: Option<Reader>,
    writer: Option<WriteFn>,
    markers: &'static [ConstraintMarker],
}

impl PropertyDescriptor {
    /// Creates a descriptor with no accessors and no markers.
    #[inline]
    pub const fn new(name: &'static str, declared: fn() -> &'static TypeInfo) -> Self {
        Self {
            name,
            declared,
            reader: None,
            writer: None,
            markers: &[],
        }
    }

    #[inline]
    pub const fn with_reader(mut self, reader: Reader) -> Self {
        self.reader = Some(reader);
        self
    }

    #[inline]
    pub const fn with_writer(mut self, writer: WriteFn) -> Self {
        self.writer = Some(writer);
        self
    }

    #[inline]
    pub const fn with_markers(mut self, markers: &'static [ConstraintMarker]) -> Self {
        self.markers = markers;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared value type; writes are converted to it.
    #[inline]
    pub fn declared_type(&self) -> &'static TypeInfo {
        (self.declared)()
    }

    #[inline]
    pub const fn reader(&self) -> Option<&Reader> {
        self.reader.as_ref()
    }

    #[inline]
    pub const fn writer(&self) -> Option<WriteFn> {
        self.writer
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.reader.is_some()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writer.is_some()
    }

    #[inline]
    pub const fn markers(&self) -> &'static [ConstraintMarker] {
        self.markers
    }

    pub fn has_marker(&self, kind: MarkerKind) -> bool {
        self.markers.iter().any(|marker| marker.kind() == kind)
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("declared", &self.declared_type().name())
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .field("markers", &self.markers)
            .finish()
    }
}
