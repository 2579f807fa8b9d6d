use crate::access::{Cause, PropertyError};
use crate::convert::ConversionRegistryArc;
use crate::info::TypeInfo;
use crate::path::PathSegment;
use crate::value::Value;
use crate::{InvocationError, PropertyHost, Reflect, ReflectMut, ReflectRef, Slot};

/// The read-only pseudo-property naming the runtime type of any value.
pub const CLASS_PROPERTY: &str = "class";

/// Reads and writes single path segments.
///
/// Writes convert the raw value to the declared property type (or the
/// element type, for indexed writes) through the conversion registry.
#[derive(Clone, Copy)]
pub struct PropertyAccessResolver<'r> {
    converters: &'r ConversionRegistryArc,
    class_property: bool,
}

impl<'r> PropertyAccessResolver<'r> {
    #[inline]
    pub fn new(converters: &'r ConversionRegistryArc) -> Self {
        Self {
            converters,
            class_property: true,
        }
    }

    /// Enables or disables the [`CLASS_PROPERTY`] pseudo-property.
    #[inline]
    pub fn with_class_property(mut self, enabled: bool) -> Self {
        self.class_property = enabled;
        self
    }

    fn missing<'a>(&self, name: &str, owner: &'static TypeInfo) -> Result<Slot<'a>, PropertyError> {
        if self.class_property && name == CLASS_PROPERTY {
            return Ok(Slot::Owned(Value::String(owner.name().to_owned())));
        }
        Err(PropertyError::NoSuchProperty {
            property: name.to_owned(),
            owner: owner.name(),
        })
    }

    // -------------------------------------------------------------------------
    // Reads

    /// Reads the property `name` of `target`.
    pub fn read_simple<'a>(&self, target: &'a dyn Reflect, name: &str) -> Result<Slot<'a>, PropertyError> {
        let owner = target.reflect_type_info();
        let host = match target.reflect_ref() {
            ReflectRef::Host(host) => host,
            ReflectRef::Null => {
                return Err(PropertyError::NullReference {
                    property: name.to_owned(),
                    owner: owner.name(),
                });
            }
            ReflectRef::Leaf(_) | ReflectRef::Sequence(_) => return self.missing(name, owner),
        };

        let Some(descriptor) = host.descriptor(name) else {
            return self.missing(name, owner);
        };
        let reader = descriptor.reader().ok_or_else(|| PropertyError::UnreadableProperty {
            property: name.to_owned(),
            owner: owner.name(),
        })?;

        reader.read(host).map_err(|error| PropertyError::FailedToReadProperty {
            property: name.to_owned(),
            owner: owner.name(),
            source: Box::new(error),
        })
    }

    /// Reads element `index` of the sequence property `name`.
    ///
    /// A `Null` property reads as `Null`.
    pub fn read_indexed<'a>(
        &self,
        target: &'a dyn Reflect,
        name: &str,
        index: usize,
    ) -> Result<Slot<'a>, PropertyError> {
        let owner = target.reflect_type_info().name();
        let failed = |source: Cause| PropertyError::FailedToReadProperty {
            property: name.to_owned(),
            owner,
            source,
        };
        let out_of_bounds = |len: usize| failed(Box::new(InvocationError::IndexOutOfBounds { index, len }));
        let not_a_sequence = || failed(Box::new(PropertyError::not_a_sequence(name, owner)));

        match self.read_simple(target, name)? {
            Slot::Borrowed(base) => match base.reflect_ref() {
                ReflectRef::Null => Ok(Slot::Owned(Value::Null)),
                ReflectRef::Sequence(sequence) => sequence
                    .element(index)
                    .map(Slot::Borrowed)
                    .ok_or_else(|| out_of_bounds(sequence.element_count())),
                ReflectRef::Leaf(_) | ReflectRef::Host(_) => Err(not_a_sequence()),
            },
            Slot::Owned(Value::Null) => Ok(Slot::Owned(Value::Null)),
            Slot::Owned(Value::List(mut items)) => {
                if index < items.len() {
                    Ok(Slot::Owned(items.swap_remove(index)))
                } else {
                    Err(out_of_bounds(items.len()))
                }
            }
            Slot::Owned(_) => Err(not_a_sequence()),
        }
    }

    /// Reads one segment, indexed or not.
    pub fn read_segment<'a>(
        &self,
        target: &'a dyn Reflect,
        segment: &PathSegment<'_>,
    ) -> Result<Slot<'a>, PropertyError> {
        match segment.index() {
            Some(index) => self.read_indexed(target, segment.name(), index),
            None => self.read_simple(target, segment.name()),
        }
    }

    /// Borrows the property `name` mutably, for walking into it.
    pub fn read_simple_mut<'a>(
        &self,
        target: &'a mut dyn Reflect,
        name: &str,
    ) -> Result<&'a mut dyn Reflect, PropertyError> {
        let owner = target.reflect_type_info().name();
        let host = match target.reflect_mut() {
            ReflectMut::Host(host) => host,
            ReflectMut::Null => {
                return Err(PropertyError::NullReference {
                    property: name.to_owned(),
                    owner,
                });
            }
            ReflectMut::Leaf(_) | ReflectMut::Sequence(_) => {
                return Err(PropertyError::NoSuchProperty {
                    property: name.to_owned(),
                    owner,
                });
            }
        };

        let descriptor = host.descriptor(name).ok_or_else(|| PropertyError::NoSuchProperty {
            property: name.to_owned(),
            owner,
        })?;
        let reader = descriptor.reader().ok_or_else(|| PropertyError::UnreadableProperty {
            property: name.to_owned(),
            owner,
        })?;

        reader
            .read_mut(host, descriptor.name())
            .map_err(|error| PropertyError::FailedToReadProperty {
                property: name.to_owned(),
                owner,
                source: Box::new(error),
            })
    }

    /// Borrows one segment mutably.
    ///
    /// Returns `None` if the segment holds an absent value.
    pub fn read_segment_mut<'a>(
        &self,
        target: &'a mut dyn Reflect,
        segment: &PathSegment<'_>,
    ) -> Result<Option<&'a mut dyn Reflect>, PropertyError> {
        let name = segment.name();
        let value = match segment.index() {
            None => self.read_simple_mut(target, name)?,
            Some(index) => {
                let owner = target.reflect_type_info().name();
                let failed = |source: Cause| PropertyError::FailedToReadProperty {
                    property: name.to_owned(),
                    owner,
                    source,
                };
                let base = self.read_simple_mut(target, name)?;
                match base.reflect_mut() {
                    ReflectMut::Null => return Ok(None),
                    ReflectMut::Sequence(sequence) => {
                        let len = sequence.element_count();
                        sequence.element_mut(index).ok_or_else(|| {
                            failed(Box::new(InvocationError::IndexOutOfBounds { index, len }))
                        })?
                    }
                    ReflectMut::Leaf(_) | ReflectMut::Host(_) => {
                        return Err(failed(Box::new(PropertyError::not_a_sequence(name, owner))));
                    }
                }
            }
        };
        Ok(Some(value).filter(|value| !value.reflect_ref().is_null()))
    }

    // -------------------------------------------------------------------------
    // Writes

    /// Converts `raw` to the declared type of `name` and stores it.
    pub fn write_simple(&self, target: &mut dyn Reflect, name: &str, raw: Value) -> Result<(), PropertyError> {
        let owner = target.reflect_type_info();
        let host: &mut dyn PropertyHost = match target.reflect_mut() {
            ReflectMut::Host(host) => host,
            ReflectMut::Null => {
                return Err(PropertyError::NullReference {
                    property: name.to_owned(),
                    owner: owner.name(),
                });
            }
            ReflectMut::Leaf(_) | ReflectMut::Sequence(_) => {
                return Err(self.missing_for_write(name, owner));
            }
        };

        let Some(descriptor) = host.descriptor(name) else {
            return Err(self.missing_for_write(name, owner));
        };
        let writer = descriptor.writer().ok_or_else(|| PropertyError::UnwritableProperty {
            property: name.to_owned(),
            owner: owner.name(),
        })?;

        let declared = descriptor.declared_type();
        let failed = |source: Cause, value: Value| PropertyError::FailedToWriteProperty {
            property: name.to_owned(),
            declared: declared.name(),
            value,
            source,
        };

        let converted = match self.converters.convert(declared, raw.clone()) {
            Ok(converted) => converted,
            Err(error) => return Err(failed(Box::new(error), raw)),
        };
        log::trace!("writing `{}.{name}` as `{}`", owner.name(), declared.name());

        writer(host, converted).map_err(|error| failed(Box::new(error), raw))
    }

    fn missing_for_write(&self, name: &str, owner: &'static TypeInfo) -> PropertyError {
        if self.class_property && name == CLASS_PROPERTY {
            PropertyError::UnwritableProperty {
                property: name.to_owned(),
                owner: owner.name(),
            }
        } else {
            PropertyError::NoSuchProperty {
                property: name.to_owned(),
                owner: owner.name(),
            }
        }
    }

    /// Converts `raw` to the element type of the sequence `name` and
    /// stores it at `index`.
    pub fn write_indexed(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        index: usize,
        raw: Value,
    ) -> Result<(), PropertyError> {
        let owner = target.reflect_type_info().name();
        let base = self.read_simple_mut(target, name)?;
        let declared = base.reflect_type_info().name();
        let failed = |source: Cause, value: Value, declared: &'static str| {
            PropertyError::FailedToWriteProperty {
                property: format!("{name}[{index}]"),
                declared,
                value,
                source,
            }
        };

        let sequence = match base.reflect_mut() {
            ReflectMut::Sequence(sequence) => sequence,
            ReflectMut::Null => {
                return Err(PropertyError::NullReference {
                    property: name.to_owned(),
                    owner,
                });
            }
            ReflectMut::Leaf(_) | ReflectMut::Host(_) => {
                let error = PropertyError::not_a_sequence(name, owner);
                return Err(failed(Box::new(error), raw, declared));
            }
        };

        let element_type = sequence.element_type_info();
        let len = sequence.element_count();
        let Some(element) = sequence.element_mut(index) else {
            let error = InvocationError::IndexOutOfBounds { index, len };
            return Err(failed(Box::new(error), raw, element_type.name()));
        };

        let converted = match self.converters.convert(element_type, raw.clone()) {
            Ok(converted) => converted,
            Err(error) => return Err(failed(Box::new(error), raw, element_type.name())),
        };
        element
            .apply(converted)
            .map_err(|error| failed(Box::new(InvocationError::from(error)), raw, element_type.name()))
    }

    /// Writes one segment, indexed or not.
    pub fn write_segment(
        &self,
        target: &mut dyn Reflect,
        segment: &PathSegment<'_>,
        raw: Value,
    ) -> Result<(), PropertyError> {
        match segment.index() {
            Some(index) => self.write_indexed(target, segment.name(), index, raw),
            None => self.write_simple(target, segment.name(), raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyAccessResolver;
    use crate::access::PropertyError;
    use crate::convert::ConversionRegistryArc;
    use crate::fixtures::{Rectangle, ValueObject};
    use crate::value::Value;
    use crate::{InvocationError, Slot};

    #[test]
    fn read_simple_borrows_fields() {
        let converters = ConversionRegistryArc::default();
        let resolver = PropertyAccessResolver::new(&converters);
        let root = ValueObject::with_value("held");

        let Slot::Borrowed(value) = resolver.read_simple(&root, "value").unwrap() else {
            panic!("stored fields are lent out");
        };
        assert_eq!(value.downcast_ref::<Option<String>>(), Some(&Some("held".to_owned())));
    }

    #[test]
    fn read_indexed_on_owned_lists() {
        let converters = ConversionRegistryArc::default();
        let resolver = PropertyAccessResolver::new(&converters);
        let rectangle = Rectangle {
            width: 2.0,
            height: 5.0,
        };

        let slot = resolver.read_indexed(&rectangle, "sides", 3).unwrap();
        assert_eq!(slot.into_value(), Value::F64(5.0));

        let Err(PropertyError::FailedToReadProperty { source, .. }) = resolver.read_indexed(&rectangle, "sides", 4) else {
            panic!("index 4 is out of bounds");
        };
        assert!(matches!(
            source.downcast_ref::<InvocationError>(),
            Some(InvocationError::IndexOutOfBounds { index: 4, len: 4 })
        ));
    }

    #[test]
    fn computed_properties_cannot_be_walked_into() {
        let converters = ConversionRegistryArc::default();
        let resolver = PropertyAccessResolver::new(&converters);
        let mut rectangle = Rectangle::default();

        let Err(PropertyError::FailedToReadProperty { source, .. }) = resolver.read_simple_mut(&mut rectangle, "area") else {
            panic!("`area` has no mutable reader");
        };
        assert!(matches!(
            source.downcast_ref::<InvocationError>(),
            Some(InvocationError::Detached("area"))
        ));
        assert!(resolver.read_simple_mut(&mut rectangle, "width").is_ok());
    }

    #[test]
    fn write_indexed_converts_to_element_type() {
        let converters = ConversionRegistryArc::default();
        let resolver = PropertyAccessResolver::new(&converters);
        let mut root = ValueObject {
            tags: Some(vec!["a".to_owned(), "b".to_owned()]),
            ..ValueObject::default()
        };

        resolver.write_indexed(&mut root, "tags", 1, Value::Bool(false)).unwrap();
        assert_eq!(root.tags, Some(vec!["a".to_owned(), "false".to_owned()]));

        let error = resolver.write_indexed(&mut root, "count", 0, Value::I32(1)).unwrap_err();
        assert_eq!(error.to_string(), "Failed to set property `count[0]` of type `i32` to `1`");
    }

    #[test]
    fn class_property_is_optional() {
        let converters = ConversionRegistryArc::default();
        let root = ValueObject::default();

        let enabled = PropertyAccessResolver::new(&converters);
        assert_eq!(
            enabled.read_simple(&root, "class").unwrap().into_value(),
            Value::from("ValueObject")
        );

        let disabled = enabled.with_class_property(false);
        assert!(matches!(
            disabled.read_simple(&root, "class"),
            Err(PropertyError::NoSuchProperty { .. })
        ));
    }
}
