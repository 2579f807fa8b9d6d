//! Reflected types shared by the unit tests.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use url::Url;

use crate::derive::Reflect;
use crate::info::{NonGenericTypeInfoCell, TypeInfo, TypeKind, Typed};
use crate::type_traits::{Enumerated, Identifiable};
use crate::value::{ApplyError, FromValue, Value};
use crate::{InvocationError, PropertyDescriptor, PropertyHost, Reader, ReflectMut, ReflectRef, Slot};

// -----------------------------------------------------------------------------
// ValueObject

#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(rename_all = "camelCase", debug, partial_eq)]
pub struct ValueObject {
    pub value: Option<String>,
    pub value_object: Option<Box<ValueObject>>,
    pub value_object_list: Vec<ValueObject>,
    pub count: i32,
    pub ratio: f64,
    pub flag: bool,
    pub initial: char,
    pub tags: Option<Vec<String>>,
    pub created: Option<DateTime<Utc>>,
    pub homepage: Option<Url>,
    pub customer: Option<Customer>,
    pub status: Option<Status>,
    #[property(read_only)]
    pub revision: u64,
    #[property(write_only)]
    pub secret: String,
    #[property(skip)]
    pub cache: Vec<u8>,
}

impl ValueObject {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            ..Self::default()
        }
    }

    /// `depth` objects chained through `valueObject`, the last one
    /// holding `value`.
    pub fn chain(depth: usize, value: &str) -> Self {
        let mut root = Self::with_value(value);
        for _ in 1..depth {
            root = Self {
                value_object: Some(Box::new(root)),
                ..Self::default()
            };
        }
        root
    }
}

// -----------------------------------------------------------------------------
// Customer

#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(identity, debug, partial_eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub status: Option<Status>,
}

impl Customer {
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

impl Identifiable for Customer {
    fn from_id(id: i64) -> Self {
        Self::with_id(id)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }
}

// -----------------------------------------------------------------------------
// Status

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Active,
    Suspended,
}

impl Enumerated for Status {
    fn variants() -> &'static [Self] {
        &[Status::Active, Status::Suspended]
    }

    fn code(&self) -> &str {
        match self {
            Status::Active => "ACTIVE",
            Status::Suspended => "SUSPENDED",
        }
    }

    fn external_code(&self) -> Option<&str> {
        match self {
            Status::Active => Some("A"),
            Status::Suspended => Some("SUSP"),
        }
    }

    fn numeric_id(&self) -> Option<i64> {
        match self {
            Status::Active => Some(1),
            Status::Suspended => Some(2),
        }
    }

    fn label(&self) -> &str {
        match self {
            Status::Active => "Active account",
            Status::Suspended => "Suspended account",
        }
    }
}

crate::impl_reflect_enumerated!(Status);

// -----------------------------------------------------------------------------
// Account

#[derive(Debug, Error)]
#[error("`{0}` is not a valid e-mail address")]
pub struct ConstraintViolation(pub String);

#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(rename_all = "camelCase")]
pub struct Account {
    #[constraint(required)]
    #[property(setter = Account::set_email)]
    pub email: String,
    #[constraint(required, bounded_number(min = 18, max = 130))]
    pub age: u8,
    #[constraint(bounded_length(max = 32))]
    pub nickname: Option<String>,
    #[constraint(bounded_date(after = "1900-01-01"))]
    pub birthday: Option<NaiveDate>,
    #[constraint(default = "en")]
    pub locale: String,
    #[constraint(required)]
    #[property(read_only)]
    pub created_by: String,
}

impl Account {
    pub fn set_email(&mut self, email: String) -> Result<(), ConstraintViolation> {
        if !email.contains('@') {
            return Err(ConstraintViolation(email));
        }
        self.email = email;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Rectangle

/// A hand-written host with computed properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Typed for Rectangle {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::builder::<Rectangle>("Rectangle", TypeKind::Host).build())
    }
}

impl crate::Reflect for Rectangle {
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Host(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Host(self)
    }

    fn to_value(&self) -> Value {
        Value::object(self.clone())
    }

    fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
        *self = Self::from_value(value)?;
        Ok(())
    }

    fn reflect_clone(&self) -> Box<dyn crate::Reflect> {
        Box::new(self.clone())
    }
}

impl FromValue for Rectangle {
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        value.take_object::<Self>()
    }
}

fn rectangle(host: &dyn PropertyHost) -> Result<&Rectangle, InvocationError> {
    host.downcast_ref::<Rectangle>()
        .ok_or_else(InvocationError::receiver::<Rectangle>)
}

fn read_width(host: &dyn PropertyHost) -> Result<Slot<'_>, InvocationError> {
    Ok(Slot::Borrowed(&rectangle(host)?.width))
}

fn read_width_mut(host: &mut dyn PropertyHost) -> Result<&mut dyn crate::Reflect, InvocationError> {
    let this = host
        .downcast_mut::<Rectangle>()
        .ok_or_else(InvocationError::receiver::<Rectangle>)?;
    Ok(&mut this.width)
}

fn write_width(host: &mut dyn PropertyHost, value: Value) -> Result<(), InvocationError> {
    let this = host
        .downcast_mut::<Rectangle>()
        .ok_or_else(InvocationError::receiver::<Rectangle>)?;
    this.width = f64::from_value(value)?;
    Ok(())
}

fn read_area(host: &dyn PropertyHost) -> Result<Slot<'_>, InvocationError> {
    let this = rectangle(host)?;
    Ok(Slot::Owned(Value::F64(this.width * this.height)))
}

fn read_sides(host: &dyn PropertyHost) -> Result<Slot<'_>, InvocationError> {
    let this = rectangle(host)?;
    let sides = [this.width, this.height, this.width, this.height];
    Ok(Slot::Owned(Value::List(sides.into_iter().map(Value::F64).collect())))
}

fn read_diagonal(host: &dyn PropertyHost) -> Result<Slot<'_>, InvocationError> {
    let this = rectangle(host)?;
    if this.width < 0.0 || this.height < 0.0 {
        return Err(InvocationError::raised("negative side length"));
    }
    Ok(Slot::Owned(Value::F64(this.width.hypot(this.height))))
}

impl PropertyHost for Rectangle {
    fn descriptors(&self) -> &'static [PropertyDescriptor] {
        static DESCRIPTORS: [PropertyDescriptor; 4] = [
            PropertyDescriptor::new("width", <f64 as Typed>::type_info)
                .with_reader(Reader::new(read_width).with_mut(read_width_mut))
                .with_writer(write_width),
            PropertyDescriptor::new("area", <f64 as Typed>::type_info).with_reader(Reader::new(read_area)),
            PropertyDescriptor::new("sides", <Vec<f64> as Typed>::type_info).with_reader(Reader::new(read_sides)),
            PropertyDescriptor::new("diagonal", <f64 as Typed>::type_info)
                .with_reader(Reader::new(read_diagonal)),
        ];
        &DESCRIPTORS
    }
}
