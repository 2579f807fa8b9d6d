use alloc::borrow::Cow;
use core::fmt;

use crate::access::PropertyError;
use crate::path::{extract_index, is_indexed, is_nested, split};

/// One step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment<'a> {
    name: Cow<'a, str>,
    index: Option<usize>,
    terminal: bool,
}

impl<'a> PathSegment<'a> {
    /// Parses a single segment.
    ///
    /// A segment matching `name[digits]` is split into name and index;
    /// any other text is kept verbatim as the property name.
    pub fn parse(segment: &'a str, terminal: bool) -> Result<Self, PropertyError> {
        if is_indexed(segment) {
            let index = extract_index(segment)?;
            let end = segment.find('[').unwrap_or(segment.len());
            Ok(Self {
                name: Cow::Borrowed(&segment[..end]),
                index: Some(index),
                terminal,
            })
        } else {
            Ok(Self {
                name: Cow::Borrowed(segment),
                index: None,
                terminal,
            })
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// `true` for the last segment of a path.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn into_owned(self) -> PathSegment<'static> {
        PathSegment {
            name: Cow::Owned(self.name.into_owned()),
            index: self.index,
            terminal: self.terminal,
        }
    }
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{index}]", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed property path.
///
/// ```
/// use pk_reflect::path::PropertyPath;
///
/// let path = PropertyPath::parse("valueObjectList[0].value").unwrap();
/// let segments = path.segments();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].name(), "valueObjectList");
/// assert_eq!(segments[0].index(), Some(0));
/// assert!(segments[1].is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    segments: Vec<PathSegment<'a>>,
}

impl<'a> PropertyPath<'a> {
    /// Parses `path`.
    ///
    /// Fails with [`PropertyError::InvalidArgument`] for an empty path
    /// and with a number format error for a malformed index.
    pub fn parse(path: &'a str) -> Result<Self, PropertyError> {
        if path.trim().is_empty() {
            return Err(PropertyError::missing_name());
        }

        if !is_nested(path) {
            return Ok(Self {
                segments: vec![PathSegment::parse(path, true)?],
            });
        }

        let mut segments = Vec::new();
        let mut rest = Some(path);
        while let Some(remaining) = rest {
            let (head, tail) = split(remaining);
            segments.push(PathSegment::parse(head, tail.is_none())?);
            rest = tail;
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment<'a>] {
        &self.segments
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}
