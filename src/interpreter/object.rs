use std::fmt;

/// The type tag of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Tag of [`Object::Null`].
    Null,
    /// Tag of [`Object::Integer`].
    Integer,
    /// Tag of [`Object::Boolean`].
    Boolean,
}

impl ObjectKind {
    /// Returns the upper-case name of the tag: `NULL`, `INTEGER` or `BOOLEAN`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a runtime value handed back by an evaluator.
///
/// The set of values is closed: anything consuming an `Object` matches on
/// every variant, so a new kind of value is a compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Object {
    /// The absence of a value.
    #[default]
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Object {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::{Object, ObjectKind};
    ///
    /// assert_eq!(Object::from(true).kind(), ObjectKind::Boolean);
    /// assert_eq!(Object::Null.kind().as_str(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Null => ObjectKind::Null,
            Self::Integer(_) => ObjectKind::Integer,
            Self::Boolean(_) => ObjectKind::Boolean,
        }
    }

    /// Renders the value for a human reader.
    ///
    /// Integers render in decimal, booleans as `true` or `false`, and the
    /// null value as `null`.
    ///
    /// # Returns
    /// The same text as the value's `Display` implementation.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::Object;
    ///
    /// assert_eq!(Object::Integer(-42).inspect(), "-42");
    /// assert_eq!(Object::Null.inspect(), "null");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}
