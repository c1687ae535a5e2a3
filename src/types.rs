//! Core data model types.
//!
//! Elements are dynamically typed [`Value`]s. Every input to the transform and filter utilities
//! is a [`Container`], a closed set of shapes that the dispatch matches exhaustively.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lazy::LazySeq;

/// Logical data type of a non-null [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// Stable lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single dynamically typed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Logical type of this value, or `None` for [`Value::Null`].
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(DataType::Bool),
            Self::Int64(_) => Some(DataType::Int64),
            Self::Float64(_) => Some(DataType::Float64),
            Self::Utf8(_) => Some(DataType::Utf8),
        }
    }

    /// Concrete type name used in diagnostics (`"null"` for [`Value::Null`]).
    pub fn type_name(&self) -> &'static str {
        self.data_type().map_or("null", DataType::name)
    }

    /// Truthiness used by predicates: null, zero, `false` and empty text are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int64(v) => *v != 0,
            Self::Float64(v) => *v != 0.0,
            Self::Utf8(s) => !s.is_empty(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int64(v) => write!(f, "{v}"),
            // `{:?}` keeps the fractional part for whole floats (`2.0`, not `2`).
            Self::Float64(v) => write!(f, "{v:?}"),
            Self::Utf8(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

/// Input and output shape of the transform and filter utilities.
///
/// Dispatch checks the variants in declaration order; eager variants produce an output of the
/// same variant, [`Container::Iter`] produces another lazy sequence, and [`Container::Scalar`]
/// is rejected.
pub enum Container {
    /// Ordered, resizable sequence.
    List(Vec<Value>),
    /// Fixed-size ordered sequence.
    Tuple(Box<[Value]>),
    /// Key-unique mapping. Iteration order is not significant.
    Map(BTreeMap<String, Value>),
    /// Double-ended queue, rebuilt as a queue.
    Deque(VecDeque<Value>),
    /// Text viewed as a sequence of one-character strings, rebuilt as text.
    Text(String),
    /// Generic, possibly infinite, single-pass iterable.
    Iter(LazySeq),
    /// A non-iterable value.
    Scalar(Value),
}

impl Container {
    /// Build a list from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a fixed-size tuple.
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping. Later duplicates of a key replace earlier ones.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a double-ended queue.
    pub fn deque<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Deque(items.into_iter().map(Into::into).collect())
    }

    /// Wrap any iterator as a lazy, single-pass sequence.
    pub fn lazy<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self::Iter(LazySeq::new(items))
    }

    /// Concrete shape name used in diagnostics and events.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "map",
            Self::Deque(_) => "deque",
            Self::Text(_) => "text",
            Self::Iter(_) => "iterator",
            Self::Scalar(v) => v.type_name(),
        }
    }

    /// Number of elements for eager shapes; `None` for lazy sequences and scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Tuple(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            Self::Deque(items) => Some(items.len()),
            Self::Text(text) => Some(text.chars().count()),
            Self::Iter(_) | Self::Scalar(_) => None,
        }
    }

    /// `true` if this is an eager shape holding no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(items) => Some(&items[..]),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Take the lazy sequence out of an [`Container::Iter`].
    pub fn into_lazy(self) -> Option<LazySeq> {
        match self {
            Self::Iter(seq) => Some(seq),
            _ => None,
        }
    }
}

impl From<Vec<Value>> for Container {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Container {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl From<LazySeq> for Container {
    fn from(seq: LazySeq) -> Self {
        Self::Iter(seq)
    }
}

/// Text is iterable; every other value is a scalar.
impl From<Value> for Container {
    fn from(value: Value) -> Self {
        match value {
            Value::Utf8(text) => Self::Text(text),
            other => Self::Scalar(other),
        }
    }
}

/// Lazy sequences never compare equal, not even to themselves.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Deque(a), Self::Deque(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Deque(items) => f.debug_tuple("Deque").field(items).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Iter(seq) => f.debug_tuple("Iter").field(seq).finish(),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

fn fmt_items<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_repr(f)?;
    }
    Ok(())
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => {
                f.write_str("[")?;
                fmt_items(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                fmt_items(f, items.iter())?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    value.fmt_repr(f)?;
                }
                f.write_str("}")
            }
            Self::Deque(items) => {
                f.write_str("deque([")?;
                fmt_items(f, items)?;
                f.write_str("])")
            }
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Iter(_) => f.write_str("<lazy sequence>"),
            Self::Scalar(value) => value.fmt_repr(f),
        }
    }
}

/// A result reported as data: either the produced value or a diagnostic.
///
/// Printing an outcome shows the value or the diagnostic message with no marker, so successful
/// results and failures differ only by content.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// The call produced a value.
    Done(T),
    /// The call failed; the diagnostic is returned in place of the value.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The produced value, discarding any diagnostic.
    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    /// The diagnostic, discarding any produced value.
    pub fn failed(self) -> Option<E> {
        match self {
            Self::Done(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    pub fn as_done(&self) -> Option<&T> {
        match self {
            Self::Done(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    /// Convert into a [`Result`] for callers that prefer `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Done(v) => Ok(v),
            Self::Failed(e) => Err(e),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(v) => v.fmt(f),
            Self::Failed(e) => e.fmt(f),
        }
    }
}
