use std::fmt;

use bytes::Bytes;
use ordered_float::OrderedFloat;

use crate::delegate::Argument;
use crate::util::error::{Error, ErrorKind};

// Value domain for delegates over loosely-typed arguments; the bundled
// instantiation of the generic binder. Unit doubles as the absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64), Float(OrderedFloat<f64>),
    Char(char),
    String(String),
    Buffer(Bytes),
    Tuple(Vec<Value>)
}

impl Value {
    pub fn is_unit(&self) -> bool {
        match self { Value::Unit => true, _ => false }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected bool"))
        }
    }

    pub fn as_int(&self) -> Result<i64, Error> {
        match self {
            Value::Int(i) => Ok(*i),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected int"))
        }
    }

    pub fn as_float(&self) -> Result<f64, Error> {
        match self {
            Value::Float(f) => Ok(f.into_inner()),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected float"))
        }
    }

    pub fn as_char(&self) -> Result<char, Error> {
        match self {
            Value::Char(c) => Ok(*c),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected char"))
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected string"))
        }
    }

    pub fn as_buffer(&self) -> Result<&[u8], Error> {
        match self {
            Value::Buffer(b) => Ok(b),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected buffer"))
        }
    }

    pub fn as_tuple(&self) -> Result<&[Value], Error> {
        match self {
            Value::Tuple(t) => Ok(t),
            _ => Err(Error::new_const(ErrorKind::BadType, "Expected tuple"))
        }
    }
}

impl Argument for Value {
    fn absent() -> Self {
        Value::Unit
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self { Value::Unit }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Int(i as i64) }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Int(i) }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self { Value::Float(OrderedFloat(f)) }
}

impl From<char> for Value {
    fn from(c: char) -> Self { Value::Char(c) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self { Value::Buffer(b) }
}

impl From<Vec<Value>> for Value {
    fn from(t: Vec<Value>) -> Self { Value::Tuple(t) }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Unit => fmt.write_str("()"),
            Value::Bool(b) => write!(fmt, "{}", b),
            Value::Int(i) => write!(fmt, "{}", i),
            Value::Float(f) => write!(fmt, "{}", f),
            Value::Char(c) => write!(fmt, "'{}'", c),
            Value::String(s) => write!(fmt, "\"{}\"", s),
            Value::Buffer(b) => write!(fmt, "b\"{}\"", String::from_utf8_lossy(b)),
            Value::Tuple(items) => {
                fmt.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { fmt.write_str(", ")?; }
                    write!(fmt, "{}", item)?;
                }
                // empty and one-element tuples keep the trailing comma
                if items.len() <= 1 { fmt.write_str(",")?; }
                fmt.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(2.5), Value::Float(OrderedFloat(2.5)));
        assert_eq!(Value::from("foo"), Value::String("foo".to_string()));
        assert_eq!(Value::from(()), Value::Unit);
        assert_eq!(Value::from(vec![Value::from(1), Value::from(2)]),
                   Value::Tuple(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(42).as_int().unwrap(), 42);
        assert_eq!(Value::from(2.5).as_float().unwrap(), 2.5);
        assert_eq!(Value::from("foo").as_str().unwrap(), "foo");
        assert_eq!(Value::from(true).as_bool().unwrap(), true);
        assert_eq!(Value::from('c').as_char().unwrap(), 'c');
        assert_eq!(Value::from(Bytes::from_static(b"ab")).as_buffer().unwrap(), b"ab");
        assert_eq!(Value::from(vec![Value::from(7)]).as_tuple().unwrap(),
                   &[Value::Int(7)]);
        let err = Value::from("foo").as_int().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadType);
        assert_eq!(Value::Unit.as_float().unwrap_err().kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_absent_is_unit() {
        assert_eq!(Value::absent(), Value::Unit);
        assert!(Value::absent().is_unit());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::Unit), "()");
        assert_eq!(format!("{}", Value::from(42)), "42");
        assert_eq!(format!("{}", Value::from(2.5)), "2.5");
        assert_eq!(format!("{}", Value::from("foo")), "\"foo\"");
        assert_eq!(format!("{}", Value::from('c')), "'c'");
        assert_eq!(format!("{}", Value::from(Bytes::from_static(b"ab"))), "b\"ab\"");
        assert_eq!(format!("{}", Value::Tuple(vec![])), "(,)");
        assert_eq!(format!("{}", Value::Tuple(vec![Value::Int(1)])), "(1,)");
        assert_eq!(format!("{}", Value::Tuple(vec![Value::Int(1), Value::Int(2)])),
                   "(1, 2)");
    }
}
