//! Bind a receiver ("this") and curry arguments onto a callable, producing
//! a reusable bound callable.
//!
//! Pass the receiver and the callable to [`delegate()`] to get a bound
//! delegate; arguments can be fixed at bind time:
//!
//! ```
//! use delegate::{delegate, lit, Value};
//!
//! struct Scaler { a: i64 }
//!
//! fn scale(recv: &Scaler, args: &[Value]) -> Value {
//!     Value::from(recv.a * args[0].as_int().unwrap_or(0))
//! }
//!
//! let d = delegate(Scaler { a: 2 }, scale, vec![]);
//! assert_eq!(d.call(&[Value::from(3)]), Value::from(6));
//!
//! let curried = delegate(Scaler { a: 2 }, scale, vec![lit(Value::from(7))]);
//! assert_eq!(curried.call(&[]), Value::from(14));
//! ```
//!
//! Placeholders bind invocation arguments in non-default locations, or mix
//! them with curried values:
//!
//! ```
//! use delegate::{delegate, bind, bind_at, lit, Value};
//!
//! fn concat(_recv: &(), args: &[Value]) -> Value {
//!     let mut out = String::new();
//!     for arg in args {
//!         if let Ok(s) = arg.as_str() { out.push_str(s) }
//!     }
//!     Value::from(out)
//! }
//!
//! let swapped = delegate((), concat, vec![bind_at(1), bind_at(0)]);
//! assert_eq!(swapped.call(&[Value::from("foo"), Value::from("bar")]),
//!            Value::from("barfoo"));
//!
//! let mixed = delegate((), concat, vec![lit(Value::from("curried")), bind()]);
//! assert_eq!(mixed.call(&[Value::from("late")]), Value::from("curriedlate"));
//! ```
//!
//! The binder is generic over the argument domain: anything implementing
//! [`Argument`] works, including `Option<T>` (absent = `None`) and the
//! bundled [`Value`] (absent = `Value::Unit`).

pub mod util;
pub mod curry;
pub mod delegate;
pub mod value;

pub use util::error::{Error, ErrorKind};
pub use curry::{bind, bind_at, bind_range, lit, CurryArg};
pub use delegate::{delegate, Argument, Delegate};
pub use value::Value;
