use std::fmt;

#[derive(Debug)]
pub struct Error(Repr);

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadType,
    Custom
}

impl Error {
    pub fn new<E>(error: E) -> Error
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error(Repr::Custom(ErrorKind::Custom, error.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            Repr::Custom(c, _) => *c,
            Repr::Simple(c) => *c,
            Repr::SimpleMessage(c, _) => *c
        }
    }

    pub fn new_const(kind: ErrorKind, message: &'static str) -> Self {
        Error(Repr::SimpleMessage(kind, message))
    }
}

impl From<ErrorKind> for Error {
    fn from(e: ErrorKind) -> Self {
        Error(Repr::Simple(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Repr::Simple(kind) => write!(fmt, "{:?}", kind),
            Repr::SimpleMessage(_, message) => fmt.write_str(message),
            Repr::Custom(_, error) => error.fmt(fmt)
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug)]
enum Repr {
    Simple(ErrorKind),
    SimpleMessage(ErrorKind, &'static str),
    Custom(ErrorKind, Box<dyn std::error::Error + Send + Sync>)
}
