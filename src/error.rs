use core::fmt;
use std::error::Error;

#[derive(Debug, Clone)]
pub struct GraphError {
    kind: GraphErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    DuplicateVertex,
    UnknownVertex,
    NotAdjacent,
    DuplicateEdge,
    SelfLoop,
    Disconnected,
    InvariantViolation,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::DuplicateVertex => f.write_str("DuplicateVertex"),
            Self::UnknownVertex => f.write_str("UnknownVertex"),
            Self::NotAdjacent => f.write_str("NotAdjacent"),
            Self::DuplicateEdge => f.write_str("DuplicateEdge"),
            Self::SelfLoop => f.write_str("SelfLoop"),
            Self::Disconnected => f.write_str("Disconnected"),
            Self::InvariantViolation => f.write_str("InvariantViolation"),
        }
    }
}

impl GraphError {
    pub(crate) fn new(kind: GraphErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for GraphError {}
