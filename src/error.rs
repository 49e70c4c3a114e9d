use thiserror::Error;

use crate::graphs::Weight;

/// Errors raised while building a graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge {tail} -> {head} has weight {weight}, weights must be finite and non-negative")]
    InvalidWeight {
        tail: String,
        head: String,
        weight: Weight,
    },

    #[error("malformed edge '{0}', expected <tail>,<head>,<weight>")]
    MalformedEdge(String),
}

/// Reasons a path does not answer a shortest path request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a path was found where there should be none")]
    UnexpectedPath,

    #[error("no path was found where there should be one")]
    MissingPath,

    #[error("first vertex of path is {found} but request source is {expected}")]
    WrongSource { expected: String, found: String },

    #[error("last vertex of path is {found} but request target is {expected}")]
    WrongTarget { expected: String, found: String },

    #[error("no edge between {tail} and {head} found")]
    MissingEdge { tail: String, head: String },

    #[error("path distance is {found} but {expected} was expected")]
    WrongDistance { expected: Weight, found: Weight },
}
