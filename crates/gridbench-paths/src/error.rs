use std::fmt;

use gridbench_core::Point;
use thiserror::Error;

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    Blocked,
    SameAsStart,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointIssue::OutOfBounds => f.write_str("outside the grid"),
            EndpointIssue::Blocked => f.write_str("not walkable"),
            EndpointIssue::SameAsStart => f.write_str("same cell as the start"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid {endpoint} {pos}: {issue}")]
    InvalidEndpoint {
        endpoint: Endpoint,
        pos: Point,
        issue: EndpointIssue,
    },
}
