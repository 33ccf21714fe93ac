//! Host failures.

use thiserror::Error;
use wombat_dom::NodeId;

/// Raised when a handle passed to the host cannot be measured.
///
/// Geometry accessors never catch these; they reach the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    /// The id was never allocated in this document.
    #[error("no node with id {0:?} in this document")]
    UnknownNode(NodeId),
    /// The id names the document or a text node.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}
