//! Headless document host for the Wombat geometry accessors.
//!
//! [`HeadlessHost`] owns a [`wombat_dom::DomTree`] and a
//! [`wombat_dom::Window`], lays the document out on every geometry read, and
//! implements [`wombat_geometry::GeometryHost`] on top of the result. It is
//! what the accessors run against outside a real browser engine.

mod error;
mod host;

pub use error::HostError;
pub use host::HeadlessHost;
