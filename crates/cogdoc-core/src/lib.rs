//! Expand/collapse state and view-tree rendering for cogdocs.
//!
//! - [`ids`] derives the string id of every group and command.
//! - [`visibility`] holds the per-id flags and their transitions.
//! - [`render`](mod@render) walks a document into a [`ViewNode`] tree.
//! - [`DocsSession`] ties them together for a host.
//!
//! The flags are inverted relative to their names; read the
//! [`visibility`] module docs before changing anything that touches them.

pub mod html;
pub mod ids;
pub mod options;
pub mod outline;
pub mod render;
pub mod session;
pub mod view;
pub mod visibility;

pub use html::to_html;
pub use ids::{IdCollision, IdKind, NodeId, derive_id, find_collisions};
pub use options::{ExampleAffordance, RenderOptions};
pub use outline::to_outline;
pub use render::render;
pub use session::{DocsSession, Phase};
pub use view::{Caret, NodeKind, Toggle, ViewNode};
pub use visibility::VisibilityState;
