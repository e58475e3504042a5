//! Composition engine: layout planning and canvas blitting.
//!
//! The engine is synchronous and stateless. A call owns nothing beyond its
//! arguments and returns a freshly allocated canvas; callers keep ownership
//! of the decoded inputs.

mod canvas;
mod layout;

pub use canvas::compose;
pub use layout::{LayoutMode, LayoutPlan, Placement, GRID_COLUMNS};
