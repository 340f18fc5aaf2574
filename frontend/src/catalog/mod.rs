//! Service catalog: the data model, where it comes from, and how it is
//! turned into the contents of the two service grids.
//!
//! The loader is independent of Yew components. It talks to its containers
//! through [`RenderTarget`] and to its data through [`CatalogSource`], so
//! the whole flow runs in plain `#[test]`s.

pub mod error;
pub mod loader;
pub mod model;
pub mod source;

pub use error::CatalogError;
pub use loader::{CatalogLoader, CatalogTargets, ErrorPanel, RenderTarget, TargetView};
pub use model::{ListKind, Service};
pub use source::{CatalogSource, JsonCatalogSource};
