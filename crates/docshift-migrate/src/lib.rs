//! MkDocs site to Hugo/Hextra site migration.
//!
//! Orchestrates a full run around the [`docshift_convert`] engine:
//!
//! 1. Acquire the source repository (local path or shallow clone)
//! 2. Read navigation order from `mkdocs.yml`
//! 3. Copy static assets and create the custom head partial
//! 4. Convert every Markdown document and write it under `content/`
//! 5. Create missing section `_index.md` files
//!
//! Existing section indexes and head partials are never overwritten; converted
//! documents always are.

mod assets;
mod error;
mod migration;
mod routing;
mod scanner;
mod site;
mod source;

pub use assets::{CopiedAsset, copy_assets};
pub use error::MigrateError;
pub use migration::{MigratedPage, Migration, MigrationReport};
pub use routing::route;
pub use scanner::{DocumentRef, Scanner};
pub use site::{HEAD_PARTIAL_PATH, create_head_partial, ensure_section_index};
pub use source::Checkout;
