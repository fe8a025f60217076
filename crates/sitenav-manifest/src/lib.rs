//! Header navigation manifest for the sitenav documentation site.
//!
//! This crate provides the ordered list of top-level navigation entries the
//! site generator renders into the header bar. Each entry is either a direct
//! link or a drop-down group of links:
//! - [`NavEntry`]: tagged union of [`LinkEntry`] and [`GroupEntry`]
//! - [`NavigationManifest`]: the ordered, immutable entry sequence
//! - [`load`]: validating loader with file discovery and a built-in default
//!
//! The manifest is pure configuration data. It is built once at load time,
//! validated against its shape invariants (non-empty labels and targets,
//! non-empty groups, exactly one of `link`/`items` per entry), and consumed
//! read-only. Validation failures are fatal to the build that depends on it.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), sitenav_manifest::ManifestError> {
//! use sitenav_manifest::{NavEntry, load};
//!
//! let manifest = load(None)?;
//! for entry in &manifest {
//!     match entry {
//!         NavEntry::Link(link) => println!("{} -> {}", link.text, link.link),
//!         NavEntry::Group(group) => println!("{} ({} items)", group.text, group.items.len()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod loader;
mod manifest;

pub use entry::{GroupEntry, LinkEntry, NavEntry};
pub use error::ManifestError;
pub use loader::load;
pub use manifest::NavigationManifest;
