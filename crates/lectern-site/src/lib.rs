//! Content index and docs page resolution for Lectern.
//!
//! This crate provides:
//! - [`ContentIndex`]: the pre-built document list with adjacency, loaded from JSON
//! - [`DocsPage`]: everything the layout needs to render one page
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lectern_site::{ContentIndex, DocsPage, ResolveOptions};
//!
//! let index = ContentIndex::load("public/content-index.json".as_ref())?;
//! let options = ResolveOptions::default();
//!
//! let page = DocsPage::resolve(Some(&index), "/docs/v2/smart-contracts/", "Smart Contracts", &options);
//! println!("{:?}", page.edit_url);
//! # Ok(())
//! # }
//! ```

mod index;
mod links;
mod node;
mod page;
mod sidebar;
mod title;
mod toc;

pub use index::{ContentIndex, IndexError, SiteMetadata};
pub use links::{DocsLink, DocsNav, NavRules, edit_url};
pub use node::{DocumentNode, Edge, Frontmatter, Heading, NodeFields, SiblingRef};
pub use page::{DocsPage, PageHead, ResolveOptions, TocColumn};
pub use sidebar::{Sidebar, SidebarGroup, SidebarItem};
pub use title::section_title;
pub use toc::{HeadingIds, TocEntry, build_toc, slugify};
