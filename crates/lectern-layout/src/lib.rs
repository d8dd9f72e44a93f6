//! HTML docs layout and static page builder for Lectern.
//!
//! - [`render_markdown`]: markdown body to HTML with heading anchors
//! - [`render_page`]: full HTML document for a resolved [`DocsPage`](lectern_site::DocsPage)
//! - [`StaticSiteBuilder`]: renders every document of a content index to disk

mod builder;
mod document;
mod markdown;
mod template;

pub use builder::{BuildConfig, BuildError, BuildReport, StaticSiteBuilder, locate_source};
pub use document::{render_current, render_document};
pub use markdown::{RenderedBody, render_markdown};
pub use template::render_page;
