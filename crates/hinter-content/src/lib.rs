//! Report draft content handling for hinter-helper
//!
//! - [`frontmatter`]: split a Markdown document into its YAML header and body
//! - [`report`]: the typed distribution header of a report draft
//! - [`template`]: render new drafts and derive their file names

pub mod error;
pub mod frontmatter;
pub mod report;
pub mod template;

pub use error::{Error, Result};
pub use frontmatter::{Extracted, extract};
pub use report::ReportFrontmatter;
pub use template::{render_draft, sanitize_filename};
