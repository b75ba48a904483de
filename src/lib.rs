//! COinS Metadata Encoder
//!
//! Renders COinS ("ContextObjects in Spans") tags for catalog items:
//! `<span class="Z3988" title="...">` elements whose title attribute carries
//! OpenURL bibliographic key-value metadata, ready for citation-management
//! tools to scrape.
//!
//! The encoder is a pure function of the item plus two injected
//! collaborators: a [`MetadataSource`] that exposes the host catalog's
//! descriptive elements, and a [`NameParser`] that splits creator strings
//! into author name parts. The host's storage, templates and HTTP layer
//! stay on the host's side of those seams.

pub mod config;
pub mod encoder;
pub mod error;
pub mod metadata;
pub mod models;
pub mod names;

pub use config::{AuthorNames, CoinsConfig};
pub use encoder::CoinsEncoder;
pub use error::{CoinsError, CoinsResult};
pub use metadata::MetadataSource;
pub use models::context::ContextObject;
pub use models::item_type::zotero_type;
pub use models::name::ParsedName;
pub use names::{FullNameParser, NameParser};
