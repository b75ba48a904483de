//! Catalog item type to Zotero type mapping
//!
//! Citation managers understand the Zotero item-type vocabulary, not the
//! labels a catalog uses. The table below covers the labels with a known
//! equivalent; anything else passes through unchanged on the caller's side.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Type emitted when an item carries no usable type label at all.
pub const DEFAULT_TYPE: &str = "document";

static ZOTERO_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Oral History", "interview"),
        ("Moving Image", "videoRecording"),
        ("Sound", "audioRecording"),
        ("Email", "email"),
        ("Website", "webpage"),
        ("Webpage", "webpage"),
        ("Web Page", "webpage"),
        ("Hyperlink", "webpage"),
        ("Text", "document"),
        ("Document", "document"),
        ("Journal Article", "journalArticle"),
        ("Magazine Article", "magazineArticle"),
        ("Newspaper Article", "newspaperArticle"),
        ("Book", "book"),
        ("Book Section", "bookSection"),
        ("Thesis", "thesis"),
        ("Report", "report"),
        ("Manuscript", "manuscript"),
        ("Map", "map"),
        ("Still Image", "artwork"),
        ("Artwork", "artwork"),
        ("Software", "computerProgram"),
        ("Computer Program", "computerProgram"),
    ])
});

/// Look up the Zotero type for a catalog type label. Exact match only.
pub fn zotero_type(label: &str) -> Option<&'static str> {
    ZOTERO_TYPES.get(label).copied()
}
