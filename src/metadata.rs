//! Metadata source collaborator trait
//!
//! The host catalog owns item records and their descriptive elements; the
//! encoder only reads them through this seam. Implementations must hand
//! back raw element text, with no HTML entities or filters applied, and
//! must never fail: a missing element is `None`, a missing list is empty.

/// Read access to an item's descriptive metadata elements.
pub trait MetadataSource {
    /// Opaque item record type owned by the host.
    type Item;

    /// Latest text of the named element, unfiltered and unescaped.
    fn element_text(&self, item: &Self::Item, element: &str) -> Option<String>;

    /// All texts of the named element, in storage order.
    fn element_texts(&self, item: &Self::Item, element: &str) -> Vec<String>;

    /// The item's categorical type label, when the catalog defines one.
    fn item_type_name(&self, item: &Self::Item) -> Option<String>;

    /// Latest text of the named element, capped at `max_chars` characters.
    ///
    /// The default implementation is an exact character cut, never
    /// word-aware. Hosts with their own snippet machinery may override.
    fn element_snippet(&self, item: &Self::Item, element: &str, max_chars: usize) -> Option<String> {
        self.element_text(item, element)
            .map(|text| truncate_chars(text, max_chars))
    }
}

/// Cut `text` to at most `max` characters, on a character boundary.
pub(crate) fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
