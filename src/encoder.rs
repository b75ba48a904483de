//! COinS span encoder
//!
//! Builds the `<span class="Z3988" title="...">` tag for a catalog item.
//! The title attribute carries an OpenURL ContextObject in KEV form,
//! form-urlencoded and then HTML-escaped for embedding in the attribute.

use std::borrow::Cow;

use crate::{
    config::{AuthorNames, CoinsConfig},
    metadata::MetadataSource,
    models::{
        context::ContextObject,
        item_type::{zotero_type, DEFAULT_TYPE},
    },
    names::NameParser,
};

/// CSS class by which citation managers locate COinS spans.
const COINS_SPAN_CLASS: &str = "Z3988";

/// OpenURL ContextObject version.
const CTX_VER: &str = "Z39.88-2004";

/// Metadata format of the referent: Dublin Core in KEV encoding.
const RFT_VAL_FMT: &str = "info:ofi/fmt:kev:mtx:dc";

/// Referrer identifier reported to link resolvers.
const RFR_ID: &str = "info:sid/omeka.org:generator";

/// Descriptions are cut to this many characters.
const DESCRIPTION_SNIPPET: usize = 500;

/// Dublin Core elements copied verbatim into `rft.<element>` keys.
const PLAIN_ELEMENTS: [&str; 10] = [
    "Subject",
    "Publisher",
    "Contributor",
    "Date",
    "Format",
    "Source",
    "Language",
    "Coverage",
    "Rights",
    "Relation",
];

/// COinS encoding service.
///
/// Generic over the host's [`MetadataSource`] and a [`NameParser`]. Every
/// call is independent and side-effect-free apart from collaborator reads;
/// no input can make encoding fail.
#[derive(Debug, Clone)]
pub struct CoinsEncoder<S, N> {
    source: S,
    names: N,
    config: CoinsConfig,
}

impl<S, N> CoinsEncoder<S, N>
where
    S: MetadataSource,
    N: NameParser,
{
    pub fn new(source: S, names: N) -> Self {
        Self::with_config(source, names, CoinsConfig::default())
    }

    pub fn with_config(source: S, names: N, config: CoinsConfig) -> Self {
        Self {
            source,
            names,
            config,
        }
    }

    /// Build the COinS span tag for one item.
    pub fn span(&self, item: &S::Item, page_url: &str) -> String {
        let coins = self.build_context(item, page_url);
        format!(
            r#"<span class="{}" title="{}"></span>"#,
            COINS_SPAN_CLASS,
            html_escape(&coins.to_query())
        )
    }

    /// Build the concatenated COinS span tags for a sequence of items.
    ///
    /// Items are encoded independently, in input order, with no separator.
    pub fn span_all<'a, I>(&self, items: I, page_url: &str) -> String
    where
        I: IntoIterator<Item = &'a S::Item>,
        S::Item: 'a,
    {
        let mut spans = String::new();
        let mut count = 0usize;
        for item in items {
            spans.push_str(&self.span(item, page_url));
            count += 1;
        }
        tracing::trace!("Encoded {count} COinS span(s)");
        spans
    }

    fn build_context(&self, item: &S::Item, page_url: &str) -> ContextObject {
        let mut coins = ContextObject::new();

        coins.push("ctx_ver", CTX_VER);
        coins.push("rft_val_fmt", RFT_VAL_FMT);
        coins.push("rfr_id", RFR_ID);

        self.set_referent_id(&mut coins, item);
        self.set_title(&mut coins, item);
        self.set_description(&mut coins, item);
        let type_resolved = self.set_type(&mut coins, item);
        self.set_creators(&mut coins, item, type_resolved);
        self.set_plain_elements(&mut coins, item);

        // The page showing the item, supplied by the caller.
        coins.push("rft.identifier", page_url);

        coins
    }

    /// Populate `rft_id` from the Dublin Core Identifier.
    ///
    /// `http:`/`https:` identifiers go through raw; anything else with a
    /// scheme becomes an `info:` URI (`doi:10.1/xyz` -> `info:doi/10.1/xyz`,
    /// covering doi, pmid, bibcode and friends). Identifiers with no colon
    /// at all are dropped.
    fn set_referent_id(&self, coins: &mut ContextObject, item: &S::Item) {
        let Some(identifier) = self.source.element_text(item, "Identifier") else {
            return;
        };
        if is_blank(&identifier) {
            return;
        }

        if identifier.starts_with("http:") || identifier.starts_with("https:") {
            coins.push("rft_id", identifier);
        } else if identifier.contains(':') {
            coins.push("rft_id", format!("info:{}", identifier.replacen(':', "/", 1)));
        } else {
            tracing::debug!("Dropping identifier without a scheme: {identifier:?}");
        }
    }

    fn set_title(&self, coins: &mut ContextObject, item: &S::Item) {
        let title = self
            .source
            .element_text(item, "Title")
            .filter(|title| !is_blank(title))
            .unwrap_or_else(|| self.config.unknown_title.clone());
        coins.push("rft.title", title);
    }

    fn set_description(&self, coins: &mut ContextObject, item: &S::Item) {
        if let Some(description) = self
            .source
            .element_snippet(item, "Description", DESCRIPTION_SNIPPET)
        {
            if !is_blank(&description) {
                coins.push("rft.description", description);
            }
        }
    }

    /// Populate `rft.type`, preferring the catalog's own item type label
    /// over the Dublin Core Type element. Returns whether a label was
    /// resolved; the author-parsing policy keys off this.
    fn set_type(&self, coins: &mut ContextObject, item: &S::Item) -> bool {
        let label = self
            .source
            .item_type_name(item)
            .filter(|label| !is_blank(label))
            .or_else(|| {
                self.source
                    .element_text(item, "Type")
                    .filter(|label| !is_blank(label))
            });

        match label {
            Some(label) => {
                let mapped = zotero_type(&label).map(String::from).unwrap_or(label);
                coins.push("rft.type", mapped);
                true
            }
            None => {
                coins.push("rft.type", DEFAULT_TYPE);
                false
            }
        }
    }

    fn set_creators(&self, coins: &mut ContextObject, item: &S::Item, type_resolved: bool) {
        let creators: Vec<String> = self
            .source
            .element_texts(item, "Creator")
            .into_iter()
            .filter(|creator| !is_blank(creator))
            .collect();
        if creators.is_empty() {
            return;
        }

        let parse = match self.config.author_names {
            AuthorNames::Auto => type_resolved,
            AuthorNames::Always => true,
            AuthorNames::Never => false,
        };

        if parse {
            let author = self.names.parse(&creators[0]);
            coins.push("rft.aufirst", author.first_with_initials());
            coins.push("rft.aulast", author.last.as_str());
            for creator in &creators[1..] {
                coins.push("rft.au", self.names.parse(creator).full_name());
            }
        } else {
            for creator in &creators {
                coins.push("rft.creator", creator.as_str());
            }
        }
    }

    fn set_plain_elements(&self, coins: &mut ContextObject, item: &S::Item) {
        for element in PLAIN_ELEMENTS {
            if let Some(text) = self.source.element_text(item, element) {
                if !is_blank(&text) {
                    coins.push(format!("rft.{}", element.to_lowercase()), text);
                }
            }
        }
    }
}

/// Blank-or-absent predicate applied to every field.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Escape a string for embedding in an HTML attribute value.
fn html_escape(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\'']) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}
