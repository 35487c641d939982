use crate::types::ContentItem;
use serde::{Deserialize, Serialize};

/// One exported page from the site build.
///
/// Every field is optional. Content exporters disagree on what to call the
/// body, so `text` and `body` are accepted as aliases for `content`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub slug: Option<String>,
    pub title: String,
    #[serde(alias = "text", alias = "body")]
    pub content: String,
    pub category: String,
    pub href: Option<String>,
}

impl Document {
    /// Link target: explicit `href`, else `/{slug}/`, else empty.
    pub fn resolved_href(&self) -> String {
        match (&self.href, &self.slug) {
            (Some(href), _) => href.clone(),
            (None, Some(slug)) => format!("/{}/", slug.trim_matches('/')),
            (None, None) => String::new(),
        }
    }
}

impl From<Document> for ContentItem {
    fn from(doc: Document) -> Self {
        let href = doc.resolved_href();
        ContentItem {
            title: doc.title,
            content: doc.content,
            category: doc.category,
            href,
        }
    }
}
