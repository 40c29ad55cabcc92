// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fmt::Write;

use super::meta::{MetaElement, MetaKey};
use crate::page::nav::html_escape;

/// Storage capability for a document head. The page pipeline renders against
/// the real [`DocumentHead`]; tests can substitute their own store.
pub trait HeadStore: Send {
    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: &str);

    /// Looks up the element matching `key`. Variant and value must both match,
    /// so `name="x"` and `property="x"` address different elements.
    fn find_meta_mut(&mut self, key: &MetaKey) -> Option<&mut MetaElement>;

    /// Appends without a uniqueness check. Callers that need exactly one
    /// element per key go through [`upsert_meta`](super::upsert_meta).
    fn append_meta(&mut self, element: MetaElement);

    fn meta_elements(&self) -> &[MetaElement];

    /// Serializes the head contents as markup, one element per line, in
    /// insertion order with the title first.
    fn render_html(&self) -> String {
        let mut html = String::new();
        if let Some(title) = self.title() {
            let _ = writeln!(html, "<title>{}</title>", html_escape(title));
        }
        for element in self.meta_elements() {
            let _ = writeln!(html, "{}", element.render_html());
        }
        html
    }
}

/// In-memory head backing the rendered page.
#[derive(Debug, Default)]
pub struct DocumentHead {
    title: Option<String>,
    metas: Vec<MetaElement>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeadStore for DocumentHead {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn find_meta_mut(&mut self, key: &MetaKey) -> Option<&mut MetaElement> {
        self.metas.iter_mut().find(|element| element.key() == key)
    }

    fn append_meta(&mut self, element: MetaElement) {
        self.metas.push(element);
    }

    fn meta_elements(&self) -> &[MetaElement] {
        &self.metas
    }
}

/// The document being rendered. The head is optional so that callers holding
/// a shell without an attached head degrade to no-ops instead of erroring.
pub struct Document {
    head: Option<Box<dyn HeadStore>>,
}

impl Document {
    /// A document with an empty, attached head.
    pub fn new() -> Self {
        Self {
            head: Some(Box::new(DocumentHead::new())),
        }
    }

    /// A document with no head context; metadata operations on it do nothing.
    pub fn headless() -> Self {
        Self { head: None }
    }

    /// A document backed by an injected head store.
    pub fn with_head(head: Box<dyn HeadStore>) -> Self {
        Self { head: Some(head) }
    }

    pub fn head(&self) -> Option<&dyn HeadStore> {
        self.head.as_deref()
    }

    pub fn head_mut(&mut self) -> Option<&mut (dyn HeadStore + 'static)> {
        self.head.as_deref_mut()
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(head) = self.head_mut() {
            head.set_title(title);
        }
    }

    /// Markup for the model-managed portion of `<head>`; empty when no head
    /// is attached.
    pub fn render_head_html(&self) -> String {
        self.head()
            .map(|head| head.render_html())
            .unwrap_or_default()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::upsert_meta;

    #[test]
    fn head_renders_title_then_metas_in_insertion_order() {
        let mut document = Document::new();
        document.set_title("OnDot — 팀 소개");
        upsert_meta(&mut document, MetaKey::name("description"), "소개 페이지");
        upsert_meta(&mut document, MetaKey::property("og:type"), "website");

        let html = document.render_head_html();
        let title_at = html.find("<title>OnDot — 팀 소개</title>").expect("title");
        let description_at = html.find("name=\"description\"").expect("description");
        let og_type_at = html.find("property=\"og:type\"").expect("og:type");

        assert!(title_at < description_at);
        assert!(description_at < og_type_at);
    }

    #[test]
    fn title_markup_is_escaped() {
        let mut document = Document::new();
        document.set_title("a < b & c");

        assert!(
            document
                .render_head_html()
                .contains("<title>a &lt; b &amp; c</title>")
        );
    }

    #[test]
    fn headless_document_renders_nothing() {
        let mut document = Document::headless();
        document.set_title("ignored");

        assert!(document.render_head_html().is_empty());
    }

    #[test]
    fn injected_head_store_is_used() {
        #[derive(Default)]
        struct RecordingHead {
            titles_seen: usize,
            inner: DocumentHead,
        }

        impl HeadStore for RecordingHead {
            fn title(&self) -> Option<&str> {
                self.inner.title()
            }

            fn set_title(&mut self, title: &str) {
                self.titles_seen += 1;
                self.inner.set_title(title);
            }

            fn find_meta_mut(&mut self, key: &MetaKey) -> Option<&mut MetaElement> {
                self.inner.find_meta_mut(key)
            }

            fn append_meta(&mut self, element: MetaElement) {
                self.inner.append_meta(element);
            }

            fn meta_elements(&self) -> &[MetaElement] {
                self.inner.meta_elements()
            }
        }

        let mut document = Document::with_head(Box::new(RecordingHead::default()));
        document.set_title("OnDot");
        upsert_meta(&mut document, MetaKey::property("og:title"), "OnDot");

        assert_eq!(document.head().expect("head").meta_elements().len(), 1);
    }
}
