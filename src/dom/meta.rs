// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::head::Document;
use crate::page::nav::html_escape;

/// Selector key for a metadata element. A meta tag is addressed either by its
/// `name` attribute or by its `property` attribute, never by both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(String),
    Property(String),
}

impl MetaKey {
    pub fn name(value: impl Into<String>) -> Self {
        MetaKey::Name(value.into())
    }

    pub fn property(value: impl Into<String>) -> Self {
        MetaKey::Property(value.into())
    }

    /// The attribute this key selects on (`name` or `property`).
    pub fn attribute(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MetaKey::Name(value) => value,
            MetaKey::Property(value) => value,
        }
    }
}

/// One `<meta>` element held by a document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaElement {
    key: MetaKey,
    content: String,
}

impl MetaElement {
    pub fn new(key: MetaKey, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
        }
    }

    pub fn key(&self) -> &MetaKey {
        &self.key
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub fn render_html(&self) -> String {
        format!(
            "<meta {}=\"{}\" content=\"{}\">",
            self.key.attribute(),
            html_escape(self.key.value()),
            html_escape(&self.content)
        )
    }
}

/// Ensures exactly one metadata element for `key` exists in the document head
/// and that its content equals `content`.
///
/// An existing element is updated in place; otherwise a new element is
/// appended. Repeated calls with the same key converge to a single element
/// carrying the latest content. A document without a head cannot hold metadata,
/// so the call returns without effect.
pub fn upsert_meta(document: &mut Document, key: MetaKey, content: &str) {
    let Some(head) = document.head_mut() else {
        return;
    };

    if let Some(existing) = head.find_meta_mut(&key) {
        existing.set_content(content);
        return;
    }

    head.append_meta(MetaElement::new(key, content));
}
