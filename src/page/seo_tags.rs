// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::SiteConfig;
use crate::dom::{Document, MetaKey, upsert_meta};

/// Seeds the shell defaults a bare document starts out with: the site name as
/// title and description. Page metadata applied afterwards overwrites these
/// through the same upsert path.
pub fn seed_default_head(document: &mut Document, site: &SiteConfig) {
    document.set_title(&site.name);
    upsert_meta(document, MetaKey::name("description"), &site.name);
    upsert_meta(document, MetaKey::property("og:title"), &site.name);
}

/// Installs the page title and the social-preview tag set for the team page.
/// Idempotent: re-applying never accumulates duplicate elements.
pub fn apply_page_meta(document: &mut Document, site: &SiteConfig) {
    document.set_title(&site.title);
    upsert_meta(document, MetaKey::name("description"), &site.description);
    upsert_meta(document, MetaKey::property("og:title"), &site.title);
    upsert_meta(
        document,
        MetaKey::property("og:description"),
        &site.description,
    );
    upsert_meta(document, MetaKey::property("og:type"), &site.og_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadStore;

    fn count(document: &Document, key: &MetaKey) -> usize {
        document
            .head()
            .map(|head: &dyn HeadStore| {
                head.meta_elements()
                    .iter()
                    .filter(|element| element.key() == key)
                    .count()
            })
            .unwrap_or(0)
    }

    #[test]
    fn page_meta_overwrites_seeded_defaults_without_duplicates() {
        let site = SiteConfig::default();
        let mut document = Document::new();
        seed_default_head(&mut document, &site);
        apply_page_meta(&mut document, &site);

        assert_eq!(count(&document, &MetaKey::name("description")), 1);
        assert_eq!(count(&document, &MetaKey::property("og:title")), 1);
        assert_eq!(count(&document, &MetaKey::property("og:description")), 1);
        assert_eq!(count(&document, &MetaKey::property("og:type")), 1);

        let html = document.render_head_html();
        assert!(html.contains("<title>OnDot — 팀 소개</title>"));
        assert!(html.contains("<meta property=\"og:title\" content=\"OnDot — 팀 소개\">"));
        assert!(html.contains("<meta property=\"og:type\" content=\"website\">"));
    }

    #[test]
    fn reapplying_page_meta_is_idempotent() {
        let site = SiteConfig::default();
        let mut document = Document::new();
        apply_page_meta(&mut document, &site);
        apply_page_meta(&mut document, &site);

        let total = document.head().expect("head").meta_elements().len();
        assert_eq!(total, 4);
    }

    #[test]
    fn headless_document_stays_empty() {
        let site = SiteConfig::default();
        let mut document = Document::headless();
        seed_default_head(&mut document, &site);
        apply_page_meta(&mut document, &site);

        assert!(document.head().is_none());
        assert!(document.render_head_html().is_empty());
    }
}
