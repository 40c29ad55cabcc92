// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::templates::{TemplateEngine, render_minijinja_template};
use minijinja::context;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub title: String,
    pub anchor: String,
}

/// The page is a single document; navigation scrolls to section anchors.
pub fn section_navigation() -> Vec<NavItem> {
    vec![
        NavItem {
            title: "팀".to_string(),
            anchor: "team".to_string(),
        },
        NavItem {
            title: "가치".to_string(),
            anchor: "values".to_string(),
        },
        NavItem {
            title: "문의".to_string(),
            anchor: "contact".to_string(),
        },
    ]
}

pub fn generate_navigation_html(
    navigation: &[NavItem],
    template_engine: &dyn TemplateEngine,
) -> String {
    let context = context! {
        navigation => navigation
    };

    match render_minijinja_template(template_engine, "page/nav.html", context) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Failed to render navigation template: {}", err);
            String::new()
        }
    }
}

/// Builds a `mailto:` href with the subject percent-encoded.
pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

pub fn html_escape(input: &str) -> String {
    let mut escaped = String::new();
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
