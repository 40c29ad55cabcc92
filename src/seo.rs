// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, Result, web};
use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::app_state::AppState;
use crate::config::ValidatedConfig;

pub async fn robots_txt(config: web::Data<ValidatedConfig>) -> Result<HttpResponse> {
    let base_url = &config.site.base_url;

    let mut body = String::new();
    body.push_str("User-agent: *\n");
    body.push_str("Allow: /\n\n");
    let _ = writeln!(body, "Sitemap: {}/sitemap.xml", base_url);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

/// One-entry sitemap: the site is a single page at the base URL.
pub async fn sitemap_xml(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let loc = escape_xml(&format!("{}/", config.site.base_url));
    let lastmod = format_lastmod(app_state.started_at);

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    xml.push_str("  <url>\n");
    let _ = writeln!(xml, "    <loc>{}</loc>", loc);
    let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod);
    xml.push_str("  </url>\n");
    xml.push_str("</urlset>\n");

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml))
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn format_lastmod(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
