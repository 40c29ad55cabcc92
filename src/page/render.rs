// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::context;

use super::nav::{generate_navigation_html, html_escape, mailto_link, section_navigation};
use super::seo_tags::{apply_page_meta, seed_default_head};
use super::team::builtin_roster;
use crate::config::ValidatedConfig;
use crate::dom::Document;
use crate::templates::{TemplateEngine, load_template, render_minijinja_template};
use crate::util::ReleaseTracker;

pub struct PageRenderContext<'a> {
    pub config: &'a ValidatedConfig,
    pub release_tracker: &'a ReleaseTracker,
    pub template_engine: &'a dyn TemplateEngine,
}

/// Renders the complete team introduction page: head markup from the document
/// model, section bodies from minijinja templates, assembled into the main
/// layout.
pub fn render_team_page(ctx: &PageRenderContext<'_>) -> String {
    let site = &ctx.config.site;

    let mut document = Document::new();
    seed_default_head(&mut document, site);
    apply_page_meta(&mut document, site);
    let head_html = document.render_head_html();

    let nav_html = generate_navigation_html(&section_navigation(), ctx.template_engine);
    let hero_href = mailto_link(&site.hero_email, &site.inquiry_subject);
    let contact_href = mailto_link(&site.contact_email, &site.inquiry_subject);

    let hero_html = render_section(
        ctx.template_engine,
        "page/hero.html",
        context! {
            site_name => site.name,
            contact_href => hero_href,
        },
    );
    let team_html = render_section(
        ctx.template_engine,
        "page/team.html",
        context! {
            members => builtin_roster(),
        },
    );
    let values_html = render_section(ctx.template_engine, "page/values.html", context! {});
    let contact_html = render_section(
        ctx.template_engine,
        "page/contact.html",
        context! {
            email => site.contact_email,
            contact_href => contact_href,
        },
    );

    let template = load_template("page/main_layout").unwrap_or_else(|_| {
        // Fallback template if loading fails
        r#"<!DOCTYPE html>
<html><head>{head_html}</head>
<body>{hero_html}{team_html}{values_html}{contact_html}</body></html>"#
            .to_string()
    });

    let escaped_site_name = html_escape(&site.name);
    let escaped_contact_email = html_escape(&site.contact_email);
    let release_hex = ctx.release_tracker.current_hex();
    let site_css = format!("/builtin/site.css?v={}", release_hex);
    let site_js = format!("/builtin/site.js?v={}", release_hex);
    let favicon_svg = format!("/builtin/favicon.svg?v={}", release_hex);

    let vars = crate::template_vars! {
        "head_html" => &head_html,
        "nav_html" => &nav_html,
        "hero_html" => &hero_html,
        "team_html" => &team_html,
        "values_html" => &values_html,
        "contact_html" => &contact_html,
        "site_name" => &escaped_site_name,
        "contact_email" => &escaped_contact_email,
        "site_css" => &site_css,
        "site_js" => &site_js,
        "favicon_svg" => &favicon_svg,
    };

    crate::templates::render_template(&template, &vars)
}

fn render_section(
    template_engine: &dyn TemplateEngine,
    template_name: &str,
    context: minijinja::Value,
) -> String {
    match render_minijinja_template(template_engine, template_name, context) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Failed to render section template '{}': {}", template_name, err);
            String::new()
        }
    }
}
