// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, Result};
use minijinja::context;

use crate::templates::{TemplateEngine, render_minijinja_template};

pub fn serve_404(site_name: &str, template_engine: &dyn TemplateEngine) -> Result<HttpResponse> {
    let context = context! {
        site_name => site_name,
    };

    let body = match render_minijinja_template(template_engine, "error_404.html", context) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Failed to render 404 template: {}", err);
            "<h1>404</h1>".to_string()
        }
    };

    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
