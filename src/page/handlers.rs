// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::debug;

use super::error;
use super::render::{PageRenderContext, render_team_page};
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use crate::util::ReleaseTracker;

const HTML_CACHE_CONTROL: &str =
    "public, s-maxage=300, max-age=0, must-revalidate, stale-while-revalidate=30";

pub async fn index(
    config: web::Data<ValidatedConfig>,
    release_tracker: web::Data<ReleaseTracker>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let ctx = PageRenderContext {
        config: config.as_ref(),
        release_tracker: release_tracker.as_ref(),
        template_engine: app_state.templates.as_ref(),
    };

    let html = render_team_page(&ctx);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", HTML_CACHE_CONTROL))
        .body(html))
}

/// Fallback for every route this single-page site does not serve.
pub async fn not_found(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    debug!("No route for {}", req.path());
    error::serve_404(&config.site.name, app_state.templates.as_ref())
}
