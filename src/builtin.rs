// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Embedded static assets served under `/builtin/`. URLs carry a release hash
//! query, so responses can be cached as immutable.

use actix_web::{HttpRequest, HttpResponse, Result, web};

const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";

const SITE_CSS: &str = include_str!("../builtin/site.css");
const SITE_JS: &str = include_str!("../builtin/site.js");
const FAVICON_SVG: &str = include_str!("../builtin/favicon.svg");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/builtin/{filename:.*}", web::get().to(serve_builtin_file));
}

async fn serve_builtin_file(req: HttpRequest) -> Result<HttpResponse> {
    let filename: String = match req.match_info().get("filename") {
        Some(f) => f.to_string(),
        None => {
            log::error!("Missing 'filename' parameter in builtin file handler");
            return Ok(HttpResponse::InternalServerError().body("Internal Server Error"));
        }
    };

    let (body, content_type) = match filename.as_str() {
        "site.css" => (SITE_CSS, "text/css; charset=utf-8"),
        "site.js" => (SITE_JS, "application/javascript; charset=utf-8"),
        "favicon.svg" => (FAVICON_SVG, "image/svg+xml"),
        _ => {
            log::debug!("Builtin asset missing: {}", filename);
            return Ok(HttpResponse::NotFound().finish());
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(("Cache-Control", CACHE_CONTROL_IMMUTABLE))
        .body(body))
}
