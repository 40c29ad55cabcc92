// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use std::sync::Arc;

use ondot_web::app_state::AppState;
use ondot_web::builtin;
use ondot_web::config::{Config, ValidatedConfig};
use ondot_web::page;
use ondot_web::seo;
use ondot_web::util::ReleaseTracker;

pub struct TestHarness {
    pub config: Arc<ValidatedConfig>,
    pub release_tracker: Arc<ReleaseTracker>,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub release_tracker: Arc<ReleaseTracker>,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let config = Arc::new(config.validate().expect("test config"));
        Self {
            config,
            release_tracker: Arc::new(ReleaseTracker::new()),
            app_state: Arc::new(AppState::new()),
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            release_tracker: self.release_tracker.clone(),
            app_state: self.app_state.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.release_tracker))
        .app_data(web::Data::from(bundle.app_state))
        .configure(builtin::configure)
        .route("/robots.txt", web::get().to(seo::robots_txt))
        .route("/sitemap.xml", web::get().to(seo::sitemap_xml))
        .route("/", web::get().to(page::handlers::index))
        .default_service(web::to(page::handlers::not_found))
}
