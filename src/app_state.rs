// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Process-wide shared state handed to handlers through `web::Data`.
pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    /// Startup instant; doubles as the last-modified date of the rendered page.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
