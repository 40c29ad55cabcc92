// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Release identifier used for cache-busting asset URLs. Captured once at
/// startup, so every deploy invalidates cached CSS/JS.
#[derive(Clone)]
pub struct ReleaseTracker {
    counter: Arc<AtomicU64>,
}

impl ReleaseTracker {
    /// Initializes the tracker with the current epoch milliseconds to capture
    /// the moment the process started up.
    pub fn new() -> Self {
        let now = current_epoch_millis();
        Self {
            counter: Arc::new(AtomicU64::new(now)),
        }
    }

    /// Returns the current counter value.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Returns the current counter encoded as lowercase hexadecimal.
    pub fn current_hex(&self) -> String {
        format!("{:x}", self.current())
    }
}

impl Default for ReleaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn current_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}
