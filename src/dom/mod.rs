// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Server-side model of the document we render: a head store for title and
//! metadata elements, and the upsert operation that keeps SEO tags unique.

mod head;
mod meta;

pub use head::{Document, DocumentHead, HeadStore};
pub use meta::{MetaElement, MetaKey, upsert_meta};
