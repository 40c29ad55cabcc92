// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Avatar fallback when no photo is available.
    pub initial: String,
}

impl TeamMember {
    pub fn new(name: &str, role: &str, bio: &str) -> Self {
        let initial = name.chars().next().map(String::from).unwrap_or_default();
        Self {
            name: name.to_string(),
            role: role.to_string(),
            bio: bio.to_string(),
            initial,
        }
    }
}

/// The roster shown on the team section.
pub fn builtin_roster() -> Vec<TeamMember> {
    vec![
        TeamMember::new(
            "손현수",
            "Android/KMP",
            "Compose, KMP로 실무형 아키텍처를 설계/구현합니다.",
        ),
        TeamMember::new(
            "박세린",
            "Designer",
            "사용자 경험과 비주얼 아이덴티티를 책임지며, 제품의 첫인상을 만듭니다.",
        ),
        TeamMember::new(
            "오남택",
            "Project Manager",
            "팀의 일정과 목표를 조율하며, 원활한 협업과 성공적인 결과물을 이끕니다.",
        ),
        TeamMember::new(
            "문희상",
            "Backend",
            "안정적인 API와 배포 파이프라인을 책임집니다.",
        ),
    ]
}
