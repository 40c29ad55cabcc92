// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, Value, default_auto_escape_callback};
use std::collections::HashMap;
use uuid::Uuid;

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        // Page sections
        "page/nav.html" => Some(include_str!("page/templates/nav.html")),
        "page/hero.html" => Some(include_str!("page/templates/hero.html")),
        "page/team.html" => Some(include_str!("page/templates/team.html")),
        "page/values.html" => Some(include_str!("page/templates/values.html")),
        "page/contact.html" => Some(include_str!("page/templates/contact.html")),

        // Error pages
        "error_404.html" => Some(include_str!("page/templates/error_404.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}

/// Simple template rendering utility that replaces placeholders with values
pub fn render_template(template_content: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template_content.to_string();
    let mut replacements = Vec::new();

    for (key, value) in vars {
        let placeholder = format!("{{{}}}", key);
        let token = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(16)
            .collect::<String>();
        let token_placeholder = format!("{{{}}}", token);
        result = result.replace(&placeholder, &token_placeholder);
        replacements.push((token_placeholder, value));
    }

    // Replace randomized placeholders last to avoid collisions with rendered content.
    for (token_placeholder, value) in replacements {
        result = result.replace(&token_placeholder, value);
    }

    result
}

/// Load legacy string-based templates.
pub fn load_template(template_name: &str) -> Result<String, std::io::Error> {
    match template_name {
        "page/main_layout" => Ok(include_str!("page/templates/main_layout.html").to_string()),

        _ => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Template '{}' not found", template_name),
        )),
    }
}

/// Render a minijinja template with the given context
pub fn render_minijinja_template(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> Result<String, minijinja::Error> {
    engine.render(template_name, context)
}

/// Helper macro to create template variables map more easily
#[macro_export]
macro_rules! template_vars {
    ($($key:expr => $value:expr),* $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key, $value.to_string());
            )*
            map
        }
    };
}
