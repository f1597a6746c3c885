//! Theme application: theme tokens become named presentation variables.

use std::collections::BTreeMap;

use org_config_sdk::{ThemeConfig, ThemeSink};
use parking_lot::RwLock;

/// Variable name / value pairs produced from a theme.
///
/// Names are `--color-<key>`, `--font-<key>`, `--radius-<key>` and
/// `--spacing-base`.
#[must_use]
pub fn theme_variables(theme: &ThemeConfig) -> Vec<(String, String)> {
    let colors = theme
        .colors
        .entries()
        .into_iter()
        .map(|(key, value)| (format!("--color-{key}"), value.to_owned()));
    let fonts = theme
        .fonts
        .entries()
        .into_iter()
        .map(|(key, value)| (format!("--font-{key}"), value.to_owned()));
    let radii = theme
        .border_radius
        .entries()
        .into_iter()
        .map(|(key, value)| (format!("--radius-{key}"), value.to_owned()));

    colors
        .chain(fonts)
        .chain(radii)
        .chain(std::iter::once((
            "--spacing-base".to_owned(),
            theme.spacing.base.clone(),
        )))
        .collect()
}

/// Push every theme token into `sink`.
pub fn apply_theme(theme: &ThemeConfig, sink: &dyn ThemeSink) {
    let vars = theme_variables(theme);
    tracing::debug!(count = vars.len(), "Applying theme variables");
    for (name, value) in &vars {
        sink.set_variable(name, value);
    }
}

/// In-process variable store, the server-side stand-in for a document root.
#[derive(Debug, Default)]
pub struct CssVariables {
    vars: RwLock<BTreeMap<String, String>>,
}

impl CssVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.read().get(name).cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.read().clone()
    }

    /// Render as a `:root { ... }` stylesheet block.
    #[must_use]
    pub fn to_css(&self) -> String {
        let vars = self.vars.read();
        let mut css = String::from(":root {\n");
        for (name, value) in vars.iter() {
            css.push_str("  ");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}

impl ThemeSink for CssVariables {
    fn set_variable(&self, name: &str, value: &str) {
        self.vars.write().insert(name.to_owned(), value.to_owned());
    }
}
