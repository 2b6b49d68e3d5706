//! Rendering a document as the engine's `uno.config.ts`.

use std::fs;
use std::path::Path;

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use crate::config::UnoConfig;
use crate::error::ConfigError;

const TEMPLATE_NAME: &str = "uno.config.ts";

const TEMPLATE: &str = r#"import { {{ imports | join(", ") }} } from "unocss";

export default defineConfig({
  rules: [
{% for rule in rules %}
    [{{ rule.name | js }}, { {% for property, value in rule.declarations %}{{ property | js }}: {{ value | js }}{% if not loop.last %}, {% endif %}{% endfor %} }],
{% endfor %}
  ],
  presets: [
{% for preset in presets %}
    {{ preset }}(),
{% endfor %}
  ],
  shortcuts: [
{% for shortcut in shortcuts %}
    { {{ shortcut.name | js }}: {{ shortcut.expansion | js }} },
{% endfor %}
  ],
});
"#;

#[derive(Serialize)]
struct RuleView<'a> {
    name: &'a str,
    declarations: Vec<(&'a str, &'a str)>,
}

#[derive(Serialize)]
struct ShortcutView<'a> {
    name: &'a str,
    expansion: String,
}

/// Renders the document as a TypeScript module for the engine.
///
/// Names and values are written as JSON string literals, which are valid
/// JavaScript strings. Presets are written as calls and imported once each.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPreset`] if a preset identifier cannot be
/// written as a JavaScript identifier.
pub fn render_config_ts(config: &UnoConfig) -> Result<String, ConfigError> {
    let mut imports = vec!["defineConfig"];
    for preset in config.presets() {
        if !preset.is_js_identifier() {
            return Err(ConfigError::InvalidPreset(preset.id().to_string()));
        }
        if !imports.contains(&preset.id()) {
            imports.push(preset.id());
        }
    }

    let rules: Vec<RuleView> = config
        .rules()
        .iter()
        .map(|rule| RuleView {
            name: rule.name(),
            declarations: rule.declarations().iter().collect(),
        })
        .collect();
    let presets: Vec<&str> = config.presets().iter().map(|p| p.id()).collect();
    let shortcuts: Vec<ShortcutView> = config
        .shortcuts()
        .iter()
        .map(|shortcut| ShortcutView {
            name: shortcut.name(),
            expansion: shortcut.expansion(),
        })
        .collect();

    let env = environment()?;
    let source = env.get_template(TEMPLATE_NAME)?.render(minijinja::context! {
        imports => imports,
        rules => rules,
        presets => presets,
        shortcuts => shortcuts,
    })?;

    tracing::trace!(bytes = source.len(), "rendered uno.config.ts");
    Ok(source)
}

/// Renders the document and writes it to `path`.
pub fn write_config_ts(config: &UnoConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let source = render_config_ts(config)?;

    tracing::debug!(path = %path.display(), "writing uno.config.ts");
    fs::write(path, source).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn environment() -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    // Quotes a string as a JavaScript string literal
    env.add_filter("js", |value: String| -> Result<String, Error> {
        serde_json::to_string(&value)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
    });

    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(env)
}
