//! Template rendering.
//! Turns a [`ResolvedConfig`] into the in-memory set of files to write. Rendering
//! is pure: the same configuration always produces the same file set.

use log::debug;
use serde_json::{json, Value};

use crate::config::{EffectLevel, PlatformPack, ResolvedConfig, TemplateKind};
use crate::error::Result;
use crate::placeholder::Variables;
use crate::renderer::TemplateRenderer;

pub mod basic;
pub mod files;
pub mod rules;
pub mod stub;
pub mod supermemory;

pub use files::RenderedFileSet;
use stub::Stub;

/// Variables available to `{{name}}` placeholders in the TypeScript stubs.
pub fn variables(config: &ResolvedConfig) -> Variables {
    Variables::from([
        ("projectName".to_string(), config.project_name.clone()),
        ("packageManager".to_string(), config.package_manager.to_string()),
    ])
}

/// Context handed to the MiniJinja prose templates.
pub fn docs_context(config: &ResolvedConfig) -> Value {
    let stub = Stub::for_level(config.effect_level);
    let description = basic::package_json(config)["description"].clone();
    json!({
        "project_name": config.project_name,
        "description": description,
        "template": config.template_kind.id(),
        "install": config.package_manager.install_command(),
        "run": config.package_manager.run_prefix(),
        "platform_pack": match config.platform_pack {
            PlatformPack::None => "none",
            PlatformPack::Backend => "backend",
            PlatformPack::Frontend => "frontend",
        },
        "effect_level": match config.effect_level {
            EffectLevel::None => "none",
            EffectLevel::Junior => "junior",
            EffectLevel::Intermediate => "intermediate",
            EffectLevel::Senior => "senior",
        },
        "effect_label": config.effect_level.label(),
        "rule_formats": config.rule_formats.iter().map(|f| f.label()).collect::<Vec<_>>(),
        "agents": config.agents(),
        "exports": stub.export_names(),
        "run_main": stub.run_main,
    })
}

/// Renders every file of the configured template.
///
/// # Errors
/// * `Error::TemplateError` / `Error::MissingVariables` on an internal defect:
///   an invalid or duplicated path, a missing variable, or a `{{` left in any output
pub fn render(config: &ResolvedConfig, renderer: &dyn TemplateRenderer) -> Result<RenderedFileSet> {
    let variables = variables(config);
    let docs = docs_context(config);

    let mut files = basic::render(config, &variables, &docs, renderer)?;
    match config.template_kind {
        TemplateKind::Basic => {}
        TemplateKind::Supermemory => files.merge(supermemory::render(&variables)?)?,
    }
    files.merge(rules::render(config, &docs, renderer)?)?;

    files.ensure_fully_substituted()?;
    debug!("Rendered {} files for '{}'", files.len(), config.project_name);
    Ok(files)
}
