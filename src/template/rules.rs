//! IDE and agent rule files, one renderer per [`RuleFormat`].

use serde_json::{json, Value};

use crate::config::{ResolvedConfig, RuleFormat};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::template::basic::to_json;
use crate::template::files::RenderedFileSet;

const CURSOR: &str = include_str!("../../templates/rules/cursor.md.j2");
const WINDSURF: &str = include_str!("../../templates/rules/windsurf.md.j2");
const AGENT: &str = include_str!("../../templates/rules/agent.md.j2");
const AGENTS: &str = include_str!("../../templates/rules/agents.md.j2");

pub fn render(
    config: &ResolvedConfig,
    docs: &Value,
    renderer: &dyn TemplateRenderer,
) -> Result<RenderedFileSet> {
    let mut files = RenderedFileSet::new();
    for format in &config.rule_formats {
        files.merge(render_format(*format, config, docs, renderer)?)?;
    }
    Ok(files)
}

fn render_format(
    format: RuleFormat,
    config: &ResolvedConfig,
    docs: &Value,
    renderer: &dyn TemplateRenderer,
) -> Result<RenderedFileSet> {
    let mut files = RenderedFileSet::new();
    match format {
        RuleFormat::Cursor => {
            files.insert(".cursor/rules/agent.md", renderer.render(CURSOR, docs)?)?;
        }
        RuleFormat::VsCode => {
            files.insert(".vscode/settings.json", to_json(&vscode_settings())?)?;
        }
        RuleFormat::Windsurf => {
            files.insert(".windsurf/rules.md", renderer.render(WINDSURF, docs)?)?;
        }
        RuleFormat::Claude | RuleFormat::OpenAi | RuleFormat::Gemini => {
            if let Some(agent) = format.agent_name() {
                agent_doc(&mut files, agent, docs, renderer)?;
            }
        }
        RuleFormat::AgentsMd => {
            // Nothing to aggregate without at least one agent document.
            if !config.agents().is_empty() {
                files.insert("docs/agents/Agents.md", renderer.render(AGENTS, docs)?)?;
            }
        }
    }
    Ok(files)
}

fn agent_doc(
    files: &mut RenderedFileSet,
    agent: &str,
    docs: &Value,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    let mut context = docs.clone();
    context["agent"] = json!(agent);
    files.insert(format!("docs/agents/{agent}.md"), renderer.render(AGENT, &context)?)
}

fn vscode_settings() -> Value {
    json!({
        "typescript.preferences.strict": true,
        "typescript.suggest.autoImports": true,
        "typescript.format.enable": true,
        "editor.formatOnSave": true,
        "editor.defaultFormatter": "esbenp.prettier-vscode",
        "editor.codeActionsOnSave": {
            "source.fixAll.eslint": "explicit",
            "source.organizeImports": "explicit"
        },
        "typescript.preferences.includePackageJsonAutoImports": "auto",
        "files.exclude": {
            "dist/": true,
            "node_modules/": true,
            "*.log": true
        }
    })
}
