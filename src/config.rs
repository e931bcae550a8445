//! Generation configuration.
//! Holds the raw command-line configuration, the closed option sets, the project
//! name grammar and the resolver that merges flags, preset answers, prompts and
//! defaults into one [`ResolvedConfig`].

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use cruet::Inflector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::answers::PresetAnswers;
use crate::constants::{DEFAULT_PROJECT_NAME, MAX_PROJECT_NAME_LEN};
use crate::error::{Error, GenerateStep, Result};
use crate::prompt::Prompter;

/// Raw input of a single `generate` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateConfig {
    pub path: PathBuf,
    pub name: Option<String>,
    pub non_interactive: bool,
    pub skip_git: bool,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Pnpm, Self::Bun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Pnpm => "pnpm install",
            Self::Bun => "bun install",
        }
    }

    /// Prefix used to invoke a manifest script, e.g. `npm run test`.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun run",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Basic,
    Supermemory,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [Self::Basic, Self::Supermemory];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Supermemory => "supermemory",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|k| k.id()).collect();
            Error::GenerateError {
                step: GenerateStep::Template,
                message: format!("unknown template '{s}' (expected one of: {})", known.join(", ")),
            }
        })
    }
}

/// IDE or agent rule file generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleFormat {
    Cursor,
    #[serde(rename = "vscode", alias = "vs-code")]
    VsCode,
    Windsurf,
    Claude,
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    #[serde(alias = "agents.md")]
    AgentsMd,
}

impl RuleFormat {
    pub const ALL: [RuleFormat; 7] = [
        Self::Cursor,
        Self::VsCode,
        Self::Windsurf,
        Self::Claude,
        Self::OpenAi,
        Self::Gemini,
        Self::AgentsMd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::VsCode => "VS Code",
            Self::Windsurf => "Windsurf",
            Self::Claude => "Claude",
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
            Self::AgentsMd => "Agents.md",
        }
    }

    /// Name of the agent this format documents, if it is one.
    pub fn agent_name(&self) -> Option<&'static str> {
        match self {
            Self::Claude => Some("Claude"),
            Self::OpenAi => Some("OpenAI"),
            Self::Gemini => Some("Gemini"),
            _ => None,
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard type-library surface targeted by the generated tsconfig.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformPack {
    #[default]
    None,
    #[serde(alias = "back-end")]
    Backend,
    #[serde(alias = "front-end")]
    Frontend,
}

impl PlatformPack {
    pub const ALL: [PlatformPack; 3] = [Self::None, Self::Backend, Self::Frontend];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Backend => "Back-end",
            Self::Frontend => "Front-end",
        }
    }
}

/// How elaborate the generated example code is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectLevel {
    #[default]
    None,
    Junior,
    Intermediate,
    Senior,
}

impl EffectLevel {
    pub const ALL: [EffectLevel; 4] = [Self::None, Self::Junior, Self::Intermediate, Self::Senior];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Junior => "Junior",
            Self::Intermediate => "Intermediate",
            Self::Senior => "Senior",
        }
    }
}

/// Fully validated configuration; never mutated after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Absolute target directory
    pub path: PathBuf,
    pub project_name: String,
    pub non_interactive: bool,
    pub skip_git: bool,
    pub package_manager: PackageManager,
    pub template_kind: TemplateKind,
    pub rule_formats: BTreeSet<RuleFormat>,
    pub platform_pack: PlatformPack,
    pub effect_level: EffectLevel,
}

impl ResolvedConfig {
    /// Agents among the selected rule formats, in display order.
    pub fn agents(&self) -> Vec<&'static str> {
        self.rule_formats.iter().filter_map(RuleFormat::agent_name).collect()
    }
}

/// Process-wide state captured once and threaded through resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub cwd: PathBuf,
}

impl RunContext {
    pub fn new<P: Into<PathBuf>>(cwd: P) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Resolves `path` against the working directory and folds `.`/`..` lexically.
    pub fn absolute_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let joined = self.cwd.join(path.as_ref());
        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }
}

/// Checks `name` against the kebab-case grammar: lowercase letters, digits and
/// hyphens, starting with a letter, no consecutive hyphens, 1 to 214 characters.
pub fn validate_project_name(name: &str) -> Result<()> {
    let violation = if name.is_empty() {
        Some("project name must not be empty".to_string())
    } else if name.chars().count() > MAX_PROJECT_NAME_LEN {
        Some(format!(
            "project name must be at most {MAX_PROJECT_NAME_LEN} characters long (got {})",
            name.chars().count()
        ))
    } else if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        Some(format!("project name '{name}' must start with a lowercase letter"))
    } else if let Some(bad) =
        name.chars().find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        Some(format!(
            "project name '{name}' may only contain lowercase letters, digits and hyphens (found '{bad}')"
        ))
    } else if name.contains("--") {
        Some(format!("project name '{name}' must not contain consecutive hyphens"))
    } else {
        None
    };

    match violation {
        None => Ok(()),
        Some(message) => Err(Error::ValidationError(with_suggestion(message, name))),
    }
}

fn with_suggestion(message: String, name: &str) -> String {
    let suggestion = name.to_kebab_case();
    let suggestion_is_valid = !suggestion.is_empty()
        && suggestion != name
        && suggestion.chars().count() <= MAX_PROJECT_NAME_LEN
        && suggestion.starts_with(|c: char| c.is_ascii_lowercase())
        && suggestion.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !suggestion.contains("--");
    if suggestion_is_valid {
        format!("{message}; try '{suggestion}'")
    } else {
        message
    }
}

/// Merges CLI flags, preset answers, interactive prompts and defaults.
///
/// Resolution has no filesystem or process side effects; in non-interactive
/// mode the prompter is never called.
pub struct ConfigResolver<'a> {
    context: &'a RunContext,
    prompter: &'a dyn Prompter,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(context: &'a RunContext, prompter: &'a dyn Prompter) -> Self {
        Self { context, prompter }
    }

    pub fn resolve(&self, raw: &GenerateConfig, preset: &PresetAnswers) -> Result<ResolvedConfig> {
        let path = self.context.absolute_path(&raw.path);
        let default_name = raw
            .name
            .clone()
            .or_else(|| preset.name.clone())
            .or_else(|| path.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        if raw.non_interactive {
            debug!("Resolving configuration without prompts");
            validate_project_name(&default_name)?;
            let template_kind = resolve_template(raw)?;
            return Ok(ResolvedConfig {
                path,
                project_name: default_name,
                non_interactive: true,
                skip_git: raw.skip_git || preset.git == Some(false),
                package_manager: preset.package_manager.unwrap_or_default(),
                template_kind,
                rule_formats: preset.rule_formats.iter().flatten().copied().collect(),
                platform_pack: preset.platform_pack.unwrap_or_default(),
                effect_level: preset.effect_level.unwrap_or_default(),
            });
        }

        debug!("Resolving configuration interactively");
        let project_name = match &preset.name {
            Some(_) => default_name,
            None => self.prompter.text("Project name:", Some(&default_name))?,
        };
        validate_project_name(&project_name)?;
        let template_kind = resolve_template(raw)?;

        let package_manager = match preset.package_manager {
            Some(pm) => pm,
            None => self.choose("Package manager:", &PackageManager::ALL, PackageManager::as_str)?,
        };

        let rule_formats = match &preset.rule_formats {
            Some(formats) => formats.iter().copied().collect(),
            None => {
                let labels = labels(&RuleFormat::ALL, RuleFormat::label);
                self.prompter
                    .multi_select("Select IDE and agent rules:", &labels)?
                    .into_iter()
                    .map(|i| option_at(&RuleFormat::ALL, i))
                    .collect::<Result<BTreeSet<_>>>()?
            }
        };

        let platform_pack = match preset.platform_pack {
            Some(pack) => pack,
            None => self.choose("TypeScript pack:", &PlatformPack::ALL, PlatformPack::label)?,
        };

        let effect_level = match preset.effect_level {
            Some(level) => level,
            None => self.choose("Effect pack:", &EffectLevel::ALL, EffectLevel::label)?,
        };

        let skip_git = if raw.skip_git {
            true
        } else {
            match preset.git {
                Some(git) => !git,
                None => !self.prompter.confirm("Initialize a git repository?", true)?,
            }
        };

        Ok(ResolvedConfig {
            path,
            project_name,
            non_interactive: false,
            skip_git,
            package_manager,
            template_kind,
            rule_formats,
            platform_pack,
            effect_level,
        })
    }

    fn choose<T: Copy>(&self, message: &str, options: &[T], label: fn(&T) -> &'static str) -> Result<T> {
        let labels = labels(options, label);
        let index = self.prompter.select(message, &labels, 0)?;
        option_at(options, index)
    }
}

fn resolve_template(raw: &GenerateConfig) -> Result<TemplateKind> {
    match raw.template.as_deref() {
        Some(id) => id.parse(),
        None => Ok(TemplateKind::default()),
    }
}

fn labels<T>(options: &[T], label: fn(&T) -> &'static str) -> Vec<String> {
    options.iter().map(|o| label(o).to_string()).collect()
}

fn option_at<T: Copy>(options: &[T], index: usize) -> Result<T> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| Error::ValidationError(format!("selection {index} is out of range")))
}
