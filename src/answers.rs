//! Preset answers loaded from a JSON or YAML file.
//! Answered keys bypass their prompt in interactive mode and replace the
//! defaults in non-interactive mode.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::config::{EffectLevel, PackageManager, PlatformPack, RuleFormat};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresetAnswers {
    pub name: Option<String>,
    pub package_manager: Option<PackageManager>,
    pub rule_formats: Option<Vec<RuleFormat>>,
    pub platform_pack: Option<PlatformPack>,
    pub effect_level: Option<EffectLevel>,
    pub git: Option<bool>,
}

/// Parses answers, trying JSON first and YAML second.
pub fn parse_answers(content: &str) -> Result<PresetAnswers> {
    if content.trim().is_empty() {
        return Ok(PresetAnswers::default());
    }
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
            Error::ConfigError(format!(
                "invalid answers file (as JSON: {json_err}; as YAML: {yaml_err})"
            ))
        }),
    }
}

/// Loads the answers file when one was given.
pub fn load_answers<P: AsRef<Path>>(path: Option<P>) -> Result<PresetAnswers> {
    let Some(path) = path else {
        return Ok(PresetAnswers::default());
    };
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read answers file '{}': {e}", path.display()))
    })?;
    parse_answers(&content)
}
