use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;

use create_effect_agent::answers::{parse_answers, PresetAnswers};
use create_effect_agent::config::{
    validate_project_name, ConfigResolver, EffectLevel, GenerateConfig, PackageManager,
    PlatformPack, RuleFormat, RunContext, TemplateKind,
};
use create_effect_agent::error::{Error, GenerateStep, Result};
use create_effect_agent::prompt::Prompter;

#[derive(Debug)]
enum Answer {
    Select(usize),
    MultiSelect(Vec<usize>),
    Text(String),
    Confirm(bool),
}

/// Answers prompts from a script and records every question asked.
#[derive(Default)]
struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::default() }
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, message: &str, _options: &[String], _default: usize) -> Result<usize> {
        match self.next(message) {
            Answer::Select(i) => Ok(i),
            other => panic!("expected select answer for '{message}', got {other:?}"),
        }
    }

    fn multi_select(&self, message: &str, _options: &[String]) -> Result<Vec<usize>> {
        match self.next(message) {
            Answer::MultiSelect(v) => Ok(v),
            other => panic!("expected multi-select answer for '{message}', got {other:?}"),
        }
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        match self.next(message) {
            Answer::Text(s) if s.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Answer::Text(s) => Ok(s),
            other => panic!("expected text answer for '{message}', got {other:?}"),
        }
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message) {
            Answer::Confirm(b) => Ok(b),
            other => panic!("expected confirm answer for '{message}', got {other:?}"),
        }
    }
}

fn raw(path: &str, name: Option<&str>, non_interactive: bool) -> GenerateConfig {
    GenerateConfig {
        path: PathBuf::from(path),
        name: name.map(str::to_string),
        non_interactive,
        skip_git: true,
        template: None,
    }
}

fn context() -> RunContext {
    RunContext::new("/work")
}

#[test]
fn test_valid_project_names() {
    for name in ["my-app", "a", "a1-b2", "effect-lib-2"] {
        assert!(validate_project_name(name).is_ok(), "{name} should be valid");
    }
}

#[test]
fn test_invalid_project_names() {
    let too_long = "a".repeat(215);
    let cases: [(&str, &str); 5] = [
        ("My-App", "lowercase"),
        ("-abc", "start with a lowercase letter"),
        ("a--b", "consecutive hyphens"),
        ("", "must not be empty"),
        (&too_long, "at most 214 characters"),
    ];
    for (name, rule) in cases {
        match validate_project_name(name) {
            Err(Error::ValidationError(message)) => {
                assert!(message.contains(rule), "'{name}': expected '{rule}' in '{message}'")
            }
            other => panic!("Expected ValidationError for '{name}', got {other:?}"),
        }
    }
    assert!(validate_project_name(&"a".repeat(214)).is_ok());
}

#[test]
fn test_invalid_character_is_named() {
    let err = validate_project_name("my_app").unwrap_err();
    assert!(err.to_string().contains("found '_'"), "{err}");
}

#[test]
fn test_non_interactive_defaults() {
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let resolved =
        resolver.resolve(&raw("demo", Some("demo-lib"), true), &PresetAnswers::default()).unwrap();

    assert_eq!(resolved.path, PathBuf::from("/work/demo"));
    assert_eq!(resolved.project_name, "demo-lib");
    assert_eq!(resolved.package_manager, PackageManager::Npm);
    assert_eq!(resolved.template_kind, TemplateKind::Basic);
    assert!(resolved.rule_formats.is_empty());
    assert_eq!(resolved.platform_pack, PlatformPack::None);
    assert_eq!(resolved.effect_level, EffectLevel::None);
    assert!(resolved.skip_git);
    assert!(prompter.asked().is_empty());
}

#[test]
fn test_non_interactive_is_deterministic() {
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let config = raw("/tmp/demo", Some("demo-lib"), true);

    let first = resolver.resolve(&config, &PresetAnswers::default()).unwrap();
    let second = resolver.resolve(&config, &PresetAnswers::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_name_inferred_from_path() {
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);

    let resolved = resolver.resolve(&raw("libs/effect-tools", None, true), &PresetAnswers::default());
    assert_eq!(resolved.unwrap().project_name, "effect-tools");

    let resolved = resolver.resolve(&raw("/", None, true), &PresetAnswers::default());
    assert_eq!(resolved.unwrap().project_name, "my-effect-lib");
}

#[test]
fn test_bad_name_fails_before_template() {
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let mut config = raw("demo", Some("Bad_Name"), true);
    config.template = Some("unknown".to_string());

    assert!(matches!(
        resolver.resolve(&config, &PresetAnswers::default()),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_unknown_template_is_a_template_error() {
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let mut config = raw("demo", None, true);
    config.template = Some("monorepo".to_string());

    assert!(matches!(
        resolver.resolve(&config, &PresetAnswers::default()),
        Err(Error::GenerateError { step: GenerateStep::Template, .. })
    ));
}

#[test]
fn test_interactive_prompt_order() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Text("effect-demo".to_string()),
        Answer::Select(1),
        Answer::MultiSelect(vec![3, 0, 6]),
        Answer::Select(2),
        Answer::Select(3),
        Answer::Confirm(true),
    ]);
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let mut config = raw("demo", None, false);
    config.skip_git = false;

    let resolved = resolver.resolve(&config, &PresetAnswers::default()).unwrap();

    assert_eq!(
        prompter.asked(),
        vec![
            "Project name:",
            "Package manager:",
            "Select IDE and agent rules:",
            "TypeScript pack:",
            "Effect pack:",
            "Initialize a git repository?",
        ]
    );
    assert_eq!(resolved.project_name, "effect-demo");
    assert_eq!(resolved.package_manager, PackageManager::Pnpm);
    assert_eq!(
        resolved.rule_formats,
        BTreeSet::from([RuleFormat::Cursor, RuleFormat::Claude, RuleFormat::AgentsMd])
    );
    assert_eq!(resolved.platform_pack, PlatformPack::Frontend);
    assert_eq!(resolved.effect_level, EffectLevel::Senior);
    assert!(!resolved.skip_git);
    assert!(!resolved.non_interactive);
}

#[test]
fn test_interactive_name_default_comes_from_flag() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Text(String::new()),
        Answer::Select(0),
        Answer::MultiSelect(vec![]),
        Answer::Select(0),
        Answer::Select(0),
    ]);
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);

    // skip_git is set, so no confirm prompt
    let resolved =
        resolver.resolve(&raw("demo", Some("from-flag"), false), &PresetAnswers::default()).unwrap();
    assert_eq!(resolved.project_name, "from-flag");
    assert_eq!(prompter.asked().len(), 5);
}

#[test]
fn test_interactive_invalid_name_aborts() {
    let prompter = ScriptedPrompter::new(vec![Answer::Text("Not Kebab".to_string())]);
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);

    let result = resolver.resolve(&raw("demo", None, false), &PresetAnswers::default());
    assert!(matches!(result, Err(Error::ValidationError(_))));
    assert_eq!(prompter.asked(), vec!["Project name:"]);
}

#[test]
fn test_preset_answers_skip_prompts() {
    let preset = parse_answers(
        r#"
name: preset-lib
packageManager: bun
ruleFormats: [windsurf, gemini]
platformPack: backend
git: false
"#,
    )
    .unwrap();
    let prompter = ScriptedPrompter::new(vec![Answer::Select(2)]);
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);
    let mut config = raw("demo", None, false);
    config.skip_git = false;

    let resolved = resolver.resolve(&config, &preset).unwrap();

    assert_eq!(prompter.asked(), vec!["Effect pack:"]);
    assert_eq!(resolved.project_name, "preset-lib");
    assert_eq!(resolved.package_manager, PackageManager::Bun);
    assert_eq!(resolved.rule_formats, BTreeSet::from([RuleFormat::Windsurf, RuleFormat::Gemini]));
    assert_eq!(resolved.platform_pack, PlatformPack::Backend);
    assert_eq!(resolved.effect_level, EffectLevel::Intermediate);
    assert!(resolved.skip_git);
}

#[test]
fn test_flags_beat_preset_answers() {
    let preset = PresetAnswers {
        name: Some("preset-lib".to_string()),
        git: Some(true),
        ..PresetAnswers::default()
    };
    let prompter = ScriptedPrompter::default();
    let ctx = context();
    let resolver = ConfigResolver::new(&ctx, &prompter);

    let resolved = resolver.resolve(&raw("demo", Some("flag-lib"), true), &preset).unwrap();
    assert_eq!(resolved.project_name, "flag-lib");
    assert!(resolved.skip_git);
}
