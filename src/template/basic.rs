//! Files every template kind emits: manifest, compiler configs, stubs, docs
//! and editor/VCS housekeeping.

use serde_json::{json, Value};

use crate::config::{PlatformPack, ResolvedConfig, TemplateKind};
use crate::error::{Error, Result};
use crate::placeholder::{render_checked, Variables};
use crate::renderer::TemplateRenderer;
use crate::template::files::RenderedFileSet;
use crate::template::stub::Stub;

const README: &str = include_str!("../../templates/basic/README.md.j2");
const VITEST_CONFIG: &str = include_str!("../../templates/basic/vitest.config.ts");
const GITIGNORE: &str = include_str!("../../templates/basic/gitignore");
const EDITORCONFIG: &str = include_str!("../../templates/basic/editorconfig");

/// Manifest scripts; identical for every package manager.
pub const SCRIPTS: [(&str, &str); 4] = [
    ("build", "tsc -p tsconfig.build.json"),
    ("typecheck", "tsc --noEmit"),
    ("test", "vitest run"),
    ("format", "prettier --write src"),
];

pub(crate) fn to_json(value: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)
        .map_err(|e| Error::TemplateError(format!("cannot serialize JSON: {e}")))?;
    out.push('\n');
    Ok(out)
}

pub fn package_json(config: &ResolvedConfig) -> Value {
    let description = match config.template_kind {
        TemplateKind::Basic => "A minimal Effect-TS library",
        TemplateKind::Supermemory => "A Supermemory Effect-TS library",
    };
    let description = if config.rule_formats.is_empty() {
        description.to_string()
    } else {
        format!("{description} with agentic development support")
    };

    let scripts: serde_json::Map<String, Value> =
        SCRIPTS.iter().map(|(k, v)| (k.to_string(), Value::from(*v))).collect();

    let mut keywords = vec!["effect", "typescript", "functional-programming"];
    let mut dependencies = json!({ "effect": "^3.18.0" });
    if config.template_kind == TemplateKind::Supermemory {
        keywords.push("supermemory");
        dependencies["effect-supermemory"] = json!("^0.2.5");
    }

    let mut dev_dependencies = json!({
        "@types/node": "^20.0.0",
        "typescript": "^5.9.0",
        "vitest": "^1.0.0",
        "prettier": "^3.0.0"
    });
    if config.platform_pack == PlatformPack::Frontend {
        dev_dependencies["@types/react"] = json!("^18.0.0");
    }

    json!({
        "name": config.project_name,
        "version": "0.0.1",
        "description": description,
        "type": "module",
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "exports": {
            ".": {
                "types": "./dist/index.d.ts",
                "import": "./dist/index.js"
            }
        },
        "scripts": scripts,
        "files": ["dist"],
        "engines": { "node": ">=18.18" },
        "keywords": keywords,
        "author": "",
        "license": "MIT",
        "dependencies": dependencies,
        "devDependencies": dev_dependencies
    })
}

/// Development compiler config; `lib` is omitted entirely for [`PlatformPack::None`].
pub fn tsconfig(config: &ResolvedConfig) -> Value {
    let mut tsconfig = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "declaration": false,
            "outDir": "./dist",
            "removeComments": true,
            "strict": true,
            "noImplicitReturns": true,
            "noImplicitOverride": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "exactOptionalPropertyTypes": true,
            "noImplicitAny": true,
            "noImplicitThis": true,
            "alwaysStrict": true,
            "skipLibCheck": true,
            "esModuleInterop": true,
            "allowSyntheticDefaultImports": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "verbatimModuleSyntax": true,
            "types": ["vitest/globals"]
        },
        "include": ["src/**/*", "test/**/*"],
        "exclude": ["node_modules", "dist"]
    });
    let lib = match config.platform_pack {
        PlatformPack::None => None,
        PlatformPack::Backend => Some(json!(["ES2022"])),
        PlatformPack::Frontend => Some(json!(["ES2022", "DOM", "DOM.Iterable"])),
    };
    if let Some(lib) = lib {
        tsconfig["compilerOptions"]["lib"] = lib;
    }
    tsconfig
}

/// Build config: extends the development one, emits declarations and source
/// maps, and leaves tests out.
pub fn tsconfig_build() -> Value {
    json!({
        "extends": "./tsconfig.json",
        "compilerOptions": {
            "declaration": true,
            "declarationMap": true,
            "outDir": "./dist",
            "removeComments": false,
            "sourceMap": true,
            "inlineSources": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist", "test/**/*"]
    })
}

pub fn render(
    config: &ResolvedConfig,
    variables: &Variables,
    docs: &Value,
    renderer: &dyn TemplateRenderer,
) -> Result<RenderedFileSet> {
    let stub = Stub::for_level(config.effect_level);
    let mut files = RenderedFileSet::new();

    files.insert("package.json", to_json(&package_json(config))?)?;
    files.insert("tsconfig.json", to_json(&tsconfig(config))?)?;
    files.insert("tsconfig.build.json", to_json(&tsconfig_build())?)?;
    files.insert("src/index.ts", render_checked(&stub.source(), variables)?)?;
    files.insert("test/index.test.ts", render_checked(&stub.test(), variables)?)?;
    files.insert("vitest.config.ts", VITEST_CONFIG)?;
    files.insert("README.md", renderer.render(README, docs)?)?;
    files.insert(".gitignore", GITIGNORE)?;
    files.insert(".editorconfig", EDITORCONFIG)?;

    Ok(files)
}
