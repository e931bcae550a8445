//! Example source and test stubs.
//!
//! Both files are built from one [`Stub`] per effect level, so the test file's
//! import list is always the exact set of symbols the source file exports.

use crate::config::EffectLevel;

/// One exported symbol of `src/index.ts` and the test cases that exercise it.
#[derive(Debug, Clone, Copy)]
pub struct StubExport {
    pub name: &'static str,
    source: &'static str,
    tests: &'static str,
}

#[derive(Debug, Clone)]
pub struct Stub {
    imports: &'static [&'static str],
    pub exports: Vec<StubExport>,
    /// Statement running `main` with whatever layer it needs
    pub run_main: &'static str,
}

const EFFECT_IMPORT: &str = "import * as Effect from 'effect/Effect'";
const DATA_IMPORT: &str = "import * as Data from 'effect/Data'";

const GREET: StubExport = StubExport {
    name: "greet",
    source: r#"/**
 * Example Effect function
 */
export const greet = (name: string): Effect.Effect<string> =>
  Effect.sync(() => `Hello, ${name}! Welcome to {{projectName}}.`)
"#,
    tests: r#"  it('greets by name', () => {
    const result = Effect.runSync(greet('World'))
    expect(result).toBe('Hello, World! Welcome to {{projectName}}.')
  })
"#,
};

const MAIN: StubExport = StubExport {
    name: "main",
    source: r#"/**
 * Example program using the greet function
 */
export const main: Effect.Effect<void> = Effect.gen(function* () {
  const message = yield* greet('{{projectName}}')
  yield* Effect.log(message)
})
"#,
    tests: r#"  it('runs the example program', () => {
    expect(() => Effect.runSync(main)).not.toThrow()
  })
"#,
};

const MAIN_JUNIOR: StubExport = StubExport {
    name: "main",
    source: r#"/**
 * Example program using the greet function.
 *
 * `Effect.gen` reads like async/await: `yield*` runs an effect and hands back
 * its result. Nothing happens until the program is run, e.g. with
 * `Effect.runSync(main)`.
 */
export const main: Effect.Effect<void> = Effect.gen(function* () {
  const message = yield* greet('{{projectName}}')
  yield* Effect.log(message)
})
"#,
    tests: MAIN.tests,
};

const CONFIG_SERVICE: StubExport = StubExport {
    name: "ConfigService",
    source: r#"/**
 * Example Effect.Service holding configuration
 */
export class ConfigService extends Effect.Service<ConfigService>()('ConfigService', {
  succeed: { appName: '{{projectName}}' }
}) {}
"#,
    tests: r#"  it('reads the app name from ConfigService', () => {
    const program = Effect.gen(function* () {
      const config = yield* ConfigService
      return config.appName
    })
    expect(Effect.runSync(Effect.provide(program, ConfigLive))).toBe('{{projectName}}')
  })
"#,
};

const CONFIG_LIVE: StubExport = StubExport {
    name: "ConfigLive",
    source: r#"/**
 * Layer providing ConfigService
 */
export const ConfigLive = ConfigService.Default
"#,
    tests: "",
};

const MAIN_WITH_CONFIG: StubExport = StubExport {
    name: "main",
    source: r#"/**
 * Example program using the greet function and ConfigService
 */
export const main: Effect.Effect<void, never, ConfigService> = Effect.gen(function* () {
  const config = yield* ConfigService
  const message = yield* greet(config.appName)
  yield* Effect.log(message)
})
"#,
    tests: r#"  it('runs the example program with ConfigLive', () => {
    expect(() => Effect.runSync(Effect.provide(main, ConfigLive))).not.toThrow()
  })
"#,
};

const VALIDATION_ERROR: StubExport = StubExport {
    name: "ValidationError",
    source: r#"/**
 * Error taxonomy for {{projectName}}
 */
export class ValidationError extends Data.TaggedError('ValidationError')<{
  readonly field: string
  readonly reason: string
}> {}
"#,
    tests: r#"  it('fails with a ValidationError for non-string input', () => {
    const program = Effect.gen(function* () {
      const service = yield* DataService
      return yield* service.validate(123)
    })
    const error = Effect.runSync(Effect.flip(Effect.provide(program, DataLive)))
    expect(error).toBeInstanceOf(ValidationError)
  })
"#,
};

const DATA_SERVICE: StubExport = StubExport {
    name: "DataService",
    source: r#"/**
 * Example Effect.Service with a fallible operation
 */
export class DataService extends Effect.Service<DataService>()('DataService', {
  succeed: {
    validate: (data: unknown): Effect.Effect<string, ValidationError> =>
      typeof data === 'string'
        ? Effect.succeed(data)
        : Effect.fail(new ValidationError({ field: 'input', reason: 'Must be a string' })),
    process: (data: string): Effect.Effect<string> => Effect.succeed(data.toUpperCase())
  }
}) {}
"#,
    tests: r#"  it('validates then processes input', () => {
    const program = Effect.gen(function* () {
      const service = yield* DataService
      const valid = yield* service.validate('hello')
      return yield* service.process(valid)
    })
    expect(Effect.runSync(Effect.provide(program, DataLive))).toBe('HELLO')
  })
"#,
};

const DATA_LIVE: StubExport = StubExport {
    name: "DataLive",
    source: r#"/**
 * Layer providing DataService
 */
export const DataLive = DataService.Default
"#,
    tests: "",
};

const MAIN_WITH_DATA: StubExport = StubExport {
    name: "main",
    source: r#"/**
 * Example program composing validate and process
 */
export const main: Effect.Effect<void, ValidationError, DataService> = Effect.gen(function* () {
  const service = yield* DataService
  const result = yield* service.validate('{{projectName}}').pipe(Effect.flatMap(service.process))
  yield* Effect.log(`Processed: ${result}`)
})
"#,
    tests: r#"  it('runs the example program with DataLive', () => {
    expect(() => Effect.runSync(Effect.provide(main, DataLive))).not.toThrow()
  })
"#,
};

impl Stub {
    pub fn for_level(level: EffectLevel) -> Self {
        match level {
            EffectLevel::None => Self {
                imports: &[EFFECT_IMPORT],
                exports: vec![GREET, MAIN],
                run_main: "Effect.runSync(main)",
            },
            EffectLevel::Junior => Self {
                imports: &[EFFECT_IMPORT],
                exports: vec![GREET, MAIN_JUNIOR],
                run_main: "Effect.runSync(main)",
            },
            EffectLevel::Intermediate => Self {
                imports: &[EFFECT_IMPORT],
                exports: vec![GREET, CONFIG_SERVICE, CONFIG_LIVE, MAIN_WITH_CONFIG],
                run_main: "Effect.runSync(Effect.provide(main, ConfigLive))",
            },
            EffectLevel::Senior => Self {
                imports: &[DATA_IMPORT, EFFECT_IMPORT],
                exports: vec![GREET, VALIDATION_ERROR, DATA_SERVICE, DATA_LIVE, MAIN_WITH_DATA],
                run_main: "Effect.runSync(Effect.provide(main, DataLive))",
            },
        }
    }

    pub fn export_names(&self) -> Vec<&'static str> {
        self.exports.iter().map(|e| e.name).collect()
    }

    /// Contents of `src/index.ts`, still carrying `{{projectName}}`.
    pub fn source(&self) -> String {
        let mut out = self.imports.join("\n");
        out.push('\n');
        for export in &self.exports {
            out.push('\n');
            out.push_str(export.source);
        }
        out
    }

    /// Contents of `test/index.test.ts`, still carrying `{{projectName}}`.
    pub fn test(&self) -> String {
        let cases: Vec<&str> =
            self.exports.iter().map(|e| e.tests).filter(|t| !t.is_empty()).collect();
        format!(
            "import {{ describe, it, expect }} from 'vitest'\n\
             {EFFECT_IMPORT}\n\
             import {{ {} }} from '../src/index'\n\
             \n\
             describe('{{{{projectName}}}}', () => {{\n\
             {}\
             }})\n",
            self.export_names().join(", "),
            cases.join("\n"),
        )
    }
}
