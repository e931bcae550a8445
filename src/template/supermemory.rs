use crate::error::Result;
use crate::placeholder::{render_checked, Variables};
use crate::template::files::RenderedFileSet;

const EXAMPLE: &str = include_str!("../../templates/supermemory/example.ts");
const EXAMPLE_TEST: &str = include_str!("../../templates/supermemory/example.test.ts");

/// Memory-service example layered on top of the base files.
pub fn render(variables: &Variables) -> Result<RenderedFileSet> {
    let mut files = RenderedFileSet::new();
    files.insert("src/supermemory/example.ts", render_checked(EXAMPLE, variables)?)?;
    files.insert("test/supermemory.example.test.ts", render_checked(EXAMPLE_TEST, variables)?)?;
    Ok(files)
}
