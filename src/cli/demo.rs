use anyhow::Result;

use crate::config::AppConfig;
use crate::syntax::csharp::CSharpDocParser;
use crate::syntax::doc_comments::DocMarkers;

/// Sample used by `csdoc demo`: one documented method and one without docs.
pub const SAMPLE_CODE: &str = r#"
public class Calculator
{
    /// <summary>
    /// This method adds two numbers.
    /// </summary>
    public int Add(int a, int b) {
        return a + b;
    }

    private void NotDocumented() {
        // no doc
    }
}
"#;

/// Handles the `demo` command.
pub fn handle_demo(config: &AppConfig) -> Result<()> {
    let mut parser = CSharpDocParser::with_markers(DocMarkers::from(&config.scan))?;

    let units = parser.documented_units(SAMPLE_CODE)?;
    match units.first() {
        Some(unit) => println!("{}", unit.content),
        None => println!("No functions found."),
    }

    println!("Has return value: {}", parser.has_value_return(SAMPLE_CODE)?);
    Ok(())
}
