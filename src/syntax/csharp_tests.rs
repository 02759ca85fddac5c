#[cfg(test)]
mod tests {
    use crate::syntax::csharp::CSharpDocParser;
    use crate::syntax::parser::SyntaxParser;
    use anyhow::Result;

    fn create_parser() -> CSharpDocParser {
        CSharpDocParser::new().expect("C# grammar should load")
    }

    #[test]
    fn test_documented_method_in_class() -> Result<()> {
        let code = r#"
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
        let mut parser = create_parser();
        let report = parser.parse(code, "Calculator.cs")?;

        assert_eq!(report.file_path, "Calculator.cs");
        assert_eq!(report.units.len(), 1, "Only the documented method is reported");
        let unit = &report.units[0];
        assert_eq!(
            unit.content,
            "/// <summary>\n/// This method adds two numbers.\n/// </summary>\npublic int Add(int a, int b) {\n        return a + b;\n    }"
        );
        assert_eq!(unit.doc_lines.len(), 3);
        assert_eq!(unit.start_line, 7);
        assert_eq!(unit.end_line, 9);
        assert!(report.has_value_return);
        Ok(())
    }

    #[test]
    fn test_documented_constructor() -> Result<()> {
        let code = r#"
public class Account
{
    /// Creates an empty account.
    public Account()
    {
    }
}
"#;
        let mut parser = create_parser();
        let units = parser.documented_units(code)?;

        assert_eq!(units.len(), 1);
        assert!(units[0].body.starts_with("public Account()"));
        assert_eq!(units[0].doc_lines, vec!["/// Creates an empty account.".to_string()]);
        Ok(())
    }

    #[test]
    fn test_doc_above_attributed_method() -> Result<()> {
        let code = r#"
class Legacy
{
    /// Old entry point.
    [Obsolete]
    public void Run() { }
}
"#;
        let mut parser = create_parser();
        let units = parser.documented_units(code)?;

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].content, "/// Old entry point.\npublic void Run() { }");
        assert!(!units[0].content.contains("[Obsolete]"));
        Ok(())
    }

    #[test]
    fn test_doc_between_attribute_and_method() -> Result<()> {
        let code = "class C\n{\n    [Obsolete]\n    /// desc\n    public void F() { }\n}\n";
        let mut parser = create_parser();
        let report = parser.parse(code, "C.cs")?;

        assert_eq!(report.units.len(), 1);
        let unit = &report.units[0];
        assert_eq!(unit.content, "/// desc\npublic void F() { }");
        assert_eq!(unit.start_line, 5);
        assert_eq!(unit.end_line, 5);
        Ok(())
    }

    #[test]
    fn test_stacked_attributes_around_doc() -> Result<()> {
        let code = r#"
class C
{
    /// Top.
    [Serializable]

    [Obsolete("use G")]
    /// Bottom.
    public C() { }
}
"#;
        let mut parser = create_parser();
        let units = parser.documented_units(code)?;

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].doc_lines, vec!["/// Top.".to_string(), "/// Bottom.".to_string()]);
        assert_eq!(units[0].body, "public C() { }");
        Ok(())
    }

    #[test]
    fn test_byte_order_mark_is_ignored() -> Result<()> {
        let code = "\u{feff}class C\n{\n    /// Doc.\n    void F() { }\n}\n";
        let mut parser = create_parser();
        let units = parser.documented_units(code)?;

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].content, "/// Doc.\nvoid F() { }");
        assert_eq!(units[0].start_line, 4);
        Ok(())
    }

    #[test]
    fn test_members_in_source_order() -> Result<()> {
        let code = r#"
class Shapes
{
    /// Area.
    public double Area() { return 0; }

    public void Skip() { }

    /// Builds shapes.
    public Shapes() { }

    /// Perimeter.
    public double Perimeter() { return 0; }
}
"#;
        let mut parser = create_parser();
        let units = parser.documented_units(code)?;

        let docs: Vec<&str> = units.iter().map(|u| u.doc_lines[0].as_str()).collect();
        assert_eq!(docs, vec!["/// Area.", "/// Builds shapes.", "/// Perimeter."]);
        Ok(())
    }

    #[test]
    fn test_no_return_value_reported() -> Result<()> {
        let code = "class C { /// Nothing.\n void F() { return; } }";
        let mut parser = create_parser();
        let report = parser.parse(code, "C.cs")?;

        assert!(!report.has_value_return);
        Ok(())
    }

    #[test]
    fn test_parser_is_reusable() -> Result<()> {
        let mut parser = create_parser();
        assert!(parser.has_value_return("class C { int F() { return 1; } }")?);
        assert!(!parser.has_value_return("class C { void F() { return; } }")?);
        assert!(parser.documented_units("class C { void F() {} }")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_parsers_on_separate_threads() -> Result<()> {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let code = format!("class C{i}\n{{\n    /// Doc {i}.\n    void M() {{ }}\n}}\n");
                    let mut parser = CSharpDocParser::new().expect("grammar");
                    parser.documented_units(&code).expect("parse")
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let units = handle.join().expect("thread panicked");
            assert_eq!(units.len(), 1);
            assert_eq!(units[0].doc_lines, vec![format!("/// Doc {i}.")]);
        }
        Ok(())
    }
}
