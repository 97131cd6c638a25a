//! The main public crate of the `spaceless` project.
//!
//! Strips insignificant whitespace from `spaceless` tagged templates at compile time:
//!
//! ```
//! use spaceless::{transform_sync, TransformOptions};
//!
//! let source = "const list = spaceless`<ul>\n  <li>${item}</li>\n</ul>`;";
//! let result = transform_sync(source, &TransformOptions::default()).unwrap();
//!
//! assert_eq!(result.replaced, 1);
//! assert!(result.code.contains("`<ul><li>${item}</li></ul>`"));
//! ```

pub mod codegen;
pub mod errors;
pub mod parser;

pub use errors::TransformError;
pub use spaceless_core::{Keyword, OptionsError, RuleSet, SpacelessOptions, SpacelessRule};
pub use spaceless_transform::{transform_module, transform_program, SpacelessVisitor};

use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceLang {
    #[default]
    Javascript,
    Jsx,
    Typescript,
    Tsx,
}

impl SourceLang {
    /// Guesses the language from a file name, defaulting to JavaScript
    pub fn from_filename(filename: &str) -> SourceLang {
        let extension = filename.rsplit_once('.').map(|(_, ext)| ext);

        match extension {
            Some("ts" | "mts" | "cts") => SourceLang::Typescript,
            Some("tsx") => SourceLang::Tsx,
            Some("jsx") => SourceLang::Jsx,
            _ => SourceLang::Javascript,
        }
    }

    /// Switches between JavaScript and TypeScript, keeping JSX support as is
    pub fn with_typescript(self, typescript: bool) -> SourceLang {
        let jsx = matches!(self, SourceLang::Jsx | SourceLang::Tsx);
        match (typescript, jsx) {
            (false, false) => SourceLang::Javascript,
            (false, true) => SourceLang::Jsx,
            (true, false) => SourceLang::Typescript,
            (true, true) => SourceLang::Tsx,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Rules used by the `spaceless` keyword
    pub spaceless: SpacelessOptions,
    pub lang: SourceLang,
    /// Emit minified code
    pub minify: bool,
}

#[derive(Debug)]
pub struct TransformResult {
    pub code: String,
    /// Number of tagged templates which were rewritten
    pub replaced: usize,
}

/// Parses the source, rewrites the recognized tagged templates and prints the code back
pub fn transform_sync(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformResult, TransformError> {
    let mut module = parser::parse_module(source, options.lang)?;

    let replaced = transform_module(&mut module, &options.spaceless);
    debug!(replaced, "transformed module");

    let code = codegen::stringify(&module, options.minify)?;

    Ok(TransformResult { code, replaced })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swc_core::common::Spanned;

    use super::*;

    #[test]
    fn it_rewrites_spaceless_templates() {
        let source = "const a = spaceless`<div>\n\t<span>Hi</span>\n</div>`;\n";
        let result = transform_sync(source, &TransformOptions::default()).unwrap();

        assert_eq!(result.replaced, 1);
        assert_eq!(result.code, "const a = `<div><span>Hi</span></div>`;\n");
    }

    #[test]
    fn it_leaves_unrelated_code_alone() {
        let source = "const a = html`<div>\n</div>`;\n";
        let result = transform_sync(source, &TransformOptions::default()).unwrap();

        assert_eq!(result.replaced, 0);
        assert_eq!(result.code, source);
    }

    #[test]
    fn it_uses_spaceless_options() {
        let options = TransformOptions {
            spaceless: SpacelessOptions::from_json_str(
                r#"{
                    "remove-new-lines": false,
                    "remove-before-tags": false,
                    "remove-between-tags": false,
                    "remove-before-close": false,
                    "remove-after-close": false,
                    "remove-in-content": true
                }"#,
            )
            .unwrap(),
            ..Default::default()
        };

        let result = transform_sync("x = spaceless`  a   b  `;\n", &options).unwrap();
        assert_eq!(result.code, "x = ` a b `;\n");
    }

    #[test]
    fn it_handles_typescript() {
        let options = TransformOptions {
            lang: SourceLang::Typescript,
            minify: true,
            ..Default::default()
        };

        let result = transform_sync(
            "const a: string = spaceless`<p>\n  <b>x</b>\n</p>`;",
            &options,
        )
        .unwrap();

        assert_eq!(result.replaced, 1);
        assert!(result.code.contains("`<p><b>x</b></p>`"), "{}", result.code);
    }

    #[test]
    fn parse_errors_carry_a_span() {
        let error = transform_sync("const = spaceless`x`;", &TransformOptions::default())
            .expect_err("Should not parse");

        assert!(matches!(error, TransformError::Parse(_)));
        assert!(error.span().hi.0 > 0);
        assert!(error.to_string().starts_with("failed to parse source"));
    }

    #[test]
    fn it_transforms_a_real_module() {
        let source = include_str!("../benches/fixtures/email.js");
        let result = transform_sync(source, &TransformOptions::default()).unwrap();

        assert_eq!(result.replaced, 3);
        assert!(result.code.contains(
            "` Hello ${user.firstName}, your order #${user.lastOrder.id} has shipped. It should arrive within ${user.lastOrder.eta} days. `"
        ), "{}", result.code);
        assert!(result.code.contains(
            "`<tr><td>${item.name}</td><td>${item.quantity}</td><td>${item.price}</td></tr>`"
        ), "{}", result.code);
        assert!(result.code.contains("html`\n    <p>\n        untouched\n    </p>\n`"), "{}", result.code);
    }

    #[test]
    fn output_means_what_the_source_meant() {
        let cases = [
            ("x = spaceless`$\n{y}`;", TransformOptions::default(), "x = `\\${y}`;\n"),
            ("x = spaceless`a\\\n${y}`;", TransformOptions::default(), "x = `a${y}`;\n"),
            (
                "x = spaceless`a\\ `;",
                TransformOptions {
                    spaceless: SpacelessOptions::default().with(SpacelessRule::TrimEdges, true),
                    ..Default::default()
                },
                "x = `a`;\n",
            ),
        ];

        for (source, options, expected) in cases {
            let result = transform_sync(source, &options).unwrap();
            assert_eq!(result.code, expected);

            parser::parse_module(&result.code, SourceLang::Javascript)
                .unwrap_or_else(|_| panic!("{:?} should parse again", result.code));
        }
    }

    #[test]
    fn it_handles_jsx() {
        let source = "const a = <div title={spaceless`<p>\n  <b>x</b>\n</p>`} />;";

        for lang in [SourceLang::Jsx, SourceLang::Tsx] {
            let options = TransformOptions {
                lang,
                ..Default::default()
            };
            let result = transform_sync(source, &options).unwrap();

            assert_eq!(result.replaced, 1);
            assert!(result.code.contains("`<p><b>x</b></p>`"), "{}", result.code);
        }
    }

    #[test]
    fn lang_is_guessed_from_filename() {
        assert_eq!(SourceLang::from_filename("a.ts"), SourceLang::Typescript);
        assert_eq!(SourceLang::from_filename("a.mts"), SourceLang::Typescript);
        assert_eq!(SourceLang::from_filename("a.js"), SourceLang::Javascript);
        assert_eq!(SourceLang::from_filename("a.mjs"), SourceLang::Javascript);
        assert_eq!(SourceLang::from_filename("a.jsx"), SourceLang::Jsx);
        assert_eq!(SourceLang::from_filename("a.tsx"), SourceLang::Tsx);
        assert_eq!(SourceLang::from_filename("-"), SourceLang::Javascript);
        assert_eq!(SourceLang::from_filename("dir.tsx/a"), SourceLang::Javascript);
    }

    #[test]
    fn typescript_switch_keeps_jsx() {
        assert_eq!(SourceLang::Jsx.with_typescript(true), SourceLang::Tsx);
        assert_eq!(SourceLang::Tsx.with_typescript(false), SourceLang::Jsx);
        assert_eq!(SourceLang::Javascript.with_typescript(true), SourceLang::Typescript);
        assert_eq!(SourceLang::Typescript.with_typescript(false), SourceLang::Javascript);
    }
}
