use napi_derive::napi;
use spaceless::{SourceLang, SpacelessOptions, TransformOptions, TransformResult};

/// Raw options passed from the Node.js side
#[napi(object)]
#[derive(Default, Clone)]
pub struct SpacelessJsOptions {
    /// Used to guess the language and JSX support, e.g. `.tsx` or `.jsx`
    pub filename: Option<String>,

    /// Parse as TypeScript. Default: guessed from `filename`, otherwise false
    pub typescript: Option<bool>,

    /// Emit minified code. Default: false
    pub minify: Option<bool>,

    /// Rule toggles of the `spaceless` keyword, e.g. `{ "remove-in-content": true }`.
    /// Missing and non-boolean entries keep their defaults.
    #[napi(ts_type = "Record<string, boolean>")]
    pub rules: Option<serde_json::Value>,
}

#[napi(object)]
pub struct SpacelessJsResult {
    pub code: String,
    /// How many tagged templates were rewritten
    pub replaced: u32,
}

impl SpacelessJsOptions {
    pub fn into_transform_options(self) -> TransformOptions {
        let guessed = self
            .filename
            .as_deref()
            .map_or(SourceLang::Javascript, SourceLang::from_filename);
        let lang = match self.typescript {
            Some(typescript) => guessed.with_typescript(typescript),
            None => guessed,
        };

        let spaceless = self
            .rules
            .as_ref()
            .map_or_else(SpacelessOptions::default, SpacelessOptions::from_json_value);

        TransformOptions {
            spaceless,
            lang,
            minify: self.minify.unwrap_or(false),
        }
    }
}

impl From<TransformResult> for SpacelessJsResult {
    fn from(value: TransformResult) -> Self {
        SpacelessJsResult {
            code: value.code,
            replaced: value.replaced as u32,
        }
    }
}
