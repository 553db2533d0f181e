use serde::Deserialize;

/// Search box on the home page. Submitted as a form body (POST) or query
/// string (GET); both may omit the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: Option<String>,
}

impl SearchForm {
    /// The submitted text, or an empty string when the field was omitted.
    ///
    /// The value is kept verbatim so a search for `" "` still filters names
    /// containing a space.
    pub fn into_term(self) -> String {
        self.search.unwrap_or_default()
    }
}
