use std::path::Path;

/// Case-insensitive allow-list of file extensions.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(["jpg", "mp4"])
    }
}

impl ExtensionFilter {
    /// Build a filter from user-supplied extensions. Replaces the default set
    /// entirely; leading dots and upper case are tolerated.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Self { extensions }
    }

    /// Whether the extension (text after the last dot) is allowed.
    /// Files without an extension never match.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}
