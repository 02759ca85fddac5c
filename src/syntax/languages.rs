use std::collections::HashSet;
use std::path::Path;

lazy_static::lazy_static! {
    /// A HashSet containing the file extensions the C# grammar handles.
    pub static ref SUPPORTED_EXTENSIONS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("cs");
        s.insert("csx");
        s
    };
}

/// Case-insensitive check against [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(extension.to_lowercase().as_str())
}

/// Lowercased extension of `path`, if it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
