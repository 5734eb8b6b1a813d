//! URL and filesystem path builders.

use std::fs;
use std::path::Path;

use super::config::AssetConfig;
use crate::error::{ErrorCode, HelperResult};

const INTERNAL_VIEWS_DIR: &str = "system/application/views";
const VIEWS_DIR: &str = "application/views/";

/// Drop one trailing `/` (left behind when the file name is empty).
fn trim_trailing_slash(mut path: String) -> String {
    if path.ends_with('/') {
        path.pop();
    }
    path
}

/// Parent directory of a `/`-separated path.
///
/// Trailing slashes are ignored, a path without a slash yields `"."` and a
/// path directly below the root yields `"/"`.
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { ".".to_string() } else { "/".to_string() };
    }
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}

/// Remove a leading drive letter such as `C:`.
fn strip_drive_letter(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_uppercase() && bytes[1] == b':' {
        &path[2..]
    } else {
        path
    }
}

impl AssetConfig {
    /// Site title with a suffix appended.
    pub fn title(&self, suffix: &str) -> String {
        format!("{}{}", self.base_title, suffix)
    }

    /// Public URL of a file inside the directory configured for `kind`,
    /// e.g. `http://www.example.org/project/assets/css/site.css`.
    pub fn ext_path(&self, kind: &str, fname: &str) -> String {
        trim_trailing_slash(format!(
            "{}{}/{}",
            self.base_url,
            self.resolve(kind),
            fname
        ))
    }

    /// Public URL of a file inside the internal views directory.
    pub fn internal_views_path(&self, fname: &str) -> String {
        trim_trailing_slash(format!(
            "{}{}/{}",
            self.base_url, INTERNAL_VIEWS_DIR, fname
        ))
    }

    /// Server-side path of a file inside the directory configured for `kind`,
    /// e.g. `/var/www/project/assets/css/site.css`.
    pub fn int_path(&self, kind: &str, fname: &str) -> String {
        let script = format!("{}{}", self.document_root, self.script_name);
        let base_dir = dirname(&script).replace("//", "/");
        let base_dir = strip_drive_letter(&base_dir);
        trim_trailing_slash(format!("{}/{}/{}", base_dir, self.resolve(kind), fname))
    }

    /// `<base href=...>` tag pointing at the views directory.
    pub fn base_tag(&self) -> String {
        format!("<base href=\"{}\" />", self.views_url())
    }

    /// URL of the views directory.
    pub fn views_url(&self) -> String {
        format!("{}{}", self.base_url, VIEWS_DIR)
    }
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Remove whitespace runs that sit between a `>` and the next `<`.
pub fn collapse_between_tags(xml: &str) -> String {
    let mut output = String::with_capacity(xml.len());
    let mut rest = xml;
    while let Some(idx) = rest.find('>') {
        output.push_str(&rest[..=idx]);
        rest = &rest[idx + 1..];
        let trimmed = rest.trim_start_matches(is_xml_space);
        if trimmed.len() < rest.len() && trimmed.starts_with('<') {
            rest = trimmed;
        }
    }
    output.push_str(rest);
    output
}

/// Read an XML file as one line. The `.xml` extension is optional in `fname`.
pub fn xml_contents<P: AsRef<Path>>(fname: P) -> HelperResult<String> {
    let fname = fname.as_ref().to_string_lossy();
    let stem = fname.strip_suffix(".xml").unwrap_or(&fname[..]);
    let path = format!("{}.xml", stem);
    let xml = fs::read_to_string(&path).map_err(|e| ErrorCode::E500_Io(format!("{}: {}", path, e)))?;
    tracing::debug!(path = %path, bytes = xml.len(), "read xml");
    Ok(collapse_between_tags(&xml))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AssetConfig {
        let mut config = AssetConfig {
            base_url: "http://www.example.org/project/".to_string(),
            base_title: "Example".to_string(),
            document_root: "/var/www".to_string(),
            script_name: "/project/index.php".to_string(),
            ..AssetConfig::default()
        };
        config.paths.insert("css".to_string(), "assets/css".to_string());
        config
    }

    #[test]
    fn test_title() {
        assert_eq!(config().title(" - Home"), "Example - Home");
        assert_eq!(config().title(""), "Example");
    }

    #[test]
    fn test_ext_path() {
        let config = config();
        assert_eq!(
            config.ext_path("css", "site.css"),
            "http://www.example.org/project/assets/css/site.css"
        );
        assert_eq!(
            config.ext_path("css", ""),
            "http://www.example.org/project/assets/css"
        );
        assert_eq!(
            config.ext_path("images", "logo.png"),
            "http://www.example.org/project/images/logo.png"
        );
    }

    #[test]
    fn test_internal_views_path() {
        assert_eq!(
            config().internal_views_path("flash/intro.swf"),
            "http://www.example.org/project/system/application/views/flash/intro.swf"
        );
        assert_eq!(
            config().internal_views_path(""),
            "http://www.example.org/project/system/application/views"
        );
    }

    #[test]
    fn test_int_path() {
        let config = config();
        assert_eq!(
            config.int_path("css", "site.css"),
            "/var/www/project/assets/css/site.css"
        );
        assert_eq!(config.int_path("uploads", ""), "/var/www/project/uploads");
    }

    #[test]
    fn test_int_path_collapses_double_slash_and_drive() {
        let config = AssetConfig {
            document_root: "C:/www/".to_string(),
            script_name: "/app/index.php".to_string(),
            ..AssetConfig::default()
        };
        assert_eq!(config.int_path("files", "a.txt"), "/www/app/files/a.txt");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/var/www/index.php"), "/var/www");
        assert_eq!(dirname("/index.php"), "/");
        assert_eq!(dirname("index.php"), ".");
        assert_eq!(dirname("/var/www/"), "/var");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname(""), ".");
    }

    #[test]
    fn test_base_tag_and_views_url() {
        let config = config();
        assert_eq!(
            config.base_tag(),
            "<base href=\"http://www.example.org/project/application/views/\" />"
        );
        assert_eq!(
            config.views_url(),
            "http://www.example.org/project/application/views/"
        );
    }

    #[test]
    fn test_collapse_between_tags() {
        assert_eq!(
            collapse_between_tags("<a>\n  <b> text </b>\n</a>\n"),
            "<a><b> text </b></a>\n"
        );
        assert_eq!(collapse_between_tags("no tags"), "no tags");
        assert_eq!(collapse_between_tags("<a> x</a>"), "<a> x</a>");
    }
}
