//! Asset helper conformance tests.
//!
//! Exercises the helpers together, the way a view would: a config file
//! on disk, paths resolved from it, tags built from those paths.

use std::fs;

use asset_helper::assets::{
    calculate_date, chmod_recursive, date_validate, disp_css, disp_img, disp_js, from_timestamp,
    get_extension, get_filename, safe_output, to_timestamp, xml_contents, AssetConfig,
};

const CONFIG: &str = r#"{
    "base_url": "http://www.example.org/project/",
    "base_title": "Example",
    "document_root": "/var/www",
    "script_name": "/project/index.php",
    "paths": {"css": "assets/css", "js": "assets/js", "img": "0"}
}"#;

fn load_config() -> (tempfile::TempDir, AssetConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, CONFIG).unwrap();
    let config = AssetConfig::load(&path).unwrap();
    (dir, config)
}

// ============================================================================
// Config-driven tags
// ============================================================================

#[test]
fn tags_from_configured_paths() {
    let (_dir, config) = load_config();

    assert_eq!(
        disp_css(&config.ext_path("css", "site")),
        r#"<link rel="stylesheet" type="text/css" href="http://www.example.org/project/assets/css/site.css" />"#
    );
    assert_eq!(
        disp_js(&config.ext_path("js", "app.js")),
        r#"<script language="javascript" type="text/javascript"  src="http://www.example.org/project/assets/js/app.js"></script>"#
    );
    // "0" counts as unset, so the kind itself is the directory.
    assert_eq!(
        disp_img(&config.ext_path("img", "logo.png")),
        r#"<img src="http://www.example.org/project/img/logo.png" border="0" />"#
    );
}

#[test]
fn config_round_trips_through_serde() {
    let (_dir, config) = load_config();
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(AssetConfig::from_json_str(&text).unwrap(), config);
}

#[test]
fn int_path_from_loaded_config() {
    let (_dir, config) = load_config();
    assert_eq!(
        config.int_path("css", "print.css"),
        "/var/www/project/assets/css/print.css"
    );
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn xml_contents_collapses_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("menu.xml"),
        "<menu>\n  <item>Home</item>\n  <item>About us</item>\n</menu>\n",
    )
    .unwrap();

    let expected = "<menu><item>Home</item><item>About us</item></menu>\n";
    assert_eq!(xml_contents(dir.path().join("menu")).unwrap(), expected);
    assert_eq!(xml_contents(dir.path().join("menu.xml")).unwrap(), expected);
}

#[test]
fn xml_contents_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = xml_contents(dir.path().join("absent")).unwrap_err();
    assert_eq!(err.code(), 500);
}

#[test]
fn file_name_parts() {
    assert_eq!(get_filename("report.2024.pdf"), "report");
    assert_eq!(get_extension("report.2024.pdf"), ".pdf");
}

#[cfg(unix)]
#[test]
fn chmod_recurses_without_following_symlinks() {
    use std::os::unix::fs::PermissionsExt;

    let outside = tempfile::tempdir().unwrap();
    let outside_file = outside.path().join("keep.txt");
    fs::write(&outside_file, "k").unwrap();
    fs::set_permissions(&outside_file, fs::Permissions::from_mode(0o600)).unwrap();

    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("a").join("b");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("c.txt"), "c").unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

    chmod_recursive(root.path(), 0o755).unwrap();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&root.path().join("a")), 0o755);
    assert_eq!(mode(&deep), 0o755);
    assert_eq!(mode(&deep.join("c.txt")), 0o755);
    assert_eq!(mode(&outside_file), 0o600);
}

// ============================================================================
// Dates and output
// ============================================================================

#[test]
fn dates_round_trip() {
    let ts = to_timestamp("24-12-2099", 2024);
    assert_eq!(from_timestamp(ts).unwrap(), "24-12-2099");
    assert!(date_validate("24-12-2099", 2024));
    assert!(!date_validate("24-12-2099", 2100));
}

#[test]
fn calculate_date_reorders() {
    assert_eq!(
        calculate_date("9-7-2025 08:00:00").unwrap(),
        "2025-07-09 08:00:00"
    );
}

#[test]
fn safe_output_escapes_and_unslashes() {
    assert_eq!(
        safe_output(r#"<a href="x">O\'Brien & co</a>"#),
        "&lt;a href=&quot;x&quot;&gt;O'Brien &amp; co&lt;/a&gt;"
    );
}
