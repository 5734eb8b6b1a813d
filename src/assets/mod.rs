//! Presentation helpers for legacy views.
//!
//! Tag builders, asset URL and path resolution, date conversions and a few
//! filesystem utilities. Anything that needs site settings takes an explicit
//! [`AssetConfig`].
//!
//! # Example
//!
//! ```
//! use asset_helper::assets::{disp_css, AssetConfig};
//!
//! let config = AssetConfig::from_json_str(
//!     r#"{"base_url": "http://example.org/", "paths": {"css": "assets/css"}}"#,
//! ).unwrap();
//!
//! let href = config.ext_path("css", "site");
//! assert_eq!(
//!     disp_css(&href),
//!     r#"<link rel="stylesheet" type="text/css" href="http://example.org/assets/css/site.css" />"#
//! );
//! ```

pub mod config;
pub mod date;
pub mod files;
pub mod html;
pub mod paths;

pub use config::AssetConfig;
pub use date::{calculate_date, current_year, date_validate, from_timestamp, to_timestamp};
pub use files::{chmod_recursive, get_extension, get_filename};
pub use html::{disp_css, disp_doctype, disp_img, disp_js, disp_swf, safe_output};
pub use paths::{collapse_between_tags, dirname, xml_contents};
