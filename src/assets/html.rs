//! HTML fragment builders.

use crate::json::strip_slashes;

/// `<img>` tag for an image file.
pub fn disp_img(fname: &str) -> String {
    format!("<img src=\"{}\" border=\"0\" />", fname)
}

/// `<script>` tag for a JavaScript file. The `.js` extension is optional.
pub fn disp_js(fname: &str) -> String {
    let stem = fname.strip_suffix(".js").unwrap_or(fname);
    format!(
        "<script language=\"javascript\" type=\"text/javascript\"  src=\"{}.js\"></script>",
        stem
    )
}

/// Stylesheet `<link>` tag. The `.css` extension is optional.
pub fn disp_css(fname: &str) -> String {
    let stem = fname.strip_suffix(".css").unwrap_or(fname);
    format!(
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}.css\" />",
        stem
    )
}

/// Default background color for embedded flash movies.
pub const SWF_DEFAULT_BGCOLOR: &str = "#FFFFFF";

/// Script block that embeds a flash movie through `AC_FL_RunContent`.
///
/// Needs `AC_RunActiveContent.js` on the page. The `.swf` extension is
/// optional; `bgcolor` defaults to [`SWF_DEFAULT_BGCOLOR`].
pub fn disp_swf(fname: &str, width: i64, height: i64, bgcolor: Option<&str>) -> String {
    let name = fname.strip_suffix(".swf").unwrap_or(fname);
    let bgcolor = bgcolor.unwrap_or(SWF_DEFAULT_BGCOLOR);
    format!(
        "<script type=\"text/javascript\">\
         AC_FL_RunContent( 'codebase','http://fpdownload.macromedia.com/pub/shockwave/cabs/flash/swflash.cab#version=8,0,0,0',\
         'width','{width}','height','{height}','id','{name}','align','middle','src','{name}',\
         'quality','high','bgcolor','{bgcolor}','name','{name}','allowscriptaccess','sameDomain',\
         'pluginspage','http://www.macromedia.com/go/getflashplayer','movie','{name}' ); //end AC code\
         </script>"
    )
}

const HTML_STRICT: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">";
const HTML_TRANS: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">";
const HTML_FRAME: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">";
const XHTML_STRICT: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">";
const XHTML_TRANS: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">";
const XHTML_FRAME: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">";

/// Doctype declaration for `kind` (`html` / `xhtml`) and `variant`
/// (`strict`, `trans`, `frame`). Unknown combinations give XHTML
/// transitional.
pub fn disp_doctype(kind: &str, variant: &str) -> &'static str {
    match (kind, variant) {
        ("html", "strict") => HTML_STRICT,
        ("html", "trans") => HTML_TRANS,
        ("html", "frame") => HTML_FRAME,
        ("xhtml", "strict") => XHTML_STRICT,
        ("xhtml", "frame") => XHTML_FRAME,
        _ => XHTML_TRANS,
    }
}

/// Escape text for HTML output and drop escaping backslashes.
///
/// Single quotes are left as they are, like the legacy `htmlentities`
/// default.
pub fn safe_output(output: &str) -> String {
    let mut escaped = String::with_capacity(output.len());
    for ch in output.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    strip_slashes(&escaped)
}
