use html_escape::encode_text_to_string;

use super::Fragment;

const STYLESHEET: &str = "\
body { font-family: sans-serif; background: #1e1f3b; color: #f0f0f0; max-width: 720px; margin: 2em auto; }
.result-item { background: #2b2d5c; border-radius: 8px; padding: 20px; }
.result-item h4 { margin: 12px 0 6px; }
.ingredients-list, .recipe-list { margin: 0 0 12px; padding-left: 24px; }
.error-message { color: #ff6b6b; font-weight: bold; }
";

/// Wrap a fragment in a standalone HTML page
pub fn render_document(fragment: &Fragment, title: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    encode_text_to_string(title, &mut out);
    out.push_str("</title>\n<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n<div id=\"resultOutput\">\n");
    out.push_str(fragment.as_str());
    out.push_str("\n</div>\n</body>\n</html>\n");
    out
}
