use std::fmt;

use html_escape::encode_text_to_string;

/// A self-contained piece of escaped HTML.
///
/// Fragments can only be produced by the formatter, so every piece of
/// untrusted text inside one has already been escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    pub(crate) fn from_markup(markup: String) -> Self {
        Fragment(markup)
    }

    /// `<p>text</p>` with optional class
    pub(crate) fn paragraph(class: Option<&str>, text: &str) -> Self {
        let mut out = String::new();
        match class {
            Some(class) => {
                out.push_str("<p class=\"");
                out.push_str(class);
                out.push_str("\">");
            }
            None => out.push_str("<p>"),
        }
        encode_text_to_string(text, &mut out);
        out.push_str("</p>");
        Fragment(out)
    }

    /// One `<li>` per item inside the given list element
    pub(crate) fn list<'a, I>(tag: ListTag, class: &str, items: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tag = tag.as_str();
        let mut out = format!("<{} class=\"{}\">", tag, class);
        for item in items {
            out.push_str("<li>");
            encode_text_to_string(item, &mut out);
            out.push_str("</li>");
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Fragment(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ListTag {
    Unordered,
    Ordered,
}

impl ListTag {
    fn as_str(&self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
        }
    }
}
