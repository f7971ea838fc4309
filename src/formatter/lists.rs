use super::fragment::{Fragment, ListTag};
use crate::model::{DATA_UNAVAILABLE, RECIPE_UNAVAILABLE};

/// Render a comma-separated ingredient string as `<ul class="ingredients-list">`.
///
/// Absent, blank, or sentinel input renders the sentinel as a paragraph.
pub fn format_ingredients(text: Option<&str>) -> Fragment {
    let items = match available(text, DATA_UNAVAILABLE) {
        Some(text) => split_ingredients(text),
        None => Vec::new(),
    };

    if items.is_empty() {
        return Fragment::paragraph(None, DATA_UNAVAILABLE);
    }

    Fragment::list(ListTag::Unordered, "ingredients-list", items)
}

/// Render newline-separated recipe text as `<ol class="recipe-list">`.
///
/// Author numbering ("1. ", "2.") is removed since the ordered list numbers
/// the steps itself.
pub fn format_recipe_steps(text: Option<&str>) -> Fragment {
    let steps = match available(text, RECIPE_UNAVAILABLE) {
        Some(text) => split_steps(text),
        None => Vec::new(),
    };

    if steps.is_empty() {
        return Fragment::paragraph(None, RECIPE_UNAVAILABLE);
    }

    Fragment::list(ListTag::Ordered, "recipe-list", steps)
}

fn available<'a>(text: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    text.filter(|t| {
        let t = t.trim();
        !t.is_empty() && t != sentinel
    })
}

pub(crate) fn split_ingredients(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

pub(crate) fn split_steps(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_ordinal(line).trim())
        // a line holding nothing but "3." has no step left to show
        .filter(|step| !step.is_empty())
        .collect()
}

/// Remove a leading `\s*\d+\.\s*` marker, leaving the rest of the line as is
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }

    match rest[digits..].strip_prefix('.') {
        Some(after) => after.trim_start(),
        None => line,
    }
}
