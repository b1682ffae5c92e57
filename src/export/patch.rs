//! Append page views to an exported SVG.
//!
//! The exported document is patched textually: the serialized views are
//! spliced in right before the root end tag, so everything the converter
//! wrote stays byte-for-byte intact.

use roxmltree::{Document, ParsingOptions};
use std::{collections::HashSet, fs, path::Path};

use super::{ExportError, View, find_pages, view_from_page};
use crate::{debug, log};

/// Parse `text` (read from `path`) into a namespace-aware tree.
fn parse<'input>(path: &Path, text: &'input str) -> Result<Document<'input>, ExportError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
        .map_err(|err| ExportError::Parse(path.to_path_buf(), err))
}

fn read(path: &Path) -> Result<String, ExportError> {
    fs::read_to_string(path).map_err(|err| ExportError::Read(path.to_path_buf(), err))
}

/// Derive one view per page of `input` and append them to `output`.
///
/// `output` is overwritten. Views are appended on every call, so patching the
/// same file twice leaves two sets of views.
pub fn patch_svg(input: &Path, output: &Path) -> Result<Vec<View>, ExportError> {
    let source = read(input)?;
    let views: Vec<View> = find_pages(&parse(input, &source)?)?
        .iter()
        .map(view_from_page)
        .collect();
    warn_duplicate_ids(&views);

    let exported = read(output)?;
    let patched = append_views(&parse(output, &exported)?, &exported, &views);
    fs::write(output, patched).map_err(|err| ExportError::Write(output.to_path_buf(), err))?;

    for view in &views {
        debug!("export"; "#{} -> {}", view.id, view.view_box);
    }
    Ok(views)
}

/// Insert `views` as the last children of the root element of `doc`.
///
/// `text` must be the source `doc` was parsed from.
pub fn append_views(doc: &Document<'_>, text: &str, views: &[View]) -> String {
    let range = doc.root_element().range();
    let element = &text[range.clone()];
    let fragment: String = views.iter().map(View::to_xml).collect();

    let mut out = String::with_capacity(text.len() + fragment.len() + 8);

    if element.ends_with("/>") {
        // `<svg .../>`: reopen it as `<svg ...>views</svg>`
        let name_end = element[1..]
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .map_or(element.len() - 2, |i| i + 1);
        let name = &element[1..name_end];

        out.push_str(&text[..range.end - 2]);
        out.push('>');
        out.push_str(&fragment);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out.push_str(&text[range.end..]);
    } else {
        let close = element
            .rfind("</")
            .map(|i| range.start + i)
            .or_else(|| text.rfind("</"))
            .unwrap_or(text.len());
        out.push_str(&text[..close]);
        out.push_str(&fragment);
        out.push_str(&text[close..]);
    }

    out
}

/// Duplicate labels are kept; each repeated id is reported once.
fn warn_duplicate_ids(views: &[View]) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for view in views {
        if !seen.insert(view.id.as_str()) && reported.insert(view.id.as_str()) {
            log!("warning"; "duplicate page id `{}`", view.id);
        }
    }
}
