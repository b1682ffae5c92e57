//! Inkscape pages and the `<view>` elements derived from them.

use quick_xml::escape::escape;
use roxmltree::{Document, Node};

use super::ExportError;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";
pub const SODIPODI_NS: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

/// Prefix bindings used to address Inkscape metadata.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("svg", SVG_NS),
    ("inkscape", INKSCAPE_NS),
    ("sodipodi", SODIPODI_NS),
];

/// Location of page definitions below the root: `./sodipodi:namedview/inkscape:page`.
const PAGE_PATH: [(&str, &str); 2] = [("sodipodi", "namedview"), ("inkscape", "page")];

/// Resolve a `prefix:local` pair against [`NAMESPACES`].
fn expanded(prefix: &str, local: &'static str) -> (&'static str, &'static str) {
    let uri = NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map_or("", |(_, uri)| *uri);
    (uri, local)
}

/// A labeled page of an Inkscape document.
///
/// Geometry is kept as the attribute text so views reproduce it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub label: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
}

impl Page {
    /// Read a page from an `inkscape:page` element. `index` starts at 1.
    fn from_node(index: usize, node: Node<'_, '_>) -> Result<Self, ExportError> {
        let missing = |attribute| ExportError::MissingAttribute { index, attribute };
        let geometry = |name: &'static str| {
            node.attribute(name)
                .map(str::to_owned)
                .ok_or_else(|| missing(name))
        };

        let label = node
            .attribute(expanded("inkscape", "label"))
            .ok_or_else(|| missing("inkscape:label"))?;

        Ok(Self {
            label: label.to_owned(),
            x: geometry("x")?,
            y: geometry("y")?,
            width: geometry("width")?,
            height: geometry("height")?,
        })
    }
}

/// A `<view>` element making one page addressable as `file.svg#<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: String,
    pub view_box: String,
}

impl View {
    /// Serialize as an empty element with escaped attribute values.
    pub fn to_xml(&self) -> String {
        format!(
            r#"<view id="{}" viewBox="{}"/>"#,
            escape(self.id.as_str()),
            escape(self.view_box.as_str())
        )
    }
}

/// `enter_fullscreen` -> `enter-fullscreen`
pub fn slug(label: &str) -> String {
    label.replace('_', "-")
}

pub fn view_from_page(page: &Page) -> View {
    View {
        id: format!("page-{}", slug(&page.label)),
        view_box: format!("{} {} {} {}", page.x, page.y, page.width, page.height),
    }
}

/// Collect the document's pages in document order.
///
/// Every page must carry a label and full geometry.
pub fn find_pages(doc: &Document<'_>) -> Result<Vec<Page>, ExportError> {
    let [(nv_prefix, nv_local), (page_prefix, page_local)] = PAGE_PATH;
    let namedview = expanded(nv_prefix, nv_local);
    let page = expanded(page_prefix, page_local);

    doc.root_element()
        .children()
        .filter(|n| n.has_tag_name(namedview))
        .flat_map(|nv| nv.children().filter(move |n| n.has_tag_name(page)))
        .enumerate()
        .map(|(i, node)| Page::from_node(i + 1, node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(label: &str, x: &str, y: &str, w: &str, h: &str) -> Page {
        Page {
            label: label.into(),
            x: x.into(),
            y: y.into(),
            width: w.into(),
            height: h.into(),
        }
    }

    const TWO_PAGES: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"
     xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
     xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
  <sodipodi:namedview id="namedview1">
    <inkscape:page x="0" y="0" width="100" height="50" id="page1" inkscape:label="home"/>
    <inkscape:page x="100" y="0" width="100" height="50" id="page2" inkscape:label="about_us"/>
  </sodipodi:namedview>
  <rect width="10" height="10"/>
</svg>"#;

    #[test]
    fn test_slug() {
        assert_eq!(slug("enter_fullscreen"), "enter-fullscreen");
        assert_eq!(slug("home"), "home");
        assert_eq!(slug("a__b_"), "a--b-");
    }

    #[test]
    fn test_view_from_page() {
        let view = view_from_page(&page("enter_fullscreen", "10", "-5.5", "24", "24"));
        assert_eq!(view.id, "page-enter-fullscreen");
        assert_eq!(view.view_box, "10 -5.5 24 24");
    }

    #[test]
    fn test_view_to_xml() {
        let view = view_from_page(&page("home", "0", "0", "100", "50"));
        assert_eq!(view.to_xml(), r#"<view id="page-home" viewBox="0 0 100 50"/>"#);
    }

    #[test]
    fn test_view_to_xml_escapes() {
        let view = View {
            id: "page-a&b".into(),
            view_box: "0 0 1 1".into(),
        };
        assert_eq!(view.to_xml(), r#"<view id="page-a&amp;b" viewBox="0 0 1 1"/>"#);
    }

    #[test]
    fn test_find_pages_in_order() {
        let doc = Document::parse(TWO_PAGES).unwrap();
        let pages = find_pages(&doc).unwrap();
        assert_eq!(
            pages,
            vec![
                page("home", "0", "0", "100", "50"),
                page("about_us", "100", "0", "100", "50"),
            ]
        );
    }

    #[test]
    fn test_find_pages_none() {
        let doc = Document::parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#)
            .unwrap();
        assert!(find_pages(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_find_pages_ignores_nested_namedview() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"
                xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
                xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
              <g><sodipodi:namedview>
                <inkscape:page x="0" y="0" width="1" height="1" inkscape:label="deep"/>
              </sodipodi:namedview></g>
            </svg>"#,
        )
        .unwrap();
        assert!(find_pages(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_find_pages_requires_namespace() {
        // Same local names, wrong namespace
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="urn:other">
              <namedview><inkscape:page x="0" y="0" width="1" height="1" inkscape:label="p"/></namedview>
            </svg>"#,
        )
        .unwrap();
        assert!(find_pages(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_find_pages_missing_label() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"
                xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
                xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
              <sodipodi:namedview>
                <inkscape:page x="0" y="0" width="1" height="1" inkscape:label="ok"/>
                <inkscape:page x="1" y="0" width="1" height="1"/>
              </sodipodi:namedview>
            </svg>"#,
        )
        .unwrap();

        let err = find_pages(&doc).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingAttribute {
                index: 2,
                attribute: "inkscape:label"
            }
        ));
    }

    #[test]
    fn test_find_pages_missing_geometry() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"
                xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
                xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
              <sodipodi:namedview>
                <inkscape:page x="0" y="0" height="1" inkscape:label="narrow"/>
              </sodipodi:namedview>
            </svg>"#,
        )
        .unwrap();

        let err = find_pages(&doc).unwrap_err();
        assert_eq!(err.to_string(), "page #1 has no `width` attribute");
    }
}
