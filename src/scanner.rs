//! Candidate scanning over a parsed scope page.
//!
//! Enumerates strings worth testing for domain-likeness without scanning the
//! whole DOM text indiscriminately: site-specific scope-table selectors
//! first, then link hrefs and carrier attributes, then a bounded text-node
//! walk. Each pass skips non-content tags, hidden subtrees and the companion
//! extension's own injected UI.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::config::ScanConfig;
use crate::origin::{Site, ATTRIBUTE_SELECTORS};

/// Tags whose text is never page content.
const EXCLUDED_TAGS: &[&str] = &["script", "style", "noscript", "textarea"];

/// Id/class marker of the extension's own injected UI (floating control,
/// status banner, tooltip); matching subtrees would self-reference.
const OWN_UI_MARKER: &str = "domain-extractor";

/// Cheap pre-filter: the fragment at least contains a dot-separated label
/// shape, so the expensive extraction regex is worth running.
static PREFILTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z0-9][a-z0-9-]*\.[a-z]{2}").expect("prefilter regex"));

/// Where a candidate fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Scope-table cell matched by a site selector
    ScopeTable,
    /// `href` of an anchor
    Link,
    /// Carrier attribute value (`data-asset-identifier`, `aria-label`, `title`)
    Attribute,
    /// Bounded full-text walk
    Text,
}

/// A raw string pulled from page content, with no guaranteed structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub text: String,
}

/// Capability seam over "things that yield candidate fragments", so the
/// extractor is testable against synthetic fixtures without any HTML.
pub trait CandidateSource {
    fn candidates(&self) -> Vec<Candidate>;
}

impl CandidateSource for Vec<Candidate> {
    fn candidates(&self) -> Vec<Candidate> {
        self.clone()
    }
}

/// Scanner over a parsed HTML document. Not restartable across document
/// changes; re-parse and re-scan per request.
pub struct HtmlScanner<'a> {
    document: &'a Html,
    site: Site,
    config: &'a ScanConfig,
}

impl<'a> HtmlScanner<'a> {
    pub fn new(document: &'a Html, site: Site, config: &'a ScanConfig) -> Self {
        Self {
            document,
            site,
            config,
        }
    }

    fn scan_scope_tables(&self, out: &mut Vec<Candidate>) {
        for selector in self.site.scope_selectors() {
            let Ok(sel) = Selector::parse(selector) else {
                continue;
            };
            for element in self.document.select(&sel) {
                if element_excluded(element) {
                    continue;
                }
                push_candidate(out, CandidateKind::ScopeTable, element_text(element));
            }
        }
    }

    fn scan_links(&self, out: &mut Vec<Candidate>) {
        let Ok(sel) = Selector::parse("a[href]") else {
            return;
        };
        for element in self.document.select(&sel) {
            if element_excluded(element) {
                continue;
            }
            if let Some(href) = element.value().attr("href") {
                push_candidate(out, CandidateKind::Link, href.to_string());
            }
        }
    }

    fn scan_attributes(&self, out: &mut Vec<Candidate>) {
        for (selector, attr) in ATTRIBUTE_SELECTORS {
            let Ok(sel) = Selector::parse(selector) else {
                continue;
            };
            for element in self.document.select(&sel) {
                if element_excluded(element) {
                    continue;
                }
                if let Some(value) = element.value().attr(attr) {
                    push_candidate(out, CandidateKind::Attribute, value.to_string());
                }
            }
        }
    }

    /// Full-text walk, capped at `max_text_nodes` visited text nodes to bound
    /// worst-case cost on large pages.
    fn scan_text_nodes(&self, out: &mut Vec<Candidate>) {
        let mut visited = 0usize;
        for node in self.document.tree.root().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            visited += 1;
            if visited > self.config.max_text_nodes {
                break;
            }
            if has_excluded_ancestor(node) {
                continue;
            }
            push_candidate(out, CandidateKind::Text, text.to_string());
        }
    }
}

impl CandidateSource for HtmlScanner<'_> {
    fn candidates(&self) -> Vec<Candidate> {
        let mut out = Vec::new();
        self.scan_scope_tables(&mut out);
        if self.config.scan_links {
            self.scan_links(&mut out);
        }
        if self.config.scan_attributes {
            self.scan_attributes(&mut out);
        }
        self.scan_text_nodes(&mut out);
        out
    }
}

fn push_candidate(out: &mut Vec<Candidate>, kind: CandidateKind, text: String) {
    let trimmed = text.trim();
    if trimmed.is_empty() || !PREFILTER_RE.is_match(trimmed) {
        return;
    }
    out.push(Candidate {
        kind,
        text: trimmed.to_string(),
    });
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn element_excluded(element: ElementRef<'_>) -> bool {
    has_excluded_ancestor(*element)
}

/// Walk self-and-ancestors looking for non-content tags, the extension's own
/// UI, or statically-detectable hidden subtrees. A static snapshot has no
/// layout boxes, so "not rendered" approximates to `hidden` attributes and
/// inline `display:none` / `visibility:hidden`.
fn has_excluded_ancestor(node: NodeRef<'_, Node>) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if let Some(elem) = n.value().as_element() {
            if EXCLUDED_TAGS.contains(&elem.name()) {
                return true;
            }
            if elem.attr("hidden").is_some() {
                return true;
            }
            if let Some(id) = elem.attr("id") {
                if id.contains(OWN_UI_MARKER) {
                    return true;
                }
            }
            if let Some(class) = elem.attr("class") {
                if class.contains(OWN_UI_MARKER) {
                    return true;
                }
            }
            if let Some(style) = elem.attr("style") {
                let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
                if compact.contains("display:none") || compact.contains("visibility:hidden") {
                    return true;
                }
            }
        }
        current = n.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;

    fn scan(html: &str, site: Site, config: &ScanConfig) -> Vec<Candidate> {
        let document = Html::parse_document(html);
        HtmlScanner::new(&document, site, config).candidates()
    }

    fn texts(candidates: &[Candidate], kind: CandidateKind) -> Vec<String> {
        candidates
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.text.clone())
            .collect()
    }

    #[test]
    fn scope_table_cells_are_found() {
        let html = r#"
            <html><body>
              <table class="target-table"><tbody>
                <tr><td>*.example.com</td><td>Web</td></tr>
                <tr><td>api.example.com</td><td>API</td></tr>
              </tbody></table>
            </body></html>"#;
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        let cells = texts(&candidates, CandidateKind::ScopeTable);
        assert!(cells.contains(&"*.example.com".to_string()));
        assert!(cells.contains(&"api.example.com".to_string()));
    }

    #[test]
    fn hackerone_selectors_differ() {
        let html = r#"
            <div class="scope-list"><table><tbody>
              <tr><td>portal.example.org</td></tr>
            </tbody></table></div>"#;
        let candidates = scan(html, Site::HackerOne, &ScanConfig::default());
        let cells = texts(&candidates, CandidateKind::ScopeTable);
        assert!(cells.contains(&"portal.example.org".to_string()));
        // the same page scanned as Bugcrowd yields the cell only via text walk
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        assert!(texts(&candidates, CandidateKind::ScopeTable).is_empty());
        assert!(texts(&candidates, CandidateKind::Text)
            .contains(&"portal.example.org".to_string()));
    }

    #[test]
    fn links_and_attributes_are_carriers() {
        let html = r#"
            <body>
              <a href="https://app.example.com/login">login</a>
              <span data-asset-identifier="*.example.net">asset</span>
              <div aria-label="shop.example.io endpoint">x</div>
            </body>"#;
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        assert!(texts(&candidates, CandidateKind::Link)
            .contains(&"https://app.example.com/login".to_string()));
        let attrs = texts(&candidates, CandidateKind::Attribute);
        assert!(attrs.contains(&"*.example.net".to_string()));
        assert!(attrs.iter().any(|a| a.contains("shop.example.io")));
    }

    #[test]
    fn prefilter_drops_undomainish_text() {
        let html = "<body><p>nothing to see</p><p>but api.example.com here</p></body>";
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        let walked = texts(&candidates, CandidateKind::Text);
        assert_eq!(walked.len(), 1);
        assert!(walked[0].contains("api.example.com"));
    }

    #[test]
    fn non_content_tags_are_skipped() {
        let html = r#"
            <body>
              <script>var x = "cdn.example.com";</script>
              <style>.a{content:"sheet.example.com"}</style>
              <p>real.example.com</p>
            </body>"#;
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        let walked = texts(&candidates, CandidateKind::Text);
        assert_eq!(walked, vec!["real.example.com".to_string()]);
    }

    #[test]
    fn own_ui_and_hidden_subtrees_are_skipped() {
        let html = r#"
            <body>
              <div id="domain-extractor-fab" title="self.example.com">x</div>
              <div class="domain-extractor-status"><p>status.example.com</p></div>
              <div style="display: none"><p>ghost.example.com</p></div>
              <p hidden>gone.example.com</p>
              <p>kept.example.com</p>
            </body>"#;
        let candidates = scan(html, Site::Bugcrowd, &ScanConfig::default());
        let all: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
        assert!(all.iter().any(|t| t.contains("kept.example.com")));
        for gone in ["self.example.com", "status.example.com", "ghost.example.com", "gone.example.com"] {
            assert!(!all.iter().any(|t| t.contains(gone)), "{gone} leaked");
        }
    }

    #[test]
    fn text_walk_is_bounded() {
        let mut html = String::from("<body>");
        for i in 0..50 {
            html.push_str(&format!("<p>host{i}.example.com</p>"));
        }
        html.push_str("</body>");
        let config = ScanConfig {
            max_text_nodes: 10,
            ..ScanConfig::default()
        };
        let candidates = scan(&html, Site::Bugcrowd, &config);
        assert!(texts(&candidates, CandidateKind::Text).len() <= 10);
    }

    #[test]
    fn empty_page_yields_no_candidates() {
        let candidates = scan("<body></body>", Site::Bugcrowd, &ScanConfig::default());
        assert!(candidates.is_empty());
    }
}
