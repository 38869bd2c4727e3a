//! Structural lookups over parsed markup.
//!
//! Listing cards and their fields are located with [`Signature`]s, CSS
//! selectors compiled by `scraper`. Field extraction is written against the
//! [`MarkupNode`] trait so it can be exercised on a hand-built tree as well as
//! on `scraper`'s DOM.

use crate::error::{Result, ScoutError};
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Compiled CSS selector, keeping the source text for logs and errors.
#[derive(Debug, Clone)]
pub struct Signature {
    css: String,
    selector: Selector,
}

impl Signature {
    pub fn parse(css: &str) -> Result<Self> {
        let css = css.trim();
        let selector = Selector::parse(css)
            .map_err(|err| ScoutError::invalid_signature(css, err.to_string()))?;
        Ok(Self {
            css: css.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.css == other.css
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Element view the field extraction needs.
pub trait MarkupNode: Copy {
    /// Descendants selected by `signature`, in document order, excluding `self`
    fn find_all(&self, signature: &Signature) -> Vec<Self>;
    fn attr(&self, name: &str) -> Option<&str>;
    /// Concatenated text of the element and its descendants
    fn node_text(&self) -> String;
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn find_all(&self, signature: &Signature) -> Vec<Self> {
        self.select(signature.selector()).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn node_text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

/// Every element of `document` selected by `signature`, in document order.
pub fn select_document<'a>(document: &'a Html, signature: &Signature) -> Vec<ElementRef<'a>> {
    document.select(signature.selector()).collect()
}

pub fn find_first<N: MarkupNode>(scope: &N, signature: &Signature) -> Option<N> {
    scope.find_all(signature).into_iter().next()
}

/// Trimmed text of every match joined together, empty when nothing matches.
pub fn joined_text<N: MarkupNode>(scope: &N, signature: &Signature) -> String {
    let text: String = scope
        .find_all(signature)
        .iter()
        .map(MarkupNode::node_text)
        .collect();
    text.trim().to_string()
}

/// Attribute `name` of the first match.
pub fn first_attr<N: MarkupNode>(scope: &N, signature: &Signature, name: &str) -> Option<String> {
    find_first(scope, signature).and_then(|node| node.attr(name).map(str::to_string))
}


#[cfg(test)]
mod tests {
    use super::testing::TestDom;
    use super::*;

    fn sig(css: &str) -> Signature {
        Signature::parse(css).unwrap()
    }

    #[test]
    fn test_parse_keeps_trimmed_source() {
        let signature = sig("  .D_QS.D_QT img ");
        assert_eq!(signature.as_str(), ".D_QS.D_QT img");
        assert_eq!(signature.to_string(), ".D_QS.D_QT img");
    }

    #[test]
    fn test_parse_accepts_full_css() {
        for css in [
            "main > div.card",
            "li:nth-child(2)",
            "p[class~=\"price\"]",
            "h3 + p",
            "div:not(.ad) img",
        ] {
            assert!(Signature::parse(css).is_ok(), "{css:?} should parse");
        }
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for css in ["p[", "div >", "."] {
            match Signature::parse(css) {
                Err(ScoutError::InvalidSignature { selector, reason }) => {
                    assert_eq!(selector, css);
                    assert!(!reason.is_empty());
                }
                other => panic!("expected InvalidSignature for {css:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_child_combinator_only_matches_direct_children() {
        let html = Html::parse_document(
            r#"<main>
                 <div class="card">a</div>
                 <section><div class="card">nested</div></section>
                 <div class="card">b</div>
               </main>"#,
        );
        let cards = select_document(&html, &sig("main > div.card"));
        let texts: Vec<String> = cards.iter().map(MarkupNode::node_text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_find_all_is_scoped_to_descendants() {
        let html = Html::parse_document(
            r#"<div class="card"><div class="card"><span>x</span></div></div>"#,
        );
        let outer = select_document(&html, &sig(".card"))[0];
        assert_eq!(outer.find_all(&sig(".card")).len(), 1);
        assert_eq!(select_document(&html, &sig(".card")).len(), 2);
    }

    #[test]
    fn test_descendant_image_lookup() {
        let html = Html::parse_document(
            r#"<div class="D_QS D_QT"><span><img src="x.png"></span></div><img src="y.png">"#,
        );
        let root = html.root_element();
        let image = sig(".D_QS.D_QT img");
        assert_eq!(root.find_all(&image).len(), 1);
        assert_eq!(first_attr(&root, &image, "src").as_deref(), Some("x.png"));
    }

    #[test]
    fn test_word_and_position_selectors() {
        let html = Html::parse_document(
            r#"<ul><li class="tag sale">one</li><li class="tag">two</li></ul>"#,
        );
        let root = html.root_element();
        assert_eq!(joined_text(&root, &sig("li[class~=\"sale\"]")), "one");
        assert_eq!(joined_text(&root, &sig("li:nth-child(2)")), "two");
    }

    #[test]
    fn test_joined_text_concatenates_matches() {
        let mut dom = TestDom::default();
        let root = dom.add(None, &[], &[], "");
        dom.add(Some(root), &[".D_pX"], &[], "  $10");
        dom.add(Some(root), &[".D_pX"], &[], "0  ");

        assert_eq!(joined_text(&dom.node(root), &sig(".D_pX")), "$100");
        assert_eq!(joined_text(&dom.node(root), &sig(".D_nn")), "");
        assert_eq!(first_attr(&dom.node(root), &sig(".D_nn"), "src"), None);
    }

    #[test]
    fn test_find_first_is_document_order() {
        let mut dom = TestDom::default();
        let root = dom.add(None, &[], &[], "");
        let a = dom.add(Some(root), &["img"], &[("src", "a.png")], "");
        let a1 = dom.add(Some(a), &["img"], &[("src", "a1.png")], "");
        dom.add(Some(root), &["img"], &[("src", "b.png")], "");

        let image = sig("img");
        let found: Vec<usize> = dom.node(root).find_all(&image).iter().map(|n| n.index()).collect();
        assert_eq!(found[..2], [a, a1]);
        assert_eq!(first_attr(&dom.node(root), &image, "src").as_deref(), Some("a.png"));
    }
}
