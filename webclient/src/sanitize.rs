//! Reduce a puzzle page to its prose.
//!
//! A read-only walk over the parsed page collects the nodes to drop and the links to
//! rewrite. The edits are applied afterwards and html5ever serializes the result.

use ego_tree::{NodeId, NodeRef};
use html5ever::{namespace_url, ns, tree_builder::TreeSink, QualName};
use scraper::{ElementRef, Html, Node, StrTendril};

use crate::{aoc::ROOT_URL, error::*, util, Url};

/// Elements dropped together with their whole subtree.
const REMOVED_TAGS: [&str; 6] = ["script", "form", "a", "span", "header", "nav"];

/// Any element having an attribute value containing one of these is layout/ad chrome.
const REMOVED_ATTR_MARKERS: [&str; 2] = ["sidebar", "sponsor"];

/// Once found, this element is the only child its parent keeps.
const ARTICLE_TAG: &str = "article";

/// The parser recreates these when missing, so only their children get dropped.
const SKELETON_TAGS: [&str; 3] = ["html", "head", "body"];

const LINK_ATTRS: [&str; 2] = ["href", "src"];

// the parser eats one leading newline inside these
const NEWLINE_EATING_TAGS: [&str; 3] = ["pre", "textarea", "listing"];

#[derive(Debug, Clone)]
pub struct Sanitizer {
    root: Url,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(ROOT_URL.clone())
    }
}

#[derive(Default)]
struct Edits {
    detached: Vec<NodeId>,
    links: Vec<(NodeId, QualName, Url)>,
    leading_newlines: Vec<NodeId>,
}

impl Edits {
    fn apply(self, doc: &mut Html) {
        for (id, attr, url) in self.links {
            if let Some(mut node) = doc.tree.get_mut(id) {
                if let Node::Element(el) = node.value() {
                    if let Some(value) = el.attrs.get_mut(&attr) {
                        *value = StrTendril::from_slice(url.as_str());
                    }
                }
            }
        }

        for id in self.leading_newlines {
            if let Some(mut node) = doc.tree.get_mut(id) {
                if let Node::Text(text) = node.value() {
                    text.text = StrTendril::from_slice(&format!("\n{}", &*text.text));
                }
            }
        }

        for id in self.detached {
            doc.remove_from_parent(&id);
        }
    }
}

impl Sanitizer {
    /// `root` is the origin relative links get resolved against.
    pub fn new(root: Url) -> Self {
        Self { root }
    }

    pub fn sanitize(&self, markup: &str) -> Result<String> {
        if markup.trim().is_empty() {
            return Err(Error::parse("html document", "empty input"));
        }
        let mut doc = Html::parse_document(markup);

        let mut edits = Edits::default();
        for child in doc.tree.root().children() {
            match child.value() {
                Node::Doctype(_) => (),
                Node::Element(_) => self.visit(child, &mut edits)?,
                // comments, processing instructions
                _ => edits.detached.push(child.id()),
            }
        }

        edits.apply(&mut doc);
        Ok(doc.html())
    }

    fn is_removed(el: &ElementRef) -> bool {
        let el = el.value();
        REMOVED_TAGS.contains(&el.name())
            || el.attrs().any(|(_, value)| {
                REMOVED_ATTR_MARKERS
                    .iter()
                    .any(|marker| value.contains(marker))
            })
    }

    fn is_article(node: &NodeRef<Node>) -> bool {
        ElementRef::wrap(*node)
            .map_or(false, |el| el.value().name() == ARTICLE_TAG && !Self::is_removed(&el))
    }

    fn visit(&self, node: NodeRef<Node>, edits: &mut Edits) -> Result<()> {
        let Some(el) = ElementRef::wrap(node) else {
            return Ok(());
        };
        let name = el.value().name();

        if Self::is_removed(&el) {
            if SKELETON_TAGS.contains(&name) {
                edits.detached.extend(node.children().map(|child| child.id()));
            } else {
                edits.detached.push(node.id());
            }
            return Ok(());
        }

        // namespaced ones such as `xlink:href` are left alone
        for (attr, value) in el.value().attrs.iter() {
            if attr.ns == ns!()
                && LINK_ATTRS.contains(&&*attr.local)
                && util::is_relative_link(value)
            {
                let absolute = util::join_url(&self.root, value)?;
                edits.links.push((node.id(), attr.clone(), absolute));
            }
        }

        if NEWLINE_EATING_TAGS.contains(&name) {
            if let Some(first) = node.first_child() {
                if matches!(first.value(), Node::Text(text) if text.starts_with('\n')) {
                    edits.leading_newlines.push(first.id());
                }
            }
        }

        let article = node.children().find(Self::is_article);
        for child in node.children() {
            match (article, child.value()) {
                (Some(article), _) if article.id() != child.id() => {
                    edits.detached.push(child.id())
                }
                (_, Node::Element(_)) => self.visit(child, edits)?,
                (_, Node::Text(_)) => (),
                _ => edits.detached.push(child.id()),
            }
        }
        Ok(())
    }
}

/// Sanitize with links resolved against the public service root.
pub fn sanitize(markup: &str) -> Result<String> {
    Sanitizer::default().sanitize(markup)
}

#[cfg(test)]
mod test {
    use super::*;

    const PUZZLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head>
<meta charset="utf-8"/>
<title>Day 1 - Advent of Code 2022</title>
<link rel="stylesheet" type="text/css" href="/static/style.css?30"/>
<script>window.ga = function () {};</script>
</head>
<body>
<header><div><h1 class="title-global"><a href="/">Advent of Code</a></h1>
<nav><ul><li><a href="/2022/about">[About]</a></li></ul></nav></div></header>
<div id="sidebar"><div id="sponsor"><div class="quiet">Our sponsors</div></div></div>
<!-- this is a comment -->
<main>
<p>before the article</p>
<article class="day-desc"><h2>--- Day 1: Calorie Counting ---</h2>
<p>Santa's reindeer <em>typically</em> eat <span title="x">regular</span> food.</p>
<p>See <img src="/static/elf.png" alt="elf"/> &amp; <code>1 &lt; 2</code></p>
<script>alert(1)</script>
</article>
<p>Your puzzle answer was <code>69795</code>.</p>
<form method="post" action="1/answer"><input type="hidden" name="level" value="1"/></form>
</main>
</body>
</html>
"#;

    #[test]
    fn drops_chrome_and_keeps_article() {
        let out = sanitize(PUZZLE_PAGE).unwrap();

        assert!(out.contains("--- Day 1: Calorie Counting ---"));
        assert!(out.contains("<em>typically</em>"));
        assert!(out.contains("&amp;"));
        assert!(out.contains("<code>1 &lt; 2</code>"));

        for gone in [
            "<script",
            "<form",
            "<a ",
            "<span",
            "<header",
            "<nav",
            "sidebar",
            "sponsor",
            "this is a comment",
            "regular",
        ] {
            assert!(!out.contains(gone), "{:?} must be removed:\n{}", gone, out);
        }
    }

    #[test]
    fn article_discards_all_siblings() {
        let out = sanitize(PUZZLE_PAGE).unwrap();
        assert!(!out.contains("before the article"));
        assert!(!out.contains("69795"));
        assert!(out.contains("<main><article"));
        assert!(out.contains("</article></main>"));
    }

    #[test]
    fn relative_links_become_absolute() {
        let out = sanitize(PUZZLE_PAGE).unwrap();
        assert!(out.contains(r#"href="https://adventofcode.com/static/style.css?30""#));
        assert!(out.contains(r#"src="https://adventofcode.com/static/elf.png""#));
        assert!(!out.contains(r#"href="/"#));
        assert!(!out.contains(r#"src="/"#));
    }

    #[test]
    fn absolute_links_are_kept() {
        let out = sanitize(r#"<link rel="x" href="https://example.com/a.css">"#).unwrap();
        assert!(out.contains(r#"href="https://example.com/a.css""#));
    }

    #[test]
    fn custom_root_is_used_for_links() {
        let root = Url::parse("http://127.0.0.1:3000/").unwrap();
        let out = Sanitizer::new(root)
            .sanitize(r#"<p><img src="/x.png"></p>"#)
            .unwrap();
        assert!(out.contains(r#"src="http://127.0.0.1:3000/x.png""#));
    }

    #[test]
    fn idempotent() {
        for page in [
            PUZZLE_PAGE,
            "<p>plain &lt;text&gt; only</p>",
            r#"<div><p class="a" id="b">x</p><article>y</article><p>z</p></div>"#,
            "<style>p > a { color: red; }</style><p>\u{a0}</p>",
            "<article><pre>\n\nx</pre></article>",
            r#"<html><body class="sidebar"><p>x</p></body></html>"#,
        ] {
            let once = sanitize(page).unwrap();
            let twice = sanitize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn leading_newline_of_pre_survives() {
        let out = sanitize("<article><pre>\n\nx</pre></article>").unwrap();
        assert!(out.contains("<pre>\n\nx</pre>"), "{}", out);
    }

    #[test]
    fn marked_body_is_emptied_not_dropped() {
        let out = sanitize(r#"<html><body class="sidebar"><p>x</p></body></html>"#).unwrap();
        assert_eq!(
            out,
            r#"<html><head></head><body class="sidebar"></body></html>"#
        );
    }

    #[test]
    fn namespaced_link_attrs_are_untouched() {
        let page = r##"<article><svg><use xlink:href="#a" href="/b"></use></svg></article>"##;
        let out = sanitize(page).unwrap();
        assert!(out.contains(r##"xlink:href="#a""##), "{}", out);
        assert!(out.contains(r#"href="https://adventofcode.com/b""#), "{}", out);
        assert!(!out.contains("unknown_namespace"));
        assert_eq!(sanitize(&out).unwrap(), out);
    }

    #[test]
    fn attribute_order_is_preserved() {
        let out = sanitize(r#"<p title="t" class="c" id="i">x</p>"#).unwrap();
        assert!(out.contains(r#"<p title="t" class="c" id="i">"#), "{}", out);
    }

    #[test]
    fn empty_input_is_parse_error() {
        assert!(matches!(sanitize(""), Err(Error::Parse { .. })));
        assert!(matches!(sanitize(" \n\t"), Err(Error::Parse { .. })));
    }
}
