//! Page template.
//!
//! The page is a plain HTML file with a handful of `{{...}}` tags:
//!
//! - `{{backend}}` and `{{count}}` anywhere
//! - `{{#items}} ... {{/items}}` repeated once per item, with `{{id}}` and
//!   `{{title}}` available inside
//! - `{{^items}} ... {{/items}}` rendered only when the list is empty
//!
//! Tags are parsed once at startup so a broken template fails fast instead
//! of on the first request. Substituted values are HTML-escaped.

use std::env;
use std::path::{Path, PathBuf};

use todo_store::Item;

const TEMPLATE_DIR: &str = "templates";
const TEMPLATE_FILE: &str = "index.html";

/// Errors raised while loading a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template file could not be read.
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `{{` without a matching `}}`.
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),

    /// A section opened but never closed.
    #[error("unterminated section {{{{{0}items}}}}")]
    UnterminatedSection(char),

    /// A `{{/items}}` with no open section.
    #[error("unexpected {{{{/items}}}}")]
    UnexpectedClose,

    /// Sections cannot be nested.
    #[error("nested section {{{{{0}items}}}}")]
    NestedSection(char),

    /// An item field used outside `{{#items}}`.
    #[error("{{{{{0}}}}} used outside {{{{#items}}}}")]
    FieldOutsideItems(String),

    /// A tag that is not part of the template language.
    #[error("unknown tag {{{{{0}}}}}")]
    UnknownTag(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Var {
    Backend,
    Count,
    Id,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Var(Var),
    Items(Vec<Node>),
    Empty(Vec<Node>),
}

/// A parsed page template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    nodes: Vec<Node>,
}

impl PageTemplate {
    /// Resolves the template path.
    ///
    /// An explicit path wins. Otherwise `templates/index.html` is looked up
    /// next to the executable, then in the working directory, then in the
    /// crate's source directory.
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        let beside_exe = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map(|dir| dir.join(TEMPLATE_DIR).join(TEMPLATE_FILE));

        let in_cwd = Path::new(TEMPLATE_DIR).join(TEMPLATE_FILE);
        let in_crate = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(TEMPLATE_DIR)
            .join(TEMPLATE_FILE);

        match beside_exe {
            Some(path) if path.is_file() => path,
            _ if in_cwd.is_file() => in_cwd,
            _ if in_crate.is_file() => in_crate,
            // Report the conventional location when nothing exists.
            _ => in_cwd,
        }
    }

    /// Reads and parses the template at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::parse(&source)?;
        tracing::debug!(path = %path.display(), "Loaded page template");
        Ok(template)
    }

    /// Parses template source.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut root = Vec::new();
        // At most one open section: its kind and collected children.
        let mut section: Option<(char, Vec<Node>)> = None;
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            let in_items = matches!(section, Some(('#', _)));
            let nodes = match section.as_mut() {
                Some((_, children)) => children,
                None => &mut root,
            };
            if start > 0 {
                nodes.push(Node::Text(rest[..start].to_string()));
            }

            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or(TemplateError::UnterminatedTag(offset + start))?;
            let tag = after_open[..end].trim();

            match tag {
                "#items" | "^items" => {
                    let kind = tag.chars().next().unwrap_or('#');
                    if section.is_some() {
                        return Err(TemplateError::NestedSection(kind));
                    }
                    section = Some((kind, Vec::new()));
                }
                "/items" => {
                    let (kind, children) = section.take().ok_or(TemplateError::UnexpectedClose)?;
                    root.push(if kind == '#' {
                        Node::Items(children)
                    } else {
                        Node::Empty(children)
                    });
                }
                "backend" => nodes.push(Node::Var(Var::Backend)),
                "count" => nodes.push(Node::Var(Var::Count)),
                "id" | "title" => {
                    if !in_items {
                        return Err(TemplateError::FieldOutsideItems(tag.to_string()));
                    }
                    nodes.push(Node::Var(if tag == "id" { Var::Id } else { Var::Title }));
                }
                other => return Err(TemplateError::UnknownTag(other.to_string())),
            }

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if let Some((kind, _)) = section {
            return Err(TemplateError::UnterminatedSection(kind));
        }
        if !rest.is_empty() {
            root.push(Node::Text(rest.to_string()));
        }

        Ok(Self { nodes: root })
    }

    /// Renders the page for `items`.
    pub fn render(&self, backend: &str, items: &[Item]) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Items(children) => {
                    for item in items {
                        render_nodes(children, backend, items, Some(item), &mut out);
                    }
                }
                Node::Empty(children) if items.is_empty() => {
                    render_nodes(children, backend, items, None, &mut out);
                }
                Node::Empty(_) => {}
                other => render_nodes(std::slice::from_ref(other), backend, items, None, &mut out),
            }
        }
        out
    }
}

fn render_nodes(nodes: &[Node], backend: &str, items: &[Item], item: Option<&Item>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(Var::Backend) => out.push_str(&escape_html(backend)),
            Node::Var(Var::Count) => out.push_str(&items.len().to_string()),
            Node::Var(Var::Id) => {
                if let Some(item) = item {
                    out.push_str(&escape_html(&item.id));
                }
            }
            Node::Var(Var::Title) => {
                if let Some(item) = item {
                    out.push_str(&escape_html(&item.title));
                }
            }
            // Sections only appear at the top level.
            Node::Items(_) | Node::Empty(_) => {}
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../templates/index.html");

    #[test]
    fn test_bundled_template_parses() {
        let template = PageTemplate::parse(PAGE).unwrap();
        let html = template.render("In-Memory (ephemeral)", &[Item::new("1", "Buy milk")]);
        assert!(html.contains("In-Memory (ephemeral)"));
        assert!(html.contains("Buy milk"));
        assert!(html.contains(r#"name="id" value="1""#));
    }

    #[test]
    fn test_render_items_and_vars() {
        let template =
            PageTemplate::parse("<h1>{{backend}} ({{ count }})</h1><ul>{{#items}}<li>{{id}}:{{title}}</li>{{/items}}</ul>")
                .unwrap();
        let items = vec![Item::new("1", "a"), Item::new("3", "b")];

        let html = template.render("SQLite (persistent)", &items);

        assert_eq!(
            html,
            "<h1>SQLite (persistent) (2)</h1><ul><li>1:a</li><li>3:b</li></ul>"
        );
    }

    #[test]
    fn test_render_empty_section() {
        let template =
            PageTemplate::parse("{{#items}}<li>{{title}}</li>{{/items}}{{^items}}<p>Nothing to do</p>{{/items}}")
                .unwrap();

        assert_eq!(template.render("x", &[]), "<p>Nothing to do</p>");
        assert_eq!(template.render("x", &[Item::new("1", "a")]), "<li>a</li>");
    }

    #[test]
    fn test_render_escapes_html() {
        let template = PageTemplate::parse("{{#items}}{{title}}{{/items}}|{{backend}}").unwrap();
        let html = template.render("<b>", &[Item::new("1", r#"<script>alert("x") & 'y'</script>"#)]);
        assert_eq!(
            html,
            "&lt;script&gt;alert(&#34;x&#34;) &amp; &#39;y&#39;&lt;/script&gt;|&lt;b&gt;"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PageTemplate::parse("{{backend"),
            Err(TemplateError::UnterminatedTag(0))
        ));
        assert!(matches!(
            PageTemplate::parse("{{#items}}<li>"),
            Err(TemplateError::UnterminatedSection('#'))
        ));
        assert!(matches!(
            PageTemplate::parse("{{/items}}"),
            Err(TemplateError::UnexpectedClose)
        ));
        assert!(matches!(
            PageTemplate::parse("{{#items}}{{^items}}{{/items}}"),
            Err(TemplateError::NestedSection('^'))
        ));
        assert!(matches!(
            PageTemplate::parse("{{title}}"),
            Err(TemplateError::FieldOutsideItems(tag)) if tag == "title"
        ));
        assert!(matches!(
            PageTemplate::parse("{{^items}}{{id}}{{/items}}"),
            Err(TemplateError::FieldOutsideItems(tag)) if tag == "id"
        ));
        assert!(matches!(
            PageTemplate::parse("{{ nope }}"),
            Err(TemplateError::UnknownTag(tag)) if tag == "nope"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PageTemplate::load(Path::new("/nonexistent/index.html")).unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
        assert!(err.to_string().starts_with("read /nonexistent/index.html: "));
    }

    #[test]
    fn test_locate_finds_bundled_template() {
        let path = PageTemplate::locate(None);
        assert!(path.is_file(), "{} should exist", path.display());
        PageTemplate::load(&path).unwrap();
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let path = PageTemplate::locate(Some(Path::new("/srv/page.html")));
        assert_eq!(path, PathBuf::from("/srv/page.html"));
    }
}
