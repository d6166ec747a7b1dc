//! Navigation markup for a page outline.

use mdpages_core::{Outline, OutlineNode};

/// Render an outline as nested lists of anchor links.
///
/// Each node becomes `<li><a href="#id">label</a></li>`; children are nested
/// in a `<ul>` inside their parent's `<li>`. An empty outline renders as an
/// empty string.
pub fn render_outline(outline: &Outline) -> String {
    let mut html = String::new();
    if !outline.is_empty() {
        render_list(&mut html, &outline.children, 0);
    }
    html
}

fn render_list(html: &mut String, nodes: &[OutlineNode], indent: usize) {
    let pad = "  ".repeat(indent);

    if indent == 0 {
        html.push_str("<ul class=\"toc-list\">\n");
    } else {
        html.push_str(&format!("{}<ul>\n", pad));
    }

    for node in nodes {
        let link = format!(
            "<a href=\"#{}\">{}</a>",
            html_escape(&node.id),
            html_escape(&node.label)
        );

        if node.children.is_empty() {
            html.push_str(&format!("{}  <li>{}</li>\n", pad, link));
        } else {
            html.push_str(&format!("{}  <li>{}\n", pad, link));
            render_list(html, &node.children, indent + 2);
            html.push_str(&format!("{}  </li>\n", pad));
        }
    }

    html.push_str(&format!("{}</ul>\n", pad));
}

/// HTML escape function to prevent XSS
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
