//! Markdown rendering with heading anchors and outline extraction.

pub mod headings;

use crate::outline::{Heading, Outline};
use headings::{attach_heading_ids, collect_headings};
use pulldown_cmark::{html, Event, Options, Parser};

/// Result of rendering one document
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Body HTML with an `id` on every heading
    pub html: String,
    pub headings: Vec<Heading>,
    pub outline: Outline,
}

impl RenderedDocument {
    /// Text of the first level-1 heading, if the document has one.
    pub fn title(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|h| h.depth == 1 && !h.label.is_empty())
            .map(|h| h.label.as_str())
    }
}

/// Markdown processor
pub struct MarkdownProcessor {
    options: Options,
}

impl MarkdownProcessor {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self { options }
    }

    /// Convert markdown to HTML and derive the heading outline in one scan.
    pub fn render(&self, markdown: &str) -> RenderedDocument {
        let events: Vec<Event> = Parser::new_ext(markdown, self.options).collect();

        let headings = collect_headings(&events);
        let events = attach_heading_ids(events, &headings);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        let outline = Outline::from_headings(&headings);

        RenderedDocument {
            html: html_output,
            headings,
            outline,
        }
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let processor = MarkdownProcessor::new();
        let doc = processor.render("# Hello World\n\nThis is a **test**.");
        assert!(doc.html.contains(r#"<h1 id="hello-world">Hello World</h1>"#));
        assert!(doc.html.contains("<strong>test</strong>"));
        assert_eq!(doc.title(), Some("Hello World"));
    }

    #[test]
    fn test_tables() {
        let processor = MarkdownProcessor::new();
        let md = r#"
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
"#;
        let doc = processor.render(md);
        assert!(doc.html.contains("<table>"));
        assert!(doc.html.contains("<th>Header 1</th>"));
        assert!(doc.outline.is_empty());
    }

    #[test]
    fn test_code_block_hash_is_not_a_heading() {
        let processor = MarkdownProcessor::new();
        let doc = processor.render("```bash\n# not a heading\n```\n\n## Real\n");
        assert_eq!(doc.headings.len(), 1);
        assert_eq!(doc.headings[0].id, "real");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_outline_scenario() {
        let processor = MarkdownProcessor::new();
        let doc = processor.render(
            "# Intro\n\n## Background\n\n## Motivation\n\n# Conclusion\n",
        );

        let top: Vec<&str> = doc.outline.children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(top, vec!["intro", "conclusion"]);

        let nested: Vec<&str> = doc.outline.children[0]
            .children
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(nested, vec!["background", "motivation"]);
        assert!(doc.outline.children[1].children.is_empty());
    }

    #[test]
    fn test_duplicate_headings_get_distinct_anchors() {
        let processor = MarkdownProcessor::new();
        let doc = processor.render("## Usage\n\n## Usage\n");
        assert!(doc.html.contains(r#"<h2 id="usage">"#));
        assert!(doc.html.contains(r#"<h2 id="usage-2">"#));
    }

    #[test]
    fn test_explicit_id_survives_rendering() {
        let processor = MarkdownProcessor::new();
        let doc = processor.render("## Setup {#install}\n");
        assert!(doc.html.contains(r#"<h2 id="install">"#));
        assert_eq!(doc.outline.children[0].id, "install");
    }
}
