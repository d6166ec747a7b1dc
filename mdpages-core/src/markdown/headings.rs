//! Heading scan over the parsed event stream.

use crate::outline::Heading;
use crate::slug::Slugger;
use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

struct RawHeading {
    depth: u8,
    text: String,
    explicit_id: Option<String>,
}

/// Collect every heading in document order and assign its anchor id.
///
/// Explicit ids (`# Title {#custom}`) are kept and reserved before any id is
/// generated, so a later explicit id never ends up duplicated by an earlier
/// generated one.
pub fn collect_headings(events: &[Event<'_>]) -> Vec<Heading> {
    let mut raw = Vec::new();
    let mut current: Option<RawHeading> = None;
    // Image alt text is not part of the visible heading text
    let mut image_depth = 0usize;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some(RawHeading {
                    depth: *level as u8,
                    text: String::new(),
                    explicit_id: id.as_ref().map(|s| s.to_string()),
                });
            }
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) if image_depth == 0 => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    raw.push(heading);
                }
            }
            _ => {}
        }
    }

    let mut slugger = Slugger::new();
    for heading in &raw {
        if let Some(id) = heading.explicit_id.as_deref() {
            slugger.reserve(id);
        }
    }

    raw.into_iter()
        .map(|heading| {
            let id = slugger.assign(&heading.text, heading.explicit_id.as_deref());
            Heading {
                depth: heading.depth,
                label: heading.text.trim().to_string(),
                id,
            }
        })
        .collect()
}

/// Write the assigned ids onto the heading start events so anchors resolve.
pub fn attach_heading_ids<'a>(events: Vec<Event<'a>>, headings: &[Heading]) -> Vec<Event<'a>> {
    let mut heading_iter = headings.iter();

    events
        .into_iter()
        .map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                let id = match heading_iter.next() {
                    Some(next) => Some(CowStr::from(next.id.clone())),
                    None => id,
                };
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                })
            }
            other => other,
        })
        .collect()
}
