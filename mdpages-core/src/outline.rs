//! Navigation outline built from a document's headings.
//!
//! Headings arrive in document order with depths 1 through 6. The builder
//! nests by order of appearance: every depth increase opens exactly one new
//! level, whatever the size of the jump, and every decrease closes
//! `last - current` levels, stopping at the root.

/// Smallest and largest heading depth accepted by the builder.
pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 6;

/// One section heading, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub depth: u8,
    pub label: String,
    pub id: String,
}

impl Heading {
    pub fn new(depth: u8, label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            depth,
            label: label.into(),
            id: id.into(),
        }
    }
}

/// A single entry of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub label: String,
    pub id: String,
    pub children: Vec<OutlineNode>,
}

/// The synthetic root of a document's navigation tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub children: Vec<OutlineNode>,
}

impl Outline {
    /// Build an outline in a single pass over `headings`.
    pub fn from_headings<'a, I>(headings: I) -> Self
    where
        I: IntoIterator<Item = &'a Heading>,
    {
        let mut builder = OutlineBuilder::new();
        for heading in headings {
            builder.push(heading);
        }
        builder.finish()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes below the root.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order traversal; yields nodes in the order their headings appeared.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.children.iter().rev().collect(),
        }
    }
}

pub struct PreOrder<'a> {
    stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[derive(Debug)]
struct Slot {
    label: String,
    id: String,
    children: Vec<usize>,
}

const ROOT: usize = 0;

/// Incremental outline construction.
///
/// Nodes live in an arena addressed by index; slot 0 is the synthetic root.
/// The nesting stack holds the arena index whose child list is the current
/// insertion point for each open level.
#[derive(Debug)]
pub struct OutlineBuilder {
    arena: Vec<Slot>,
    stack: Vec<usize>,
    last_depth: u8,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            arena: vec![Slot {
                label: String::new(),
                id: String::new(),
                children: Vec::new(),
            }],
            stack: vec![ROOT],
            last_depth: MIN_DEPTH,
        }
    }

    /// Number of currently open levels, root included.
    pub fn open_levels(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, heading: &Heading) {
        let depth = heading.depth.clamp(MIN_DEPTH, MAX_DEPTH);

        if depth > self.last_depth {
            self.open_level();
        } else if depth < self.last_depth {
            self.close_levels(usize::from(self.last_depth - depth));
        }

        let index = self.arena.len();
        self.arena.push(Slot {
            label: heading.label.clone(),
            id: heading.id.clone(),
            children: Vec::new(),
        });
        let parent = self.insertion_point();
        self.arena[parent].children.push(index);

        self.last_depth = depth;
    }

    pub fn finish(self) -> Outline {
        // Children always have larger indices than their parent, so a reverse
        // sweep finishes every subtree before its parent is assembled.
        let mut built: Vec<Option<OutlineNode>> = Vec::with_capacity(self.arena.len());
        built.resize_with(self.arena.len(), || None);

        let mut slots = self.arena;
        for index in (ROOT + 1..slots.len()).rev() {
            let slot = &mut slots[index];
            let children = take_children(&mut built, &slot.children);
            built[index] = Some(OutlineNode {
                label: std::mem::take(&mut slot.label),
                id: std::mem::take(&mut slot.id),
                children,
            });
        }

        Outline {
            children: take_children(&mut built, &slots[ROOT].children),
        }
    }

    fn insertion_point(&self) -> usize {
        self.stack.last().copied().unwrap_or(ROOT)
    }

    fn open_level(&mut self) {
        // Nothing appended at this level yet means nothing to nest under.
        if let Some(&last) = self.arena[self.insertion_point()].children.last() {
            self.stack.push(last);
        }
    }

    fn close_levels(&mut self, count: usize) {
        for _ in 0..count {
            if self.stack.len() == 1 {
                break;
            }
            self.stack.pop();
        }
    }
}

fn take_children(built: &mut [Option<OutlineNode>], indices: &[usize]) -> Vec<OutlineNode> {
    indices
        .iter()
        .filter_map(|&child| built[child].take())
        .collect()
}
