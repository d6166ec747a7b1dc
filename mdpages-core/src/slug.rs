//! Heading anchor generation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Convert heading text to an anchor-safe slug
///
/// Rules:
/// - Trim leading/trailing whitespace
/// - Lowercase
/// - Replace each whitespace run with a single hyphen
/// - Drop everything except letters, digits, hyphens and underscores
///
/// The result may be empty; [`Slugger`] handles that case.
///
/// # Examples
///
/// ```
/// use mdpages_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("  Rust & Safety "), "rust--safety");
/// assert_eq!(slugify("snake_case names"), "snake_case-names");
/// ```
pub fn slugify(input: &str) -> String {
    let lowercased = input.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowercased, "-");

    hyphenated
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Assigns unique anchor ids to the headings of one document.
///
/// A heading that already carries an id keeps it verbatim. Generated ids are
/// disambiguated with a numeric suffix (`intro`, `intro-2`, `intro-3`) and
/// never reuse an id that was reserved or handed out earlier.
#[derive(Debug, Default)]
pub struct Slugger {
    taken: HashSet<String>,
    occurrences: HashMap<String, usize>,
    position: usize,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an explicit id as used so no generated id duplicates it.
    pub fn reserve(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }

    /// Return the anchor for the next heading in document order.
    pub fn assign(&mut self, text: &str, existing_id: Option<&str>) -> String {
        self.position += 1;

        if let Some(id) = existing_id.filter(|id| !id.is_empty()) {
            self.taken.insert(id.to_string());
            return id.to_string();
        }

        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("section-{}", self.position);
        }

        let id = self.disambiguate(&base);
        self.taken.insert(id.clone());
        id
    }

    fn disambiguate(&mut self, base: &str) -> String {
        let seen = self.occurrences.entry(base.to_string()).or_insert(0);
        *seen += 1;

        if *seen == 1 && !self.taken.contains(base) {
            return base.to_string();
        }

        let mut n = (*seen).max(2);
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.taken.contains(&candidate) {
                *seen = n;
                return candidate;
            }
            n += 1;
        }
    }
}
