//! Compile-time selected list strategies.
//!
//! The processor is generic over its strategy, so every call is resolved
//! statically and there is no "no strategy yet" state. Switching notation
//! means building a different processor type.

use tracing::{instrument, trace};

use crate::notation::Notation;

/// Rendering policy for one notation.
///
/// Unlike [`crate::dynamic::ListStrategy`] there are no defaults: every
/// strategy spells out all three steps, even when a step appends nothing.
pub trait ListStrategy {
    /// The notation this strategy renders.
    const NOTATION: Notation;

    fn start(&self, out: &mut String);

    fn add_list_item(&self, out: &mut String, item: &str);

    fn end(&self, out: &mut String);
}

/// ` * item` lines with no surrounding markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletStrategy;

impl ListStrategy for BulletStrategy {
    const NOTATION: Notation = Notation::Bullet;

    fn start(&self, _out: &mut String) {}

    fn add_list_item(&self, out: &mut String, item: &str) {
        out.push_str(" * ");
        out.push_str(item);
        out.push('\n');
    }

    fn end(&self, _out: &mut String) {}
}

/// `<li>` items wrapped in a `<ul>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedStrategy;

impl ListStrategy for TaggedStrategy {
    const NOTATION: Notation = Notation::Tagged;

    fn start(&self, out: &mut String) {
        out.push_str("<ul>\n");
    }

    fn add_list_item(&self, out: &mut String, item: &str) {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>\n");
    }

    fn end(&self, out: &mut String) {
        out.push_str("</ul>\n");
    }
}

/// Accumulates rendered lists using the strategy `S`.
#[derive(Debug, Clone, Default)]
pub struct TextProcessor<S: ListStrategy> {
    buffer: String,
    strategy: S,
}

pub type BulletProcessor = TextProcessor<BulletStrategy>;
pub type TaggedProcessor = TextProcessor<TaggedStrategy>;

impl<S: ListStrategy + Default> TextProcessor<S> {
    pub fn new() -> Self {
        Self::with_strategy(S::default())
    }
}

impl<S: ListStrategy> TextProcessor<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            buffer: String::new(),
            strategy,
        }
    }

    /// The notation fixed by `S`.
    pub fn notation(&self) -> Notation {
        S::NOTATION
    }

    /// Render `items` as one list and append it to the buffer.
    #[instrument(skip_all, fields(notation = %S::NOTATION, items = items.len()))]
    pub fn append_list<T: AsRef<str>>(&mut self, items: &[T]) {
        self.strategy.start(&mut self.buffer);
        for item in items {
            self.strategy.add_list_item(&mut self.buffer, item.as_ref());
        }
        self.strategy.end(&mut self.buffer);
        trace!(len = self.buffer.len(), "list appended");
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_text(self) -> String {
        self.buffer
    }
}

/// Render `items` with a default-constructed `S` into a fresh string.
pub fn render<S, T>(items: &[T]) -> String
where
    S: ListStrategy + Default,
    T: AsRef<str>,
{
    let mut processor = TextProcessor::<S>::new();
    processor.append_list(items);
    processor.into_text()
}
