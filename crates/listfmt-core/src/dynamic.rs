//! Runtime-selected list strategies.
//!
//! The processor holds its strategy behind a `Box<dyn ListStrategy>`, so the
//! same processor can switch notations between renders. The price is an
//! indirect call per operation and a state where no strategy is selected yet.

use tracing::{debug, instrument, trace};

use crate::{
    error::{ListError, ListResult},
    notation::Notation,
};

/// Rendering policy for one notation.
///
/// `start` and `end` default to appending nothing, so a notation without
/// list markers only has to say how an item looks.
#[cfg_attr(test, mockall::automock)]
pub trait ListStrategy: Send + Sync {
    /// The notation this strategy renders.
    fn notation(&self) -> Notation;

    /// Append the list-opening marker.
    fn start(&self, _out: &mut String) {}

    /// Append one item, terminated by a newline.
    fn add_list_item(&self, out: &mut String, item: &str);

    /// Append the list-closing marker.
    fn end(&self, _out: &mut String) {}
}

/// ` * item` lines with no surrounding markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletStrategy;

impl ListStrategy for BulletStrategy {
    fn notation(&self) -> Notation {
        Notation::Bullet
    }

    fn add_list_item(&self, out: &mut String, item: &str) {
        out.push_str(" * ");
        out.push_str(item);
        out.push('\n');
    }
}

/// `<li>` items wrapped in a `<ul>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedStrategy;

impl ListStrategy for TaggedStrategy {
    fn notation(&self) -> Notation {
        Notation::Tagged
    }

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

/// Build the strategy for a notation.
pub fn strategy_for(notation: Notation) -> Box<dyn ListStrategy> {
    match notation {
        Notation::Bullet => Box::new(BulletStrategy),
        Notation::Tagged => Box::new(TaggedStrategy),
    }
}

/// Accumulates rendered lists using a strategy chosen at runtime.
#[derive(Default)]
pub struct TextProcessor {
    buffer: String,
    strategy: Option<Box<dyn ListStrategy>>,
}

impl TextProcessor {
    /// Create a processor with an empty buffer and no strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with `notation` already selected.
    pub fn with_notation(notation: Notation) -> Self {
        let mut processor = Self::new();
        processor.set_notation(notation);
        processor
    }

    /// Install the strategy for `notation`, replacing the current one.
    ///
    /// Content already in the buffer is left as it is.
    pub fn set_notation(&mut self, notation: Notation) {
        debug!(%notation, "switching list strategy");
        self.strategy = Some(strategy_for(notation));
    }

    /// Parse `name` and install the matching strategy.
    ///
    /// On error the current strategy stays installed.
    pub fn set_notation_str(&mut self, name: &str) -> ListResult<()> {
        let notation = name.parse()?;
        self.set_notation(notation);
        Ok(())
    }

    /// Install a caller-supplied strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn ListStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Notation of the installed strategy, if any.
    pub fn notation(&self) -> Option<Notation> {
        self.strategy.as_ref().map(|s| s.notation())
    }

    /// Render `items` as one list and append it to the buffer.
    ///
    /// # Errors
    ///
    /// [`ListError::NoStrategySelected`] if no notation has been set. The
    /// buffer is not touched in that case.
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn append_list<S: AsRef<str>>(&mut self, items: &[S]) -> ListResult<()> {
        let strategy = self
            .strategy
            .as_deref()
            .ok_or(ListError::NoStrategySelected)?;

        strategy.start(&mut self.buffer);
        for item in items {
            strategy.add_list_item(&mut self.buffer, item.as_ref());
        }
        strategy.end(&mut self.buffer);

        trace!(len = self.buffer.len(), "list appended");
        Ok(())
    }

    /// Empty the buffer. The selected strategy is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Everything rendered since construction or the last [`clear`](Self::clear).
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the processor and return its buffer.
    pub fn into_text(self) -> String {
        self.buffer
    }
}

impl std::fmt::Debug for TextProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextProcessor")
            .field("buffer", &self.buffer)
            .field("notation", &self.notation())
            .finish()
    }
}

/// Render `items` in `notation` into a fresh string.
pub fn render<S: AsRef<str>>(notation: Notation, items: &[S]) -> String {
    let strategy = strategy_for(notation);
    let mut out = String::new();
    strategy.start(&mut out);
    for item in items {
        strategy.add_list_item(&mut out, item.as_ref());
    }
    strategy.end(&mut out);
    out
}
