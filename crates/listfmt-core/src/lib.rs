//! listfmt Core - Strategy pattern for list rendering
//!
//! This crate renders a sequence of text items as a list in one of two
//! notations, and does it twice: once with the strategy chosen at runtime,
//! once with the strategy fixed by a type parameter.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           listfmt-cli (CLI)             │
//! │      (demo + render subcommands)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!          ┌─────────┴──────────┐
//!          ▼                    ▼
//! ┌──────────────────┐ ┌──────────────────────┐
//! │ dynamic          │ │ generic              │
//! │ TextProcessor    │ │ TextProcessor<S>     │
//! │ Box<dyn Strategy>│ │ S: ListStrategy      │
//! └────────┬─────────┘ └──────────┬───────────┘
//!          │ selects by            │ fixed by
//!          ▼                       ▼
//! ┌─────────────────────────────────────────┐
//! │      Notation { Bullet, Tagged }        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use listfmt_core::{
//!     Notation,
//!     dynamic,
//!     generic::{self, TaggedStrategy},
//! };
//!
//! // Runtime-selected strategy
//! let mut processor = dynamic::TextProcessor::new();
//! processor.set_notation(Notation::Bullet);
//! processor.append_list(&["foo", "bar"]).unwrap();
//! assert_eq!(processor.text(), " * foo\n * bar\n");
//!
//! // Strategy fixed at compile time
//! let mut processor = generic::TextProcessor::<TaggedStrategy>::new();
//! processor.append_list(&["foo"]);
//! assert_eq!(processor.text(), "<ul>\n<li>foo</li>\n</ul>\n");
//! ```

pub mod dynamic;
pub mod error;
pub mod generic;
pub mod notation;

pub use error::{ListError, ListResult};
pub use notation::Notation;

/// Items rendered by the demonstration driver.
pub const SAMPLE_ITEMS: [&str; 3] = ["foo", "bar", "baz"];

// Public API - what external crates should use
pub mod prelude {
    pub use crate::SAMPLE_ITEMS;
    pub use crate::dynamic::{self, ListStrategy as DynListStrategy};
    pub use crate::error::{ErrorCategory, ListError, ListResult};
    pub use crate::generic::{
        self, BulletProcessor, ListStrategy as StaticListStrategy, TaggedProcessor,
    };
    pub use crate::notation::Notation;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
