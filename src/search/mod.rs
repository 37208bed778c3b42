//! Command search engine: catalog builder, query ranker, selection cursor.

mod catalog;
mod cursor;
mod entry;
mod rank;

pub use catalog::{build_catalog, Catalog, NavTarget, QuickAction, ShowRecord};
pub use cursor::SelectionCursor;
pub use entry::{EntryKind, SearchableEntry};
pub use rank::{rank, tokenize};
