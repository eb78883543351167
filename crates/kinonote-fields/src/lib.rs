//! Template-field transformation engine for kinonote.
//!
//! Converts one raw Kinopoisk record into the flat, template-ready
//! field set consumed by note templates.

mod flat;
mod format;
mod html;
mod service;
mod transform;

pub use flat::{FlatRecord, RoleViews};
pub use format::{FieldItem, FormatMode, MAX_FIELD_ITEMS, format_items};
pub use html::clean_html;
pub use service::{fetch_flat, search};
pub use transform::{LinkFolders, MAX_FACTS, RecordTransformer, image_embed};
