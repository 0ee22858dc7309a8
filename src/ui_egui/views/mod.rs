pub mod content_list;
pub mod header_view;

pub use content_list::ContentList;
pub use header_view::{HeaderView, HeaderViewAction};
