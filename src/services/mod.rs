// Service module exports
// Calendar header behaviour, from grid generation up to the facade

pub mod grid;
pub mod header;
pub mod paging;
pub mod scroll;
pub mod settings;
pub mod store;
pub mod transition;
