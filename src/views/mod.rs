//! View state, independent of rendering

pub mod detail;
pub mod search;
pub mod team;

pub use detail::DetailView;
pub use search::SearchView;
pub use team::TeamView;
