pub mod fetch_seq;
pub mod use_load;
pub mod use_load_draft;
pub mod use_loads;

pub use fetch_seq::FetchSeq;
pub use use_load::{use_load, LoadState};
pub use use_load_draft::use_load_draft;
pub use use_loads::use_loads;
