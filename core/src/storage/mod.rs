pub mod error {
    pub use fsutil::error::*;
}

pub mod cache;
pub mod layout;

pub use cache::read_through;
pub use layout::*;
