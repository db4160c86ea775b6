pub mod category;
pub mod layout;
pub mod post;

pub use category::{CategoryDescription, DEFAULT_EMOJI};
pub use layout::BlogLayout;
pub use post::PostTemplate;
