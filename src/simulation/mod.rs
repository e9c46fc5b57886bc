pub mod advance;
pub mod chase;
pub mod populate;

pub use advance::{advance, advance_by};
pub use chase::advance_zombie;
pub use populate::populate;
