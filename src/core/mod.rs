pub mod catalog;
pub mod constants;
pub mod format;
pub mod scale;
pub mod view;

pub use catalog::*;
pub use constants::*;
pub use format::*;
pub use scale::*;
pub use view::*;
