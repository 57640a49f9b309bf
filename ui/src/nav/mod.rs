pub mod dom;
pub mod navigator;
pub mod scroll_spy;
pub mod state;

pub use dom::{DomScroller, SpyGuard};
pub use navigator::{Navigator, PageNavigator, ScrollTarget};
pub use scroll_spy::{Crossing, ScrollSpy, SpyOptions, Watch, pick_active};
pub use state::ActiveSection;
