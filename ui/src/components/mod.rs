pub mod animated;
pub mod icon;
pub mod page_meta;
pub mod theme_toggle;
