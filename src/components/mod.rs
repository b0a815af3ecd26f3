pub mod navbar;
pub mod toast_view;

pub use toast_view::toast_view;
