pub mod admin;
pub mod bottom_nav;
pub mod navigate;
pub mod screen;
pub mod view;
