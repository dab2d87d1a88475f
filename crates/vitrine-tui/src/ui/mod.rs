pub mod app;
pub mod carousel_modal;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod lightbox_modal;
pub mod picture;
