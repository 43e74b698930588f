// src/application/mod.rs
pub mod catalog;
pub mod detail;
pub mod gallery;
pub mod router;

pub use catalog::{filter_cards, CardRepository};
pub use detail::{CardDetail, DetailPage, DetailView};
pub use gallery::{GalleryContent, GalleryPage, GalleryView, Tile};
pub use router::{Navigator, Route, Screen};
