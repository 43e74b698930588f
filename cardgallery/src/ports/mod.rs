// src/ports/mod.rs
pub mod decor;
pub mod html;
pub mod site;

pub use decor::{Decor, DecorGuard, Head};
pub use html::{HtmlPresenter, LinkMode, SiteText};
pub use site::{render_static_site, SitePage};
