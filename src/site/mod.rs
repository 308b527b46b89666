pub mod robots;
pub mod theme;

pub use robots::{robots_txt, sitemap_url, SiteError};
pub use theme::Palette;
