//! Application pages
//!
//! - Landing page (home)
//! - Not found fallback

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
