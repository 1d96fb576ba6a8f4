// Landing page routes
// Built by the TESSA Team (c)2025

mod home;
mod legal;
mod not_found;

pub use home::HomePage;
pub use legal::{ImprintPage, PrivacyPage};
pub use not_found::NotFoundPage;
