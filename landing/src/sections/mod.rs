// Landing page sections
// Built by the TESSA Team (c)2025

mod context;
mod footer;
mod hero;
mod literature;
mod nav;
mod revenue;
mod solution;
mod stats;
mod team;

pub use context::ContextSection;
pub use footer::Footer;
pub use hero::Hero;
pub use literature::Literature;
pub use nav::Nav;
pub use revenue::Revenue;
pub use solution::Solution;
pub use stats::Stats;
pub use team::Team;
