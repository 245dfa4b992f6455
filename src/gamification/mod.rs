pub mod badges;
pub mod levels;
pub mod xp;

pub use badges::{evaluate_badges, Badge, BadgeId};
pub use levels::{resolve_level, UserLevel};
pub use xp::compute_xp;
