//! The things that live on the playfield.

pub mod collectible;
pub mod enemy;
pub mod player;
pub mod wall;

pub use collectible::Collectible;
pub use enemy::Enemy;
pub use player::{MoveAxes, Player};
pub use wall::Wall;
