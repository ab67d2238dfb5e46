mod board;
mod leap;
mod pawn;
mod piece;
mod player;
mod profile;
mod role;
mod square;
mod sweep;

pub use board::*;
pub use piece::*;
pub use player::*;
pub use profile::*;
pub use role::*;
pub use square::*;
