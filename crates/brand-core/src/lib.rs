pub mod audio;
pub mod constants;
pub mod entrance;
pub mod env;
pub mod math;
pub mod schedule;
pub mod style;

pub use audio::*;
pub use constants::*;
pub use entrance::*;
pub use env::*;
pub use math::*;
pub use schedule::*;
pub use style::*;
