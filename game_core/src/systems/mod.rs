pub mod collision;
pub mod movement;
pub mod scoring;
pub mod scroll;
pub mod spawn;
pub mod traffic;

pub use collision::*;
pub use movement::*;
pub use scoring::*;
pub use scroll::*;
pub use spawn::*;
pub use traffic::*;
