pub mod collision;
pub mod goal;
pub mod hazards;
pub mod input;
pub mod movement;
pub mod pickups;
pub mod platforms;
pub mod visibility;
pub mod zones;

pub use collision::*;
pub use goal::*;
pub use hazards::*;
pub use input::*;
pub use movement::*;
pub use pickups::*;
pub use platforms::*;
pub use visibility::*;
pub use zones::*;
