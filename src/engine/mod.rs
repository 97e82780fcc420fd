pub mod constants;
pub mod easing;
pub mod effect;
pub mod palette;
pub mod params;
pub mod particles;
pub mod pool;
pub mod surface;

pub use effect::{master_alpha, SplashEffect};
pub use palette::{Palette, PALETTES};
pub use params::{ParamsError, SplashParams};
pub use particles::{Particle, SpawnScale, Streak, StreakDot};
pub use pool::SplashPool;
pub use surface::{SplashSurface, Viewport};
