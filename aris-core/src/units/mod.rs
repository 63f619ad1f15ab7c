mod distance;
mod duration;
mod rate;
mod salinity;
mod temperature;
mod velocity;

pub use distance::Distance;
pub use duration::FineDuration;
pub use rate::Rate;
pub use salinity::Salinity;
pub use temperature::Temperature;
pub use velocity::Velocity;
