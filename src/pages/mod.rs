mod axial_tilt;
mod eccentricity;
mod human_induced;
mod natural;
mod not_found;
mod precession;

pub use axial_tilt::AxialTiltPage;
pub use eccentricity::EccentricityPage;
pub use human_induced::HumanInducedPage;
pub use natural::NaturalFactorsPage;
pub use not_found::NotFoundPage;
pub use precession::PrecessionPage;
