mod app;
pub mod diagram;
mod eccentricity_panel;
mod energy_bars;
mod nav_bar;
mod precession_panel;
mod tilt_panel;
mod trend_chart;
mod trend_panel;

pub use app::App;
pub use eccentricity_panel::EccentricityPanel;
pub use energy_bars::{Bar, EnergyBars};
pub use nav_bar::NavBar;
pub use precession_panel::PrecessionPanel;
pub use tilt_panel::TiltPanel;
pub use trend_chart::TrendChart;
pub use trend_panel::TrendPanel;
