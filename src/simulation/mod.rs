pub mod states;
pub mod params;
pub mod spring;
pub mod bezier;
pub mod driver;
pub mod scenario;
