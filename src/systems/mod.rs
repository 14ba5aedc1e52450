pub mod camera;
pub mod cities;
pub mod earth;
pub mod stars;
pub mod time;
pub mod ui;
