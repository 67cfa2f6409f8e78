pub mod camera;
pub mod cli;
pub mod core;
pub mod demo;
pub mod frame;
pub mod math;
pub mod window;

pub use camera::OrbitCamera;
pub use demo::BezierDemo;
pub use math::BezierCurve;
