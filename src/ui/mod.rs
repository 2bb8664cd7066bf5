pub mod controller;

pub use controller::ViewController;
