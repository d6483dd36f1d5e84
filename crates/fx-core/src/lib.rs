pub mod ambient_web;
pub mod color;
pub mod constants;
pub mod entity;
pub mod entry;
pub mod ripple;
pub mod scheduler;
pub mod star_trail;
pub mod state;
pub mod store;
pub mod surface;
pub mod theme;

pub use ambient_web::*;
pub use color::*;
pub use entity::*;
pub use entry::*;
pub use ripple::{Ripple, RippleBurst, RippleConfig, RippleShape};
pub use scheduler::*;
pub use star_trail::*;
pub use state::*;
pub use store::*;
pub use surface::*;
pub use theme::*;
