pub mod constants;
pub mod gallery;
pub mod mapper;
pub mod parallax;
pub mod pin;
pub mod pointer;
pub mod scheduler;
pub mod scroll;
pub mod signal;
pub mod spring;
pub mod theme;
pub mod trail;

pub use constants::*;
pub use gallery::*;
pub use mapper::*;
pub use parallax::*;
pub use pin::*;
pub use pointer::*;
pub use scheduler::*;
pub use scroll::*;
pub use signal::*;
pub use spring::*;
pub use theme::*;
pub use trail::*;
