pub mod identity;
pub mod innovation;
pub mod new_innovation;
pub mod role;
