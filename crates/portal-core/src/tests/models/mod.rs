mod identity;
mod innovation;
mod role;
