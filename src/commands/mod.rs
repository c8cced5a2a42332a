pub mod compute;
pub mod hello;
pub mod print;
pub mod save;
pub mod surface;
pub mod title;
