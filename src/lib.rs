pub mod app;
pub mod days;
pub mod items;
pub mod util;
