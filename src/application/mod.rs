pub mod monitor;
pub mod pipeline;
pub mod profiles;
pub mod screen;
