pub mod game;
pub mod info;
pub mod memory;
pub mod path;
pub mod profile;
pub mod trainer;
