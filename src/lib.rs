pub mod assets;
pub mod audio;
pub mod camera;
pub mod compute;
pub mod config;
pub mod container;
pub mod effects;
pub mod entities;
pub mod input;
pub mod lighting;
pub mod maps;
pub mod physics;
pub mod spatial;
pub mod tuning;
