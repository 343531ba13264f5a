// Service module exports

pub mod render;
pub mod settings;
