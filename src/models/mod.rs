// Module exports for models

pub mod settings;
pub mod style;
pub mod template;
