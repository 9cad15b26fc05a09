mod checker;
mod document;
mod error;
mod loader;
mod profile;
mod render;
mod run;

pub use self::run::run;
