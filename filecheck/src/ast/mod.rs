mod directive;
mod file;
mod pattern;

pub use self::directive::{Check, Directive};
pub use self::file::CheckFile;
pub use self::pattern::CheckPattern;
