pub mod comment;
pub mod diagnostics;
mod input;
pub mod text;

pub use self::input::Input;

pub type StaticCow<T> = std::borrow::Cow<'static, T>;
