mod checker;
mod context;
mod input;
mod result;

pub use self::checker::FileChecker;
pub use self::context::MatchContext;
pub use self::input::InputFile;
pub use self::result::{MatchInfo, TestResult};
