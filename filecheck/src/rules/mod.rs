mod next;
mod not;
mod plain;

pub use self::next::CheckNext;
pub use self::not::CheckNot;
pub use self::plain::CheckPlain;

use std::fmt;

use crate::common::{Check, Directive, ParseResult, SourceLocation, SourceSpan};

/// The behavior shared by every kind of directive.
///
/// Matching is not part of this trait, as each kind searches a different
/// shape of input: see the inherent `apply` method of each rule.
pub trait Rule: fmt::Debug + fmt::Display {
    fn kind(&self) -> Check;

    /// The location of the (first) line this rule was parsed from
    fn location(&self) -> &SourceLocation;

    fn span(&self) -> SourceSpan;

    /// Enforce the ordering constraints of this kind of rule over the
    /// complete sequence of directives parsed from a check file.
    fn validate(directives: &[Directive]) -> ParseResult<()>
    where
        Self: Sized;
}
