use crate::common::*;

/// The validated, ordered sequence of directives parsed from a check file.
///
/// The order in which directives appear in the check file is the order in
/// which they are enforced against the checked output.
#[derive(Debug, Clone)]
pub struct CheckFile {
    name: FileName,
    directives: Vec<Directive>,
}
impl CheckFile {
    /// Construct a [CheckFile] from `directives`, validating them as a set.
    ///
    /// Returns an error if there are no directives, or if any directive violates
    /// the ordering rules of its kind.
    pub fn new(name: FileName, directives: Vec<Directive>) -> ParseResult<Self> {
        let file = Self { name, directives };
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> ParseResult<()> {
        if self.directives.is_empty() {
            return Err(ParserError::Empty {
                file: self.name.clone(),
            });
        }

        for kind in Check::ALL {
            if !self.directives.iter().any(|d| d.kind() == kind) {
                continue;
            }
            log::debug!("applying {kind} validation rules");
            match kind {
                Check::Plain => CheckPlain::validate(&self.directives)?,
                Check::Next => CheckNext::validate(&self.directives)?,
                Check::Not => CheckNot::validate(&self.directives)?,
            }
        }

        Ok(())
    }

    /// The name of the check file these directives were parsed from
    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Directive> {
        self.directives.iter()
    }
}
impl<'a> IntoIterator for &'a CheckFile {
    type Item = &'a Directive;
    type IntoIter = core::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
