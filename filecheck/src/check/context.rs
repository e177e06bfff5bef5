use crate::common::*;

/// The files a rule needs while matching: the check file its patterns came
/// from, for diagnostics, and the checked output being searched.
#[derive(Debug, Copy, Clone)]
pub struct MatchContext<'a> {
    match_file: &'a ArcSource,
    input: &'a InputFile,
}
impl<'a> MatchContext<'a> {
    pub fn new(match_file: &'a ArcSource, input: &'a InputFile) -> Self {
        Self { match_file, input }
    }

    #[inline(always)]
    pub fn match_file(&self) -> &'a ArcSource {
        self.match_file
    }

    #[inline(always)]
    pub fn input(&self) -> &'a InputFile {
        self.input
    }
}
