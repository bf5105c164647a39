/// A parser for one section of a statement (header metadata, transaction table).
pub trait SectionParser {
    type Output;

    fn parse(pages: &[&str]) -> Self::Output;

    fn is_supported(page: &str) -> bool;
}
