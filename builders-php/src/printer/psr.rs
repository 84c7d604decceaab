use php_builders_codegen::Indent;

use super::Printer;

/// PSR-12 layout: four spaces, one blank line between members.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsrPrinter;

impl Printer for PsrPrinter {
    fn indent(&self) -> Indent {
        Indent::PSR
    }

    fn lines_between_methods(&self) -> usize {
        1
    }
}
