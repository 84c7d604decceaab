use php_builders_codegen::Indent;

use super::Printer;

/// Nette layout: tabs, two blank lines between members.
#[derive(Debug, Clone, Copy, Default)]
pub struct NettePrinter;

impl Printer for NettePrinter {
    fn indent(&self) -> Indent {
        Indent::NETTE
    }

    fn lines_between_methods(&self) -> usize {
        2
    }
}
