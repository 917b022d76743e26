use std::io::Write;

use log::error;

use super::{document::Document, helpers::render_document};

/// A trait, necessary for every entity that will show the document to the user.
pub trait BoardView {
    fn present(&mut self, document: &Document);
}

/// Prints the whole board to a writer every time it changes.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BoardView for TerminalView<W> {
    fn present(&mut self, document: &Document) {
        let written =
            writeln!(self.out, "{}", render_document(document)).and_then(|_| self.out.flush());
        if let Err(err) = written {
            error!("Failed to print the board: {}", err);
        }
    }
}
