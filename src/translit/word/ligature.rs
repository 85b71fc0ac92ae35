//! Ligature extraction: runs of spaces or `‿` join two signs written as one.

use super::Piece;
use crate::translit::alphabet::LIGATURE_RUN;
use crate::translit::fragment::{Fragment, Ligature};
use crate::translit::status::Status;

pub fn extract(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for found in LIGATURE_RUN.find_iter(text) {
        if found.start() > last {
            pieces.push(Piece::Text(text[last..found.start()].to_string()));
        }
        pieces.push(Piece::Fragment(Fragment::Ligature(Ligature {
            raw_text: found.as_str().to_string(),
            status: Status::new(),
        })));
        last = found.end();
    }
    if last < text.len() {
        pieces.push(Piece::Text(text[last..].to_string()));
    }
    pieces
}
