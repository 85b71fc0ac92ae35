//! Marker tag extraction
//!
//! Tags are cut out of the raw word before normalization, so their content is kept
//! verbatim and nothing inside them is classified. A sign tag listing several signs
//! separated by spaces yields one marker per sign.

use super::Piece;
use crate::translit::alphabet::MARKER_TAG;
use crate::translit::fragment::{Fragment, Marker, MarkerKind};
use crate::translit::status::Status;

pub fn extract(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in MARKER_TAG.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(kind) = MarkerKind::from_tag(&caps[1]) else {
            continue;
        };
        if whole.start() > last {
            pieces.push(Piece::Text(text[last..whole.start()].to_string()));
        }
        last = whole.end();

        let raw_text = whole.as_str().to_string();
        let content = caps[2].to_string();
        tracing::trace!("Marker tag {} with '{}'", kind.tag(), content);

        if kind == MarkerKind::Sign && content.trim().contains(' ') {
            for sign in content.split_whitespace() {
                pieces.push(marker(kind, sign.to_string(), format!("{{S:{sign}}}")));
            }
        } else {
            pieces.push(marker(kind, content, raw_text));
        }
    }
    if last < text.len() {
        pieces.push(Piece::Text(text[last..].to_string()));
    }
    pieces
}

fn marker(kind: MarkerKind, content: String, raw_text: String) -> Piece {
    Piece::Fragment(Fragment::Marker(Marker {
        kind,
        content,
        raw_text,
        status: Status::new(),
    }))
}
