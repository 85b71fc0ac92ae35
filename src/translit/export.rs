//! Markup export
//!
//!     Renders tokenized words into the inline markup the edition format uses:
//!
//!         Sumerogram          <sGr>…</sGr>
//!         Akkadogram          <aGr>…</aGr>
//!         Determinative       <d>…</d>
//!         Glossing            <materlect>…</materlect>
//!         Number, fraction    <num>…</num>
//!         Undefined °…°       <undefined c="…"/>
//!         Marker tags         <note type="…" c="…"/>
//!
//!     Syllabic runs, delimiters and ligatures are written inline. A gap is written as
//!     its text. A language change produces nothing itself; the next word carries it
//!     as the `lg` attribute of its `<w>` element.
//!
//!     Inside a fragment the delimiters become empty milestone elements (`<del_in/>`,
//!     `<laes_fin/>`, `<ras_in/>`, `<add_fin/>`), evaluations become `<corr c="…"/>` and
//!     subscripts `<subscr c="…"/>`. Collections are expanded again, each member with
//!     its own element.

use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::escape::{display, unescape};
use crate::translit::fragment::Fragment;
use crate::translit::slice::{Metadata, MetadataKind, Position, Slice};
use crate::translit::split::Split;
use crate::translit::word::ParsedWord;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render one word as a `<w>` element. `@` words render as nothing.
pub fn export_word(word: &ParsedWord) -> String {
    if matches!(word.fragments(), [Fragment::LanguageChange(_)]) {
        return String::new();
    }

    let mut out = String::from("<w");
    if let Some(language) = word.language_change() {
        out.push_str(&format!(" lg=\"{}\"", language.code()));
    }
    out.push('>');
    for fragment in word.fragments() {
        export_fragment(fragment, &mut out);
    }
    out.push_str("</w>");
    out
}

/// Render a sequence of words separated by spaces, skipping `@` words.
pub fn export_words(words: &[ParsedWord]) -> String {
    words
        .iter()
        .map(export_word)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn export_fragment(fragment: &Fragment, out: &mut String) {
    match fragment {
        Fragment::LanguageChange(_) => {}
        Fragment::Gap(gap) => out.push_str(&encode_text(&gap.raw_text)),
        Fragment::Ligature(ligature) => out.push_str(&encode_text(&ligature.raw_text)),
        Fragment::Marker(marker) => {
            out.push_str(&format!(
                "<note type=\"{}\" c=\"{}\"/>",
                encode_double_quoted_attribute(marker.kind.tag()),
                encode_double_quoted_attribute(&marker.content)
            ));
        }
        Fragment::FractionNumber(fraction) => {
            let text = match fraction.glyph {
                Some(glyph) => glyph.to_string(),
                None => format!("{}/{}", fraction.numerator, fraction.denominator),
            };
            out.push_str(&format!("<num>{}</num>", encode_text(&text)));
        }
        Fragment::NotImplemented(unknown) => out.push_str(&encode_text(&unknown.raw_text)),
        Fragment::Breakdown(breakdown) => export_breakdown(breakdown, out),
    }
}

fn element(kind: BreakdownType) -> Option<&'static str> {
    match kind {
        BreakdownType::Sumerogram => Some("sGr"),
        BreakdownType::Akkadogram => Some("aGr"),
        BreakdownType::Determinative => Some("d"),
        BreakdownType::Glossing => Some("materlect"),
        BreakdownType::Number => Some("num"),
        BreakdownType::Basic
        | BreakdownType::Delimiter
        | BreakdownType::UndefinedDegreeSign
        | BreakdownType::NotImplemented => None,
    }
}

fn export_breakdown(breakdown: &Breakdown, out: &mut String) {
    if breakdown.kind() == BreakdownType::UndefinedDegreeSign {
        out.push_str(&format!(
            "<undefined c=\"{}\"/>",
            encode_double_quoted_attribute(breakdown.raw_text())
        ));
    } else {
        let element = element(breakdown.kind());
        if let Some(name) = element {
            out.push_str(&format!("<{name}>"));
        }
        for split in breakdown.splits() {
            export_split(split, out);
        }
        if let Some(name) = element {
            out.push_str(&format!("</{name}>"));
        }
    }

    for member in breakdown.members() {
        export_breakdown(member, out);
    }
}

fn export_split(split: &Split, out: &mut String) {
    if let Some(separator) = split.separator() {
        out.push(separator.as_char());
    }
    for slice in split.main_part() {
        export_slice(slice, out);
    }
    if !split.subscript().is_empty() {
        let subscript: String = split.subscript().iter().map(Slice::plain_text).collect();
        out.push_str(&format!(
            "<subscr c=\"{}\"/>",
            encode_double_quoted_attribute(&subscript)
        ));
    }
}

fn export_slice(slice: &Slice, out: &mut String) {
    match slice {
        Slice::Content(text) => out.push_str(&encode_text(&display(text))),
        Slice::Metadata(metadata) => out.push_str(&milestone(metadata)),
        Slice::TextEvaluation(text) => out.push_str(&format!(
            "<corr c=\"{}\"/>",
            encode_double_quoted_attribute(&unescape(text))
        )),
        Slice::Surplus(text) => out.push_str(&format!(
            "<surplus>{}</surplus>",
            encode_text(&display(text))
        )),
    }
}

fn milestone(metadata: &Metadata) -> String {
    let name = match metadata.kind {
        MetadataKind::Deletum => "del",
        MetadataKind::Laedi => "laes",
        MetadataKind::Deleri => "ras",
        MetadataKind::Add => "add",
        MetadataKind::Undefined => return encode_text(&metadata.symbol.to_string()).into_owned(),
    };
    let side = match metadata.position {
        Position::Initial => "in",
        Position::End => "fin",
        Position::Unknown => return encode_text(&metadata.symbol.to_string()).into_owned(),
    };
    format!("<{name}_{side}/>")
}
