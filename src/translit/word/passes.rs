//! Post-passes over a tokenized word
//!
//!     The passes run in a fixed order, each over the whole fragment list:
//!
//!         1. [absorb_god_names]: `°D°30` spells a deity, so the numeral after a god
//!            determinative is rebuilt as a Sumerogram.
//!         2. [relocate_text_evaluations]: evaluations never stay on a gloss; adjacent
//!            evaluations merge; a determinative takes over a leading evaluation of
//!            the fragment after it.
//!         3. [merge_collections]: syllabic runs and Sumerograms collect the glosses
//!            and same-kind runs that follow them.
//!         4. [thread_positions]: the erasure state is folded over every split of
//!            every breakdown, members included.
//!
//!     Finally the word status absorbs the statuses of all remaining fragments.

use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::config::TranslitConfig;
use crate::translit::escape::escape;
use crate::translit::fragment::Fragment;
use crate::translit::slice::Position;
use crate::translit::status::{Status, StatusCode, StatusLevel};

/// Run every pass and collect fragment diagnostics into `status`.
pub fn run(fragments: &mut Vec<Fragment>, config: &TranslitConfig, status: &mut Status) {
    absorb_god_names(fragments, config);
    relocate_text_evaluations(fragments);
    merge_collections(fragments);
    let (_, threading) = thread_positions(fragments);

    for fragment in fragments.iter() {
        status.absorb(fragment.status());
    }
    status.absorb(&threading);
}

pub fn absorb_god_names(fragments: &mut [Fragment], config: &TranslitConfig) {
    for i in 1..fragments.len() {
        let is_god_name = fragments[i - 1]
            .as_breakdown()
            .filter(|b| b.kind() == BreakdownType::Determinative)
            .is_some_and(|b| config.is_god_name(&b.plain_text()));
        if !is_god_name {
            continue;
        }
        let Some(number) = fragments[i]
            .as_breakdown()
            .filter(|b| b.kind() == BreakdownType::Number)
        else {
            continue;
        };
        if !number.integer().is_some_and(|n| config.is_god_number(n)) {
            continue;
        }

        let text = escape(number.raw_text());
        tracing::trace!("God number '{}' becomes a Sumerogram", number.raw_text());
        let mut rebuilt = Breakdown::build(BreakdownType::Sumerogram, &text, false);
        if let Some(sumerogram) = rebuilt.pop() {
            fragments[i] = Fragment::from(sumerogram);
        }
    }
}

pub fn relocate_text_evaluations(fragments: &mut Vec<Fragment>) {
    let mut i = 0;
    while i < fragments.len() {
        let Some(kind) = fragments[i].as_breakdown().map(Breakdown::kind) else {
            i += 1;
            continue;
        };

        if kind == BreakdownType::Glossing {
            let evaluations = match fragments[i].as_breakdown_mut() {
                Some(gloss) => gloss.take_text_evaluations(),
                None => Vec::new(),
            };
            if !evaluations.is_empty() {
                match fragments.get_mut(i + 1).and_then(Fragment::as_breakdown_mut) {
                    Some(next) => next.prepend_text_evaluations(evaluations),
                    None => fragments.insert(
                        i + 1,
                        Fragment::from(Breakdown::from_text_evaluations(evaluations)),
                    ),
                }
            }
            i += 1;
            continue;
        }

        if let Some(breakdown) = fragments[i].as_breakdown_mut() {
            breakdown.normalize_text_evaluations();
        }
        if kind == BreakdownType::Determinative {
            let leading = fragments
                .get_mut(i + 1)
                .and_then(Fragment::as_breakdown_mut)
                .and_then(Breakdown::take_leading_text_evaluation);
            if let (Some(evaluation), Some(determinative)) =
                (leading, fragments[i].as_breakdown_mut())
            {
                determinative.push_text_evaluation(evaluation);
                determinative.normalize_text_evaluations();
            }
        }
        i += 1;
    }
}

pub fn merge_collections(fragments: &mut Vec<Fragment>) {
    let mut merged: Vec<Fragment> = Vec::with_capacity(fragments.len());
    let mut open = false;

    for fragment in fragments.drain(..) {
        if open {
            let head_kind = merged.last().and_then(Fragment::breakdown_type);
            let joins = match fragment.breakdown_type() {
                Some(BreakdownType::Glossing) => true,
                Some(kind) => kind.is_collectable() && Some(kind) == head_kind,
                None => false,
            };
            if joins {
                if let (Some(head), Fragment::Breakdown(member)) = (
                    merged.last_mut().and_then(Fragment::as_breakdown_mut),
                    fragment,
                ) {
                    head.absorb(member);
                }
                continue;
            }
        }
        open = fragment
            .breakdown_type()
            .is_some_and(BreakdownType::is_collectable);
        merged.push(fragment);
    }

    *fragments = merged;
}

/// Fold the erasure state over all breakdowns. Returns the final position and a
/// status that reports an erasure left open.
pub fn thread_positions(fragments: &mut [Fragment]) -> (Position, Status) {
    let position = fragments
        .iter_mut()
        .filter_map(Fragment::as_breakdown_mut)
        .fold(Position::Initial, |position, breakdown| breakdown.thread(position));

    let mut status = Status::new();
    if position != Position::Initial {
        status.add(
            StatusLevel::Info,
            StatusCode::Required,
            "missed final erasure marker",
        );
    }
    (position, status)
}
