//! Cohesion-ranked unit selection and rendering
//!
//! Units are ranked by total cohesion, the top fraction is kept, and the
//! kept units are restored to document order before rendering.

use std::cmp::Ordering;

use crate::types::{Granularity, TextUnit};

/// Indices of the `keep` most cohesive units, in document order
///
/// Units without an assigned cohesion rank last. Ties keep the earlier unit.
pub fn select_units(units: &[TextUnit], keep: usize) -> Vec<usize> {
    let mut ranked: Vec<&TextUnit> = units.iter().collect();
    ranked.sort_by(|a, b| {
        let ca = a.cohesion.unwrap_or(f64::NEG_INFINITY);
        let cb = b.cohesion.unwrap_or(f64::NEG_INFINITY);
        cb.partial_cmp(&ca)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    let mut selected: Vec<usize> = ranked.iter().take(keep).map(|u| u.index).collect();
    selected.sort_unstable();
    selected
}

/// Render selected units
///
/// Paragraphs are separated by a blank line. In sentence mode the first
/// kept sentence is followed by a blank line and the rest by single
/// newlines.
pub fn render(units: &[TextUnit], selected: &[usize], granularity: Granularity) -> String {
    let texts: Vec<&str> = selected
        .iter()
        .filter_map(|&i| units.iter().find(|u| u.index == i))
        .map(|u| u.text.as_str())
        .collect();

    match granularity {
        Granularity::Paragraph => texts.join("\n\n"),
        Granularity::Sentence => match texts.split_first() {
            Some((first, rest)) => format!("{first}\n\n{}", rest.join("\n")),
            None => String::new(),
        },
    }
}
