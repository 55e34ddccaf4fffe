//! Parser for the compact per-haplotype mutation notation.
//!
//! A notation starts with the position of the mutation followed by the
//! operation:
//!
//! - `10A>T`: substitution of `A` by `T` at position 10
//! - `5del{3}`: deletion of three residues starting after position 5
//! - `5del{ins}`: deletion identified by name rather than by length
//!
//! Anything else is not a mutation this crate can place in a row, and parsing
//! returns `None` instead of an error.
use crate::consts::{DELETION_ALLELE, DELETION_OPERATOR, SUBSTITUTION_OPERATOR};
use crate::models::Diff;

///
/// Parse one mutation notation into a [`Diff`].
///
/// # Arguments
/// - notation: the mutation, e.g. `10A>T` or `5del{3}`
/// - reference_sequence: protein sequence used to look up the residue at the
///   position of a deletion
///
/// # Returns
/// - `None` when the notation has no leading position, no known operator, or
///   points outside the reference sequence
///
pub fn parse_diff(notation: &str, reference_sequence: &str) -> Option<Diff> {
    let digits = notation.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let (pos, remainder) = notation.split_at(digits);
    let pos = pos.parse::<u64>().ok()?;

    if remainder.contains(SUBSTITUTION_OPERATOR) {
        parse_substitution(pos, remainder)
    } else if remainder.contains(DELETION_OPERATOR) {
        parse_deletion(pos, remainder, reference_sequence)
    } else {
        None
    }
}

fn parse_substitution(pos: u64, remainder: &str) -> Option<Diff> {
    let (ref_allele, alt) = split_on_single(remainder, SUBSTITUTION_OPERATOR)?;

    Some(Diff {
        pos,
        ref_allele: ref_allele.to_string(),
        alt: Some(alt.to_string()),
        info: Some(String::new()),
    })
}

fn parse_deletion(pos: u64, remainder: &str, reference_sequence: &str) -> Option<Diff> {
    let (_, payload) = split_on_single(remainder, DELETION_OPERATOR)?;

    let index = usize::try_from(pos).ok()?;
    let ref_allele = reference_sequence.chars().nth(index)?;

    let payload = payload.trim_matches('{').trim_matches('}');
    let info = match payload.trim().parse::<i64>() {
        Ok(length) => {
            let end = i64::try_from(pos).ok()?.checked_add(length)?;
            format!("SVTYPE=DEL;END={}", end)
        }
        // a length too large to place is not a name either
        Err(_) if is_integer(payload.trim()) => return None,
        Err(_) => format!("SVTYPE=DEL; SVID={}del{}", pos, payload),
    };

    Some(Diff {
        pos,
        ref_allele: ref_allele.to_string(),
        alt: Some(DELETION_ALLELE.to_string()),
        info: Some(info),
    })
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Split on `operator`, refusing notations where it shows up more than once.
fn split_on_single<'a>(text: &'a str, operator: &str) -> Option<(&'a str, &'a str)> {
    let (head, tail) = text.split_once(operator)?;
    if tail.contains(operator) {
        return None;
    }
    Some((head, tail))
}
