//! The outer parse loop.

use tracing::debug;

use super::ParseOutcome;
use super::accumulator::PairingBuilder;
use super::classifier::{classify_line, is_pairing_boundary};
use super::warning::ParseWarning;

/// Number of banner lines at the top of every pairing file, discarded
/// after blank lines have been filtered out.
const HEADER_LINES: usize = 3;

/// Parse the text lines of a pairing document into completed pairings.
///
/// Blank lines are dropped, the fixed banner is skipped, and every
/// remaining line is offered to the classifier in order. A boundary line
/// (first character `=`) completes the current pairing; `limit` stops the
/// parse once that many pairings have been completed.
///
/// A trailing block that the document never closed with a boundary line is
/// omitted from the results and reported as an
/// [`ParseWarning::IncompleteTrailingPairing`].
pub fn parse_pairing_file<S: AsRef<str>>(lines: &[S], limit: Option<usize>) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut builder = PairingBuilder::new();

    let body = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .skip(HEADER_LINES);

    for line in body {
        if limit.is_some_and(|k| outcome.pairings.len() >= k) {
            debug!(limit = ?limit, "pairing limit reached, stopping early");
            return outcome;
        }

        if is_pairing_boundary(line) {
            let completed = std::mem::replace(&mut builder, PairingBuilder::new());
            outcome.pairings.push(completed.finish());
            continue;
        }

        classify_line(line, &mut builder, outcome.pairings.len(), &mut outcome.warnings);
    }

    if !builder.is_untouched() {
        let pairing = builder.label(outcome.pairings.len());
        debug!(%pairing, "document ended before a boundary line; dropping trailing block");
        outcome
            .warnings
            .push(ParseWarning::IncompleteTrailingPairing { pairing });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "==============================";

    fn header() -> Vec<String> {
        vec!["BANNER 1".into(), "BANNER 2".into(), "BANNER 3".into()]
    }

    fn block(number: u32, flights: usize, with_layover: bool) -> Vec<String> {
        let mut lines = vec![format!(
            "...OPERATES/OPER- T{number} ... 15APR - 25APR"
        )];
        for i in 0..flights {
            if with_layover {
                lines.push(format!("1 A320 {} YYZ 0815 YUL 1015 200 500 2519", 100 + i));
                lines.push("  Le Centre Sheraton Montreal Ho  ".to_string());
            } else {
                lines.push(format!("1 A320 {} YYZ 0815 BGI 1315 500", 100 + i));
            }
        }
        lines.push("BLOCK/H-VOL 8000".to_string());
        lines.push("TAFB/PTEB 9035".to_string());
        lines.push(BOUNDARY.to_string());
        lines
    }

    fn document(blocks: &[Vec<String>]) -> Vec<String> {
        let mut lines = header();
        for b in blocks {
            lines.extend(b.iter().cloned());
        }
        lines
    }

    #[test]
    fn end_to_end_single_pairing() {
        let lines = vec![
            "H1".to_string(),
            "H2".to_string(),
            "H3".to_string(),
            "...OPERATES/OPER- T5001 ... 15APR - 25APR".to_string(),
            "1 A320 100 YYZ 0815 BGI 1315 500".to_string(),
            "=END".to_string(),
        ];

        let outcome = parse_pairing_file(&lines, None);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.pairings.len(), 1);

        let p = &outcome.pairings[0];
        assert_eq!(p.pairing_number, "T5001");
        assert_eq!(p.operating_dates, "15APR - 25APR");
        assert_eq!(p.layovers, 0);
        assert_eq!(p.flights.len(), 1);

        let f = &p.flights[0];
        assert_eq!(f.departure.as_str(), "YYZ");
        assert_eq!(f.arrival.as_str(), "BGI");
        assert_eq!(f.departure_time.to_string(), "0815");
        assert_eq!(f.arrival_time.to_string(), "1315");
        assert_eq!(f.flight_time, "500");
        assert_eq!(
            f.days_of_week.iter().map(|d| d.number()).collect::<Vec<_>>(),
            vec![1]
        );
        assert!(!f.has_layover);
    }

    #[test]
    fn layover_hotel_attaches_across_intervening_lines() {
        let lines = vec![
            "H1".to_string(),
            "H2".to_string(),
            "H3".to_string(),
            "...OPERATES/OPER- T5002 ... 01MAY - 09MAY".to_string(),
            "1 A320 100 YYZ 0815 YUL 1015 200 500 2519".to_string(),
            "DAY ONE NOTES".to_string(),
            "  Le Centre Sheraton Montreal Ho  ".to_string(),
            BOUNDARY.to_string(),
        ];

        let outcome = parse_pairing_file(&lines, None);
        let p = &outcome.pairings[0];
        assert_eq!(p.layovers, 1);
        let layover = p.flights[0].layover.as_ref().unwrap();
        assert_eq!(layover.hotel, "Le Centre Sheraton Montreal Ho");
        assert_eq!(layover.duration, "2519");
    }

    #[test]
    fn banner_is_skipped_even_when_it_looks_meaningful() {
        // The first three non-blank lines are always discarded; a flight
        // line in the banner must not produce a record.
        let lines = vec![
            "1 A320 100 YYZ 0815 BGI 1315 500".to_string(),
            "H2".to_string(),
            "H3".to_string(),
            "1 A320 200 YUL 0900 YYZ 1030 130".to_string(),
            BOUNDARY.to_string(),
        ];

        let outcome = parse_pairing_file(&lines, None);
        assert_eq!(outcome.pairings.len(), 1);
        assert_eq!(outcome.pairings[0].flights.len(), 1);
        assert_eq!(outcome.pairings[0].flights[0].flight_number, "200");
    }

    #[test]
    fn blank_lines_are_filtered_before_the_banner_is_counted() {
        let lines = vec![
            "".to_string(),
            "H1".to_string(),
            "".to_string(),
            "H2".to_string(),
            "H3".to_string(),
            "1 A320 100 YYZ 0815 BGI 1315 500".to_string(),
            BOUNDARY.to_string(),
        ];

        let outcome = parse_pairing_file(&lines, None);
        assert_eq!(outcome.pairings.len(), 1);
        assert_eq!(outcome.pairings[0].flights.len(), 1);
    }

    #[test]
    fn boundary_count_determines_pairing_count() {
        let doc = document(&[block(5001, 2, false), block(5002, 1, true), block(5003, 3, false)]);
        let outcome = parse_pairing_file(&doc, None);

        assert_eq!(outcome.pairings.len(), 3);
        assert_eq!(outcome.pairings[0].pairing_number, "T5001");
        assert_eq!(outcome.pairings[1].pairing_number, "T5002");
        assert_eq!(outcome.pairings[2].pairing_number, "T5003");
    }

    #[test]
    fn flights_preserve_document_order() {
        let doc = document(&[block(5001, 3, false)]);
        let outcome = parse_pairing_file(&doc, None);

        let numbers: Vec<_> = outcome.pairings[0]
            .flights
            .iter()
            .map(|f| f.flight_number.clone())
            .collect();
        assert_eq!(numbers, vec!["100", "101", "102"]);
    }

    #[test]
    fn unterminated_trailing_block_is_dropped_with_a_warning() {
        let mut doc = document(&[block(5001, 1, false)]);
        doc.push("...OPERATES/OPER- T5002 ... 01MAY - 09MAY".to_string());
        doc.push("1 A320 100 YYZ 0815 BGI 1315 500".to_string());
        // no boundary after the second block

        let outcome = parse_pairing_file(&doc, None);
        assert_eq!(outcome.pairings.len(), 1);
        assert_eq!(
            outcome.warnings,
            vec![ParseWarning::IncompleteTrailingPairing {
                pairing: "T5002".into()
            }]
        );
    }

    #[test]
    fn clean_ending_produces_no_trailing_warning() {
        let doc = document(&[block(5001, 1, false)]);
        let outcome = parse_pairing_file(&doc, None);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn limit_truncates_to_a_prefix() {
        let doc = document(&[block(5001, 1, false), block(5002, 1, false), block(5003, 1, false)]);

        let unbounded = parse_pairing_file(&doc, None);
        let bounded = parse_pairing_file(&doc, Some(2));

        assert_eq!(bounded.pairings.len(), 2);
        assert_eq!(bounded.pairings[..], unbounded.pairings[..2]);
    }

    #[test]
    fn limit_larger_than_document_returns_everything() {
        let doc = document(&[block(5001, 1, false), block(5002, 1, false)]);
        let outcome = parse_pairing_file(&doc, Some(10));
        assert_eq!(outcome.pairings.len(), 2);
    }

    #[test]
    fn limit_zero_returns_nothing() {
        let doc = document(&[block(5001, 1, false)]);
        let outcome = parse_pairing_file(&doc, Some(0));
        assert!(outcome.pairings.is_empty());
    }

    #[test]
    fn early_stop_does_not_warn_about_remaining_content() {
        let mut doc = document(&[block(5001, 1, false), block(5002, 1, false)]);
        doc.push("1 A320 100 YYZ 0815 BGI 1315 500".to_string());

        let outcome = parse_pairing_file(&doc, Some(1));
        assert_eq!(outcome.pairings.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn empty_document_yields_nothing() {
        let outcome = parse_pairing_file(&Vec::<String>::new(), None);
        assert!(outcome.pairings.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn layover_invariant_holds() {
        let doc = document(&[block(5001, 2, true), block(5002, 3, false)]);
        let outcome = parse_pairing_file(&doc, None);

        for p in &outcome.pairings {
            assert_eq!(
                p.layovers as usize,
                p.flights.iter().filter(|f| f.has_layover).count()
            );
        }
    }
}
