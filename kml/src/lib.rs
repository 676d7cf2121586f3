//! Pulls the position of every placemark out of a .kml file and writes them as lines that can be
//! pasted straight into a JavaScript array literal:
//!
//! ```text
//! [47.6062, -122.3321], // Seattle
//! ```

#[macro_use]
extern crate log;

use std::collections::HashSet;

use anyhow::{Context, Result};

use abstutil::{prettyprint_usize, Timer};

mod extract;
mod output;

pub use crate::extract::{extract, KML_NAMESPACE, UNKNOWN_NAME};
pub use crate::output::{fmt_f64, format_coordinate, format_coordinates, write_coordinates};

/// The position of one placemark. KML stores longitude first, but this is ordered the way it's
/// written out.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Everything scraped from one document.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub num_placemarks: usize,
    /// In document order. Placemarks without usable coordinates aren't here.
    pub coordinates: Vec<Coordinate>,
}

/// Reads and parses a .kml file. Missing files and malformed XML are errors; placemarks that
/// don't have a usable position are just skipped.
pub fn load(path: &str, timer: &mut Timer) -> Result<Extraction> {
    timer.start(format!("read {}", path));
    let bytes = abstio::slurp_file(path);
    timer.stop(format!("read {}", path));

    let raw_string = String::from_utf8(bytes?).with_context(|| format!("{} isn't UTF-8", path))?;
    extract_from_str(&raw_string, timer).with_context(|| format!("couldn't parse {}", path))
}

/// Like `load`, but for KML that's already in memory.
pub fn extract_from_str(raw_string: &str, timer: &mut Timer) -> Result<Extraction> {
    let tree = roxmltree::Document::parse(raw_string)?;

    timer.start("scrape placemarks");
    let extraction = extract(&tree);
    timer.stop("scrape placemarks");

    timer.note(format!(
        "Total placemarks: {}",
        prettyprint_usize(extraction.num_placemarks)
    ));
    timer.note(format!(
        "Total coordinates extracted: {}",
        prettyprint_usize(extraction.coordinates.len())
    ));
    Ok(extraction)
}

/// Keeps only the first coordinate at each position, comparing latitude and longitude rounded to
/// 6 decimal places. Order is otherwise preserved.
pub fn dedupe(coordinates: Vec<Coordinate>) -> Vec<Coordinate> {
    let mut seen = HashSet::new();
    coordinates
        .into_iter()
        .filter(|pt| {
            // Adding 0.0 turns -0.0 into 0.0, so the two compare as the same position
            let key = format!("{:.6},{:.6}", pt.latitude + 0.0, pt.longitude + 0.0);
            if seen.insert(key) {
                true
            } else {
                debug!("Dropping {}, it repeats an earlier position", pt.name);
                false
            }
        })
        .collect()
}

/// The whole batch job: read `input`, optionally dedupe, and replace `output` with one line per
/// coordinate. Returns what was written.
pub fn convert(
    input: &str,
    output: &str,
    dedupe_positions: bool,
    timer: &mut Timer,
) -> Result<Vec<Coordinate>> {
    let mut coordinates = load(input, timer)?.coordinates;
    if dedupe_positions {
        coordinates = dedupe(coordinates);
        timer.note(format!(
            "Total unique coordinates: {}",
            prettyprint_usize(coordinates.len())
        ));
    }
    write_coordinates(output, &coordinates, timer)?;
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(latitude: f64, longitude: f64, name: &str) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let deduped = dedupe(vec![
            pt(47.6062, -122.3321, "Seattle"),
            pt(1.0, 2.0, "Elsewhere"),
            pt(47.60620001, -122.33210004, "Seattle again"),
            pt(47.6062, -122.3321, "Seattle a third time"),
        ]);
        assert_eq!(
            deduped,
            vec![pt(47.6062, -122.3321, "Seattle"), pt(1.0, 2.0, "Elsewhere")]
        );
    }

    #[test]
    fn test_dedupe_distinct_positions() {
        let input = vec![pt(1.0, 2.0, "A"), pt(2.0, 1.0, "B"), pt(1.000001, 2.0, "C")];
        assert_eq!(dedupe(input.clone()), input);
    }

    #[test]
    fn test_dedupe_negative_zero() {
        let deduped = dedupe(vec![
            pt(0.0, 0.0, "Null Island"),
            pt(-0.0, -0.0, "Null Island, signed"),
            pt(0.0, -0.0, "Null Island, half signed"),
            pt(-0.0000001, 0.0, "Just south"),
        ]);
        assert_eq!(
            deduped,
            vec![pt(0.0, 0.0, "Null Island"), pt(-0.0000001, 0.0, "Just south")]
        );
    }

    #[test]
    fn test_malformed_xml() {
        assert!(extract_from_str("<kml><Placemark></kml>", &mut Timer::throwaway()).is_err());
    }
}
