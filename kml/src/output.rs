use anyhow::Result;

use abstutil::Timer;

use crate::Coordinate;

/// `[<latitude>, <longitude>], // <name>`, with the name written verbatim.
pub fn format_coordinate(pt: &Coordinate) -> String {
    format!(
        "[{}, {}], // {}",
        fmt_f64(pt.latitude),
        fmt_f64(pt.longitude),
        pt.name
    )
}

/// One line per coordinate, each ending in a newline.
pub fn format_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|pt| format!("{}\n", format_coordinate(pt)))
        .collect()
}

/// Replaces whatever is at `path`.
pub fn write_coordinates(path: &str, coordinates: &[Coordinate], timer: &mut Timer) -> Result<()> {
    timer.start(format!("write {}", path));
    let result = abstio::write_file(path, &format_coordinates(coordinates));
    timer.stop(format!("write {}", path));
    result?;

    timer.note(format!("Written to {}", path));
    Ok(())
}

/// The shortest text that parses back to the same number, always with a decimal point or an
/// exponent, so `2.0` stays `2.0`. Exponents are signed and at least two digits (`1e-05`,
/// `1e+16`), and non-finite values are `nan`, `inf`, and `-inf`.
pub fn fmt_f64(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already gives the shortest round-trip form and switches to an exponent in the same
    // ranges; only the exponent itself is written differently.
    let debug = format!("{:?}", x);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}
