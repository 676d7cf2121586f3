use roxmltree::{Document, Node};

use crate::{Coordinate, Extraction};

/// Placemarks, names, and coordinates are only recognized in this namespace.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
/// Used for placemarks without a name, or with a blank one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Finds every placemark in the document and keeps the ones with a parseable position.
pub fn extract(tree: &Document) -> Extraction {
    let mut placemarks = Vec::new();
    recurse(tree.root_element(), &mut placemarks);

    let mut coordinates = Vec::new();
    for placemark in &placemarks {
        let name = placemark_name(*placemark);
        match placemark_position(*placemark) {
            Some((longitude, latitude)) => coordinates.push(Coordinate {
                latitude,
                longitude,
                name,
            }),
            None => debug!("Skipping placemark {}, it has no usable coordinates", name),
        }
    }

    Extraction {
        num_placemarks: placemarks.len(),
        coordinates,
    }
}

// Pre-order, so placemarks come out in document order. The node passed in is never itself
// included.
fn recurse<'a, 'input>(node: Node<'a, 'input>, placemarks: &mut Vec<Node<'a, 'input>>) {
    for child in node.children() {
        if child.has_tag_name((KML_NAMESPACE, "Placemark")) {
            placemarks.push(child);
        }
        recurse(child, placemarks);
    }
}

/// Only a direct `<name>` child counts; names of nested features don't.
fn placemark_name(placemark: Node) -> String {
    placemark
        .children()
        .find(|n| n.has_tag_name((KML_NAMESPACE, "name")))
        .map(leading_text)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// The first `<coordinates>` anywhere inside the placemark, as (longitude, latitude).
fn placemark_position(placemark: Node) -> Option<(f64, f64)> {
    let node = placemark
        .descendants()
        .find(|n| n.has_tag_name((KML_NAMESPACE, "coordinates")))?;
    parse_pt(&leading_text(node))
}

/// The text of an element up to its first child element. Comments and processing instructions
/// are skipped over, so `1,<!-- note -->2` reads as `1,2`.
fn leading_text(node: Node) -> String {
    node.children()
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn parse_pt(input: &str) -> Option<(f64, f64)> {
    let coords: Vec<&str> = input.trim().split(',').collect();
    // Altitude, and anything else after the first two parts, is ignored. So is every point after
    // the first in a LineString.
    if coords.len() < 2 {
        return None;
    }
    Some((parse_number(coords[0])?, parse_number(coords[1])?))
}

/// Surrounding whitespace is fine, and so are underscores grouping digits (`1_000.5`). An
/// underscore anywhere else makes the number invalid.
fn parse_number(input: &str) -> Option<f64> {
    let input = input.trim();
    if !input.contains('_') {
        return input.parse::<f64>().ok();
    }

    let bytes = input.as_bytes();
    for (idx, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let before = idx.checked_sub(1).and_then(|i| bytes.get(i));
        let after = bytes.get(idx + 1);
        match (before, after) {
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {}
            _ => return None,
        }
    }
    input.replace('_', "").parse::<f64>().ok()
}
