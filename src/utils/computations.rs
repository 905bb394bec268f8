/// Squared Euclidean distance between two points of the same dimension
pub fn distance_squared(coord1: &[f64], coord2: &[f64]) -> f64 {
    debug_assert_eq!(coord1.len(), coord2.len());
    coord1
        .iter()
        .zip(coord2)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}

/// Euclidean distance between two points of the same dimension
pub fn distance(coord1: &[f64], coord2: &[f64]) -> f64 {
    distance_squared(coord1, coord2).sqrt()
}

/// Format coordinates as a bracketed list, e.g. `[1, -0.5, 2.25]`
pub fn format_coords(coords: &[f64]) -> String {
    let items: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
