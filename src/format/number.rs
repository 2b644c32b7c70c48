/// Shortest round-trip rendering of a float, with `-0` shown as `0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Four decimal places, as used for quadratic roots.
pub fn fixed4(value: f64) -> String {
    let rendered = format!("{value:.4}");
    if rendered == "-0.0000" {
        "0.0000".to_string()
    } else {
        rendered
    }
}
