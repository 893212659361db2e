use super::*;

#[test]
fn opacity_style_formats_plain_numbers() {
    assert_eq!(opacity_style(1.0), "1");
    assert_eq!(opacity_style(0.8), "0.8");
}

#[test]
fn opacity_style_clamps_out_of_range() {
    assert_eq!(opacity_style(1.7), "1");
    assert_eq!(opacity_style(-0.2), "0");
}

#[test]
fn parse_px_reads_computed_lengths() {
    assert_eq!(parse_px("600px"), Some(600.0));
    assert_eq!(parse_px(" 848.5px "), Some(848.5));
}

#[test]
fn parse_px_rejects_other_units() {
    assert_eq!(parse_px("auto"), None);
    assert_eq!(parse_px("12em"), None);
    assert_eq!(parse_px("px"), None);
}
