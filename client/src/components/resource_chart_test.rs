use super::*;

#[test]
fn series_label_replaces_underscores() {
    assert_eq!(series_label("cpu_usage"), "cpu usage");
    assert_eq!(series_label("network_out"), "network out");
    assert_eq!(series_label("load"), "load");
}
