use super::*;

#[test]
fn stored_flag_decodes() {
    assert_eq!(decode_entry::<bool>(Some("true")), Some(true));
}

#[test]
fn missing_or_corrupt_entry_is_absent() {
    assert_eq!(decode_entry::<bool>(None), None);
    assert_eq!(decode_entry::<bool>(Some("{not json")), None);
    assert_eq!(decode_entry::<u16>(Some("\"8006\"")), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn nothing_persists_without_a_browser() {
    assert!(!save_json("nexops.sidebar.collapsed", &true));
    assert_eq!(load_json::<bool>("nexops.sidebar.collapsed"), None);
}
