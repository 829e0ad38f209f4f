use super::*;

#[test]
fn default_is_pending_without_data() {
    let state = Remote::<u32>::default();
    assert!(state.loading);
    assert!(state.is_pending());
    assert!(!state.failed());
}

#[test]
fn idle_is_not_loading() {
    let state = Remote::<u32>::idle();
    assert!(!state.loading);
    assert!(!state.is_pending());
    assert_eq!(state.data, None);
}

#[test]
fn apply_ok_stores_data_and_clears_error() {
    let mut state = Remote::<u32>::default();
    state.apply(Err(ApiError::network("offline")));
    state.apply(Ok(7));
    assert_eq!(state.data, Some(7));
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn apply_err_keeps_previous_data() {
    let mut state = Remote::<u32>::default();
    state.apply(Ok(3));
    state.apply(Err(ApiError::new(500, "INTERNAL", "boom")));
    assert_eq!(state.data, Some(3));
    assert!(state.error.is_some());
    assert!(!state.failed(), "cached data still renders");
}

#[test]
fn first_error_without_data_is_failure() {
    let mut state = Remote::<u32>::default();
    state.apply(Err(ApiError::network("offline")));
    assert!(state.failed());
    assert!(!state.is_pending());
}

#[test]
fn not_found_tracks_404_errors() {
    let mut state = Remote::<u32>::default();
    state.apply(Err(ApiError::new(404, "NOT_FOUND", "VM not found")));
    assert!(state.not_found());

    state.apply(Err(ApiError::new(500, "INTERNAL", "boom")));
    assert!(!state.not_found());
}

#[test]
fn malformed_id_rejection_counts_as_not_found() {
    let mut state = Remote::<u32>::default();
    state.apply(Err(ApiError::from_response(422, r#"{"detail":"Input should be a valid UUID"}"#)));
    assert!(state.not_found());
}

#[test]
fn items_defaults_to_empty_slice() {
    let mut state = Remote::<Vec<u32>>::default();
    assert!(state.items().is_empty());
    state.apply(Ok(vec![1, 2]));
    assert_eq!(state.items(), &[1, 2]);
}

#[test]
fn phase_walks_pending_failed_empty_ready() {
    let mut state = Remote::<Vec<u32>>::default();
    assert_eq!(state.phase(), ListPhase::Pending);

    state.apply(Err(ApiError::network("offline")));
    assert_eq!(state.phase(), ListPhase::Failed);

    state.apply(Ok(Vec::new()));
    assert_eq!(state.phase(), ListPhase::Empty);

    state.apply(Ok(vec![1]));
    assert_eq!(state.phase(), ListPhase::Ready);
}

#[test]
fn phase_keeps_cached_items_on_error() {
    let mut state = Remote::<Vec<u32>>::default();
    state.apply(Ok(vec![1, 2]));
    state.apply(Err(ApiError::network("offline")));
    assert_eq!(state.phase(), ListPhase::Ready);
}

#[test]
fn idle_list_is_empty() {
    assert_eq!(Remote::<Vec<u32>>::idle().phase(), ListPhase::Empty);
}
