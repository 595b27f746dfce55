use std::time::Duration;

use super::advance::{next_index, prev_index};
use super::thread::track_position;

#[test]
fn next_wraps_from_last_to_first() {
    assert_eq!(next_index(0, 3), Some(1));
    assert_eq!(next_index(1, 3), Some(2));
    assert_eq!(next_index(2, 3), Some(0));
}

#[test]
fn prev_wraps_from_first_to_last() {
    assert_eq!(prev_index(2, 3), Some(1));
    assert_eq!(prev_index(1, 3), Some(0));
    assert_eq!(prev_index(0, 3), Some(2));
}

#[test]
fn empty_playlist_has_no_neighbors() {
    assert_eq!(next_index(0, 0), None);
    assert_eq!(prev_index(0, 0), None);
}

#[test]
fn single_track_wraps_onto_itself() {
    assert_eq!(next_index(0, 1), Some(0));
    assert_eq!(prev_index(0, 1), Some(0));
}

#[test]
fn position_after_a_seek_includes_the_seek_target() {
    // The sink restarts at zero when a seek rebuilds it; 5s of playback
    // after seeking to 1:30 is 1:35 into the track.
    assert_eq!(
        track_position(Duration::from_secs(90), Duration::from_secs(5)),
        Duration::from_secs(95)
    );
    assert_eq!(
        track_position(Duration::ZERO, Duration::from_secs(5)),
        Duration::from_secs(5)
    );
}
