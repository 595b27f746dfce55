//! Playlist position arithmetic.
//!
//! The playlist always wraps: advancing past the last track lands on the
//! first, retreating before the first lands on the last. Used both for the
//! prev/next controls and for auto-advance at end-of-track.

/// Index of the track after `current`, wrapping to 0 past the end.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current + 1) % len)
}

/// Index of the track before `current`, wrapping to the last index below 0.
pub fn prev_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(if current == 0 { len - 1 } else { current - 1 })
}
