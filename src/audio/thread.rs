use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::library::Track;

use super::advance::next_index;
use super::sink::create_sink_at;
use super::types::{AudioCmd, PlaybackHandle};

/// Absolute position within the track: the sink position counts from the
/// last seek target, not from the start of the file.
pub(super) fn track_position(seek_base: Duration, sink_pos: Duration) -> Duration {
    seek_base + sink_pos
}

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut sink: Option<Sink> = None;
        let mut volume: f32 = 1.0;
        // Seeks rebuild the sink, so `Sink::get_pos` restarts counting from
        // zero; the seek target is carried as a base offset.
        let mut seek_base = Duration::ZERO;

        // Prepare a paused sink for track `i`. A failed open/decode leaves the
        // track selected but without a sink; the UI keeps showing "paused".
        fn do_load(
            i: usize,
            stream: &OutputStream,
            tracks: &[Track],
            sink: &mut Option<Sink>,
            index: &mut Option<usize>,
            paused: &mut bool,
            volume: f32,
            playback_info: &PlaybackHandle,
        ) {
            if let Some(s) = sink.as_ref() {
                s.stop();
            }

            let new_sink = create_sink_at(stream, &tracks[i], Duration::ZERO);
            if let Some(s) = &new_sink {
                s.set_volume(volume);
            }
            *sink = new_sink;
            *index = Some(i);
            *paused = true;

            if let Ok(mut info) = playback_info.lock() {
                info.index = Some(i);
                info.elapsed = Duration::ZERO;
                info.playing = false;
            }
        }

        fn do_resume(
            sink: &Option<Sink>,
            paused: &mut bool,
            playback_info: &PlaybackHandle,
        ) {
            let Some(s) = sink.as_ref() else {
                return;
            };
            s.play();
            *paused = false;
            if let Ok(mut info) = playback_info.lock() {
                info.playing = true;
            }
        }

        fn do_play(
            i: usize,
            stream: &OutputStream,
            tracks: &[Track],
            sink: &mut Option<Sink>,
            index: &mut Option<usize>,
            paused: &mut bool,
            volume: f32,
            playback_info: &PlaybackHandle,
        ) {
            do_load(i, stream, tracks, sink, index, paused, volume, playback_info);
            do_resume(sink, paused, playback_info);
        }

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            let start = sink.volume();
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(start * (1.0 - t));
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load(i) => {
                        if i >= tracks.len() {
                            continue;
                        }
                        seek_base = Duration::ZERO;
                        do_load(
                            i,
                            &stream,
                            &tracks,
                            &mut sink,
                            &mut index,
                            &mut paused,
                            volume,
                            &playback_info,
                        );
                    }

                    AudioCmd::Play(i) => {
                        if i >= tracks.len() {
                            continue;
                        }
                        seek_base = Duration::ZERO;
                        do_play(
                            i,
                            &stream,
                            &tracks,
                            &mut sink,
                            &mut index,
                            &mut paused,
                            volume,
                            &playback_info,
                        );
                    }

                    AudioCmd::Resume => {
                        do_resume(&sink, &mut paused, &playback_info);
                    }

                    AudioCmd::Pause => {
                        if let Some(ref s) = sink {
                            s.pause();
                            paused = true;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = false;
                            }
                        }
                    }

                    AudioCmd::SeekTo(pos) => {
                        // Scrubbing: rebuild the current sink and skip into the
                        // file. Uses `Source::skip_duration`, which works for
                        // the common formats.
                        let Some(i) = index else {
                            continue;
                        };
                        if sink.is_none() {
                            continue;
                        }

                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }

                        let new_sink = create_sink_at(&stream, &tracks[i], pos);
                        if let Some(s) = &new_sink {
                            s.set_volume(volume);
                            if !paused {
                                s.play();
                            }
                        }
                        sink = new_sink;
                        seek_base = pos;

                        if let Ok(mut info) = playback_info.lock() {
                            info.elapsed = pos;
                        }
                    }

                    AudioCmd::SetVolume(v) => {
                        volume = v;
                        if let Some(ref s) = sink {
                            s.set_volume(volume);
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            // Fade out gently before stopping.
                            fade_out_sink(s, fade_out_ms);
                            s.stop();
                        }
                        // Update shared state so the UI doesn't keep showing Playing.
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(ref s) = sink {
                        // Elapsed comes from the sink's own position, so the
                        // displayed time tracks actual playback and freezes
                        // while paused.
                        if !paused {
                            if let Ok(mut info) = playback_info.lock() {
                                info.elapsed = track_position(seek_base, s.get_pos());
                            }
                        }
                        // End-of-track check: advance to the next track,
                        // wrapping to the first after the last.
                        if !paused && s.empty() {
                            if let Some(next) =
                                index.and_then(|i| next_index(i, tracks.len()))
                            {
                                seek_base = Duration::ZERO;
                                do_play(
                                    next,
                                    &stream,
                                    &tracks,
                                    &mut sink,
                                    &mut index,
                                    &mut paused,
                                    volume,
                                    &playback_info,
                                );
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
