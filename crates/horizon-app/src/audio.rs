//! Audio cue dispatch. Playback itself belongs to whatever sink the host plugs in.

use horizon_core::events::AudioEvent;

/// Something that can play a cue. Fire-and-forget: a sink never reports back.
pub trait AudioSink: Send {
    fn play(&mut self, event: &AudioEvent);
}

/// Hand every cue of a frame to the sink. Without a sink, cues are logged and skipped.
pub fn dispatch(sink: &mut Option<Box<dyn AudioSink>>, events: &[AudioEvent]) {
    match sink {
        Some(sink) => {
            for event in events {
                sink.play(event);
            }
        }
        None => {
            for event in events {
                log::debug!("Audio cue (no sink): {event:?}");
            }
        }
    }
}
