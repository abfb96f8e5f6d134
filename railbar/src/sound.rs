//! Sound dispatch boundary for the configured sound map.

/// External dispatcher invoked for notifications named in the widget's
/// sound map.
///
/// Any `FnMut(&str)` closure works as a dispatcher.
pub trait SoundDispatcher {
    /// Start the sound process mapped to an emitted notification.
    fn play(&mut self, process_id: &str);
}

impl<F: FnMut(&str)> SoundDispatcher for F {
    fn play(&mut self, process_id: &str) {
        self(process_id)
    }
}
