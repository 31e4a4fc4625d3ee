//! Step sequencer for animated demonstrations and position carousels.
//!
//! The sequencer is an explicit transition table: every event maps a state
//! to a new state plus an [`Effect`] telling the owner what to do with its
//! playback timer. Timer ticks carry the epoch they were scheduled under, so
//! a tick that was already in flight when the owner reset, paused or
//! switched demonstrations is ignored instead of advancing the new counter.

/// What happens at the ends of the sequence under manual control
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Boundary {
    /// Stop at 0 and at the last step
    #[default]
    Clamp,
    /// Going past either end continues from the other one
    Wrap,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SequencerEvent {
    Next,
    Previous,
    /// Timer-driven advance scheduled under `epoch`
    Tick { epoch: u64 },
    Play,
    Pause,
    TogglePlayback,
    Reset,
    /// Replace the active demonstration; always resets
    Switch { max_step: usize },
    Seek(usize),
}

/// Instruction for the owner of the playback timer
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    None,
    /// Start one delayed tick tagged with `epoch`, replacing any pending one
    Schedule { epoch: u64 },
    /// Drop the pending tick, if any
    Cancel,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SequencerState {
    step: usize,
    max_step: usize,
    playing: bool,
    epoch: u64,
    boundary: Boundary,
}

impl SequencerState {
    pub fn new(max_step: usize, boundary: Boundary) -> Self {
        Self {
            step: 0,
            max_step,
            playing: false,
            epoch: 0,
            boundary,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn max_step(&self) -> usize {
        self.max_step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_at_end(&self) -> bool {
        self.step == self.max_step
    }

    pub fn can_go_back(&self) -> bool {
        match self.boundary {
            Boundary::Clamp => self.step > 0,
            Boundary::Wrap => self.max_step > 0,
        }
    }

    pub fn can_go_forward(&self) -> bool {
        match self.boundary {
            Boundary::Clamp => self.step < self.max_step,
            Boundary::Wrap => self.max_step > 0,
        }
    }

    /// Apply one event, returning the new state and the timer effect
    pub fn transition(self, event: SequencerEvent) -> (SequencerState, Effect) {
        let mut next = self;
        let effect = match event {
            SequencerEvent::Next => {
                next.step = match self.boundary {
                    Boundary::Clamp => (self.step + 1).min(self.max_step),
                    Boundary::Wrap if self.step >= self.max_step => 0,
                    Boundary::Wrap => self.step + 1,
                };
                if next.playing && next.is_at_end() {
                    return next.stopped();
                }
                Effect::None
            }
            SequencerEvent::Previous => {
                next.step = match self.boundary {
                    Boundary::Clamp => self.step.saturating_sub(1),
                    Boundary::Wrap if self.step == 0 => self.max_step,
                    Boundary::Wrap => self.step - 1,
                };
                Effect::None
            }
            SequencerEvent::Tick { epoch } => {
                if !self.playing || epoch != self.epoch {
                    return (self, Effect::None);
                }
                next.step = (self.step + 1).min(self.max_step);
                if next.is_at_end() {
                    return next.stopped();
                }
                next.epoch += 1;
                Effect::Schedule { epoch: next.epoch }
            }
            SequencerEvent::Play => {
                if self.playing || self.max_step == 0 {
                    return (self, Effect::None);
                }
                if self.is_at_end() {
                    next.step = 0;
                }
                next.playing = true;
                next.epoch += 1;
                Effect::Schedule { epoch: next.epoch }
            }
            SequencerEvent::Pause => {
                if !self.playing {
                    return (self, Effect::None);
                }
                return self.stopped();
            }
            SequencerEvent::TogglePlayback => {
                let event = if self.playing {
                    SequencerEvent::Pause
                } else {
                    SequencerEvent::Play
                };
                return self.transition(event);
            }
            SequencerEvent::Reset => {
                next.step = 0;
                return next.stopped();
            }
            SequencerEvent::Switch { max_step } => {
                next.max_step = max_step;
                next.step = 0;
                return next.stopped();
            }
            SequencerEvent::Seek(step) => {
                next.step = step.min(self.max_step);
                if next.playing && next.is_at_end() {
                    return next.stopped();
                }
                Effect::None
            }
        };
        (next, effect)
    }

    // stop playback and invalidate whatever tick is in flight
    fn stopped(mut self) -> (SequencerState, Effect) {
        self.playing = false;
        self.epoch += 1;
        (self, Effect::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp(max_step: usize) -> SequencerState {
        SequencerState::new(max_step, Boundary::Clamp)
    }

    fn run(state: SequencerState, events: &[SequencerEvent]) -> SequencerState {
        events.iter().fold(state, |s, e| s.transition(*e).0)
    }

    #[test]
    fn test_initial_state() {
        let state = clamp(3);
        assert_eq!(state.step(), 0);
        assert!(!state.is_playing());
        assert!(!state.can_go_back());
        assert!(state.can_go_forward());
    }

    #[test]
    fn test_castling_scenario() {
        let state = run(clamp(2), &[SequencerEvent::Next, SequencerEvent::Next]);
        assert_eq!(state.step(), 2);
        assert!(!state.is_playing());

        let (after, effect) = state.transition(SequencerEvent::Next);
        assert_eq!(after, state);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_previous_at_zero_is_noop() {
        let state = clamp(3);
        let (after, _) = state.transition(SequencerEvent::Previous);
        assert_eq!(after, state);
    }

    #[test]
    fn test_reset_always_stops_at_zero() {
        let playing = run(clamp(4), &[SequencerEvent::Next, SequencerEvent::Play]);
        assert!(playing.is_playing());
        let (state, effect) = playing.transition(SequencerEvent::Reset);
        assert_eq!(state.step(), 0);
        assert!(!state.is_playing());
        assert_eq!(effect, Effect::Cancel);

        let (idle, _) = clamp(4).transition(SequencerEvent::Reset);
        assert_eq!(idle.step(), 0);
        assert!(!idle.is_playing());
    }

    #[test]
    fn test_timer_playback_stops_at_end() {
        let (mut state, mut effect) = clamp(3).transition(SequencerEvent::Play);
        let mut ticks = 0;
        while let Effect::Schedule { epoch } = effect {
            (state, effect) = state.transition(SequencerEvent::Tick { epoch });
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(state.step(), 3);
        assert!(!state.is_playing());
        assert_eq!(effect, Effect::Cancel);
    }

    #[test]
    fn test_stale_tick_after_switch_has_no_effect() {
        let (playing, effect) = clamp(3).transition(SequencerEvent::Play);
        let Effect::Schedule { epoch: stale } = effect else {
            panic!("play should schedule a tick");
        };

        let (switched, effect) = playing.transition(SequencerEvent::Switch { max_step: 2 });
        assert_eq!(effect, Effect::Cancel);

        // the new category starts playing before the stale tick fires
        let (switched, _) = switched.transition(SequencerEvent::Play);
        let (after, effect) = switched.transition(SequencerEvent::Tick { epoch: stale });
        assert_eq!(after, switched);
        assert_eq!(after.step(), 0);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_tick_after_pause_is_ignored() {
        let (playing, effect) = clamp(3).transition(SequencerEvent::Play);
        let Effect::Schedule { epoch } = effect else {
            panic!("play should schedule a tick");
        };
        let (paused, _) = playing.transition(SequencerEvent::Pause);
        let (after, _) = paused.transition(SequencerEvent::Tick { epoch });
        assert_eq!(after.step(), 0);
    }

    #[test]
    fn test_play_at_end_restarts() {
        let at_end = run(clamp(2), &[SequencerEvent::Seek(5)]);
        assert_eq!(at_end.step(), 2);
        let (state, effect) = at_end.transition(SequencerEvent::TogglePlayback);
        assert_eq!(state.step(), 0);
        assert!(state.is_playing());
        assert!(matches!(effect, Effect::Schedule { .. }));
    }

    #[test]
    fn test_play_without_steps_does_nothing() {
        let (state, effect) = clamp(0).transition(SequencerEvent::Play);
        assert!(!state.is_playing());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_toggle_pauses() {
        let state = run(clamp(3), &[SequencerEvent::Play, SequencerEvent::TogglePlayback]);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_wrap_boundary() {
        let state = SequencerState::new(2, Boundary::Wrap);
        let (back, _) = state.transition(SequencerEvent::Previous);
        assert_eq!(back.step(), 2);
        let (forward, _) = back.transition(SequencerEvent::Next);
        assert_eq!(forward.step(), 0);
        assert!(state.can_go_back());
    }

    #[test]
    fn test_single_position_wrap_stays_put() {
        let state = SequencerState::new(0, Boundary::Wrap);
        assert_eq!(state.transition(SequencerEvent::Next).0.step(), 0);
        assert_eq!(state.transition(SequencerEvent::Previous).0.step(), 0);
        assert!(!state.can_go_forward());
    }
}
