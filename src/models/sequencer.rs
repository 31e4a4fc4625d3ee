//! Demonstration playback model.
//!
//! Owns one lesson's demonstrations, the step sequencer and at most one
//! pending playback tick. The tick is a GPUI task sleeping on the background
//! executor's timer; replacing or dropping the stored task cancels it, and the
//! epoch carried by every tick makes any tick that still arrives a no-op.

use std::time::Duration;

use gpui::{AsyncApp, Context, Task, WeakEntity};
use tracing::{debug, trace};

use crate::domain::{
    BoardSnapshot, Boundary, Demonstration, DemonstrationGroup, Effect, HighlightSet,
    SequencerEvent, SequencerState,
};

pub struct SequencerModel {
    group: DemonstrationGroup,
    active: usize,
    state: SequencerState,
    interval: Duration,
    /// Pending playback tick
    _tick_task: Option<Task<()>>,
}

impl SequencerModel {
    pub fn new(group: DemonstrationGroup, interval: Duration) -> Self {
        let max_step = group.get(0).map_or(0, Demonstration::max_step);
        Self {
            group,
            active: 0,
            state: SequencerState::new(max_step, Boundary::Clamp),
            interval,
            _tick_task: None,
        }
    }

    pub fn group(&self) -> &DemonstrationGroup {
        &self.group
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Demonstration> {
        self.group.get(self.active)
    }

    pub fn step(&self) -> usize {
        self.state.step()
    }

    pub fn max_step(&self) -> usize {
        self.state.max_step()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.active()
            .map(|demo| demo.snapshot_at(self.step()))
            .unwrap_or_default()
    }

    pub fn highlights(&self) -> HighlightSet {
        self.active()
            .map(|demo| demo.highlights_at(self.step()))
            .unwrap_or_default()
    }

    pub fn caption(&self) -> &'static str {
        self.active().map_or("", |demo| demo.caption_at(self.step()))
    }

    /// Switch to another demonstration of the group. Always restarts at
    /// step 0 and cancels playback, even when the index is unchanged.
    pub fn select(&mut self, index: usize, cx: &mut Context<Self>) {
        let Some(demo) = self.group.get(index) else {
            return;
        };
        let max_step = demo.max_step();
        debug!(demo = demo.id, "switching demonstration");
        self.active = index;
        self.dispatch(SequencerEvent::Switch { max_step }, cx);
    }

    /// Feed one event through the sequencer and carry out its timer effect
    pub fn dispatch(&mut self, event: SequencerEvent, cx: &mut Context<Self>) {
        let (state, effect) = self.state.transition(event);
        trace!(?event, step = state.step(), ?effect, "sequencer");
        self.state = state;
        match effect {
            Effect::None => {}
            Effect::Cancel => self._tick_task = None,
            Effect::Schedule { epoch } => self.schedule_tick(epoch, cx),
        }
        cx.notify();
    }

    fn schedule_tick(&mut self, epoch: u64, cx: &mut Context<Self>) {
        let interval = self.interval;
        let task = cx.spawn(
            async move |weak: WeakEntity<SequencerModel>, cx: &mut AsyncApp| {
                cx.background_executor().timer(interval).await;
                // the entity is gone once its lesson page is left
                let _ = weak.update(cx, |model, cx| {
                    model.dispatch(SequencerEvent::Tick { epoch }, cx);
                });
            },
        );
        self._tick_task = Some(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::special_moves;
    use gpui::{AppContext as _, Entity, TestAppContext};

    const INTERVAL: Duration = Duration::from_millis(1000);

    fn castling_lesson(cx: &mut TestAppContext) -> Entity<SequencerModel> {
        cx.new(|_| SequencerModel::new(special_moves(), INTERVAL))
    }

    #[gpui::test]
    fn test_tick_advances_after_one_interval(cx: &mut TestAppContext) {
        let model = castling_lesson(cx);
        model.update(cx, |model, cx| model.dispatch(SequencerEvent::Play, cx));
        assert!(model.read_with(cx, |model, _| model._tick_task.is_some()));

        cx.executor().advance_clock(INTERVAL);
        cx.run_until_parked();

        model.read_with(cx, |model, _| {
            assert_eq!(model.step(), 1);
            assert!(model.is_playing());
        });
    }

    #[gpui::test]
    fn test_playback_stops_at_last_step(cx: &mut TestAppContext) {
        let model = castling_lesson(cx);
        model.update(cx, |model, cx| model.dispatch(SequencerEvent::Play, cx));

        for _ in 0..4 {
            cx.executor().advance_clock(INTERVAL);
            cx.run_until_parked();
        }

        model.read_with(cx, |model, _| {
            assert_eq!(model.step(), model.max_step());
            assert!(!model.is_playing());
            assert!(model._tick_task.is_none());
        });
    }

    #[gpui::test]
    fn test_switching_demonstration_cancels_pending_tick(cx: &mut TestAppContext) {
        let model = castling_lesson(cx);
        model.update(cx, |model, cx| {
            model.dispatch(SequencerEvent::Play, cx);
            model.select(1, cx);
        });
        model.read_with(cx, |model, _| assert!(model._tick_task.is_none()));

        cx.executor().advance_clock(INTERVAL * 3);
        cx.run_until_parked();

        model.read_with(cx, |model, _| {
            assert_eq!(model.active_index(), 1);
            assert_eq!(model.step(), 0);
            assert!(!model.is_playing());
        });
    }

    #[gpui::test]
    fn test_replay_replaces_pending_tick(cx: &mut TestAppContext) {
        let model = castling_lesson(cx);
        model.update(cx, |model, cx| {
            model.dispatch(SequencerEvent::Play, cx);
            model.dispatch(SequencerEvent::Pause, cx);
            model.dispatch(SequencerEvent::Play, cx);
        });

        cx.executor().advance_clock(INTERVAL);
        cx.run_until_parked();

        // only the tick from the second play is live
        model.read_with(cx, |model, _| assert_eq!(model.step(), 1));
    }

    #[gpui::test]
    fn test_pending_tick_does_not_keep_model_alive(cx: &mut TestAppContext) {
        let model = castling_lesson(cx);
        model.update(cx, |model, cx| model.dispatch(SequencerEvent::Play, cx));
        let weak = model.downgrade();
        drop(model);
        cx.run_until_parked();

        cx.executor().advance_clock(INTERVAL * 2);
        cx.run_until_parked();
        assert!(weak.upgrade().is_none());
    }
}
