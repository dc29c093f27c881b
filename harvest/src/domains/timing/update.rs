use crate::timing::Timing::{TweenCompleted, TweenUpdated};
use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Timing> {
        self.now += time;
        let mut events = vec![];
        for tween in self.tweens.iter_mut() {
            tween.elapsed += time;
            if tween.is_complete() {
                events.push(TweenCompleted {
                    id: tween.id,
                    value: tween.to,
                });
            } else {
                events.push(TweenUpdated {
                    id: tween.id,
                    value: tween.value(),
                });
            }
        }
        self.tweens.retain(|tween| !tween.is_complete());
        events
    }
}
