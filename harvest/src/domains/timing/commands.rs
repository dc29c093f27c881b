use crate::timing::{TimingDomain, Tween, TweenId};

impl TimingDomain {
    pub fn animate(&mut self, from: f32, to: f32, duration: f32) -> TweenId {
        let id = self.tweens_id.one(TweenId);
        self.tweens.push(Tween {
            id,
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
        id
    }

    /// Plain timer, completes after `duration` with value 1.
    #[inline]
    pub fn delay(&mut self, duration: f32) -> TweenId {
        self.animate(0.0, 1.0, duration)
    }

    /// Cancels a pending tween. Unknown or finished tweens are ignored.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let count = self.tweens.len();
        self.tweens.retain(|tween| tween.id != id);
        count != self.tweens.len()
    }
}
