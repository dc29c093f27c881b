use crate::collections::Sequence;
use serde::{Deserialize, Serialize};

/// Time-driven tween scheduler.
///
/// Tweens are advanced by [`TimingDomain::update`] in creation order. A tween
/// created while handling events of an update starts on the next update, so
/// chained animations never receive time twice.
#[derive(Default)]
pub struct TimingDomain {
    pub now: f32,
    pub tweens_id: Sequence,
    pub tweens: Vec<Tween>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub usize);

#[derive(Debug, Clone)]
pub struct Tween {
    pub id: TweenId,
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    TweenUpdated { id: TweenId, value: f32 },
    TweenCompleted { id: TweenId, value: f32 },
}
