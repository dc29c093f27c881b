use crate::api::{ActionError, Event};
use crate::farming::SourceId;
use crate::timing::Timing::{self, TweenCompleted, TweenUpdated};
use crate::{occur, Game};

pub const HIT_SQUASH: f32 = 0.85;
pub const RECOVERY_POP: f32 = 1.1;
const POSE_TIME: f32 = 0.1;
const RETURN_TIME: f32 = 0.2;

impl Game {
    /// Moves source scale to `pose` and back to neutral, replacing a running pose.
    pub(crate) fn play_source_pose(
        &mut self,
        source: SourceId,
        pose: f32,
    ) -> Result<Vec<Event>, ActionError> {
        let tween = self.timing.animate(1.0, pose, POSE_TIME);
        let (replaced, events) = self.farming.animate_source(source, tween)?;
        if let Some(replaced) = replaced {
            self.timing.cancel(replaced);
        }
        Ok(occur![events])
    }

    pub(crate) fn handle_source_pose(
        &mut self,
        source: SourceId,
        timing: Timing,
    ) -> Result<Vec<Event>, ActionError> {
        let events = match timing {
            TweenUpdated { value, .. } => self.farming.scale_source(source, value)?,
            TweenCompleted { value, .. } => {
                self.farming.finish_animation(source)?;
                if value != 1.0 {
                    let tween = self.timing.animate(value, 1.0, RETURN_TIME);
                    self.farming.animate_source(source, tween)?;
                }
                self.farming.scale_source(source, value)?
            }
        };
        Ok(occur![events])
    }
}
