use crate::farming::Farming::SourceAnimated;
use crate::farming::{Farming, FarmingDomain, FarmingError, SourceId};
use crate::timing::TweenId;

impl FarmingDomain {
    /// Binds the single pose slot of a source, returns the replaced tween to cancel.
    ///
    /// Replacing a running animation resets the pose to neutral.
    pub fn animate_source(
        &mut self,
        id: SourceId,
        tween: TweenId,
    ) -> Result<(Option<TweenId>, Vec<Farming>), FarmingError> {
        let source = self.get_source_mut(id)?;
        let replaced = source.animation.replace(tween);
        let mut events = vec![];
        if replaced.is_some() && source.scale != 1.0 {
            source.scale = 1.0;
            events.push(SourceAnimated {
                source: id,
                scale: source.scale,
            });
        }
        Ok((replaced, events))
    }

    pub fn scale_source(&mut self, id: SourceId, scale: f32) -> Result<Vec<Farming>, FarmingError> {
        let source = self.get_source_mut(id)?;
        source.scale = scale;
        Ok(vec![SourceAnimated { source: id, scale }])
    }

    pub fn finish_animation(&mut self, id: SourceId) -> Result<(), FarmingError> {
        self.get_source_mut(id)?.animation = None;
        Ok(())
    }
}
