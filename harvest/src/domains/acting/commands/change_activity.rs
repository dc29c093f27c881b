use log::debug;

use crate::acting::Acting::ActivityChanged;
use crate::acting::{Acting, ActingDomain, ActingError, Activity, ActorId};
use crate::timing::TweenId;

impl ActingDomain {
    /// Switches activity and its routine, the replaced routine is returned for cancellation.
    pub fn change_activity(
        &mut self,
        id: ActorId,
        activity: Activity,
        routine: Option<TweenId>,
    ) -> Result<(Option<TweenId>, impl FnOnce() -> Vec<Acting> + '_), ActingError> {
        let actor = self.get_actor_mut(id)?;
        let replaced = actor.routine;
        let command = move || {
            debug!("Actor {:?} {:?} -> {:?}", id, actor.activity, activity);
            actor.routine = routine;
            if actor.activity == activity {
                return vec![];
            }
            actor.activity = activity;
            vec![ActivityChanged {
                actor: id,
                activity,
            }]
        };
        Ok((replaced, command))
    }
}
