use crate::dropping::Dropping::{TokenLanded, TokenUpdated};
use crate::dropping::{Dropping, DroppingDomain, DroppingError, Stage, TokenState, TransitId};
use crate::math::{ease_in_out, parabola, Position, VectorMath};
use crate::timing::TweenId;

impl DroppingDomain {
    /// Binds the single animation slot of a transit, returns the replaced tween to cancel.
    pub fn animate_transit(
        &mut self,
        id: TransitId,
        tween: TweenId,
    ) -> Result<Option<TweenId>, DroppingError> {
        let transit = self.get_transit_mut(id)?;
        Ok(transit.animation.replace(tween))
    }

    pub fn scale_token(&mut self, id: TransitId, scale: f32) -> Result<Vec<Dropping>, DroppingError> {
        let token = self.get_transit(id)?.token;
        let token = self.get_token_mut(token)?;
        token.scale = scale;
        Ok(vec![TokenUpdated {
            token: token.id,
            position: token.position,
            scale,
        }])
    }

    pub fn finish_scale_in(&mut self, id: TransitId) -> Result<Vec<Dropping>, DroppingError> {
        let transit = self.get_transit_mut(id)?;
        transit.stage = Stage::Hold;
        transit.animation = None;
        self.scale_token(id, 1.0)
    }

    /// Sends the token flying to its receiver or lands it in world.
    pub fn finish_hold(&mut self, id: TransitId) -> Result<Vec<Dropping>, DroppingError> {
        let transit = self.get_transit_mut(id)?;
        transit.animation = None;
        if transit.receiver.is_some() {
            transit.stage = Stage::Flight;
            return Ok(vec![]);
        }
        transit.stage = Stage::InWorld;
        let (token, item) = (transit.token, transit.item);
        let token = self.get_token_mut(token)?;
        token.state = TokenState::InWorld;
        Ok(vec![TokenLanded {
            token: token.id,
            item,
            position: token.position,
        }])
    }

    /// Places the token along the flight path, the target is re-read on every step.
    pub fn fly(
        &mut self,
        id: TransitId,
        progress: f32,
        target: Position,
    ) -> Result<Vec<Dropping>, DroppingError> {
        let transit = self.get_transit(id)?;
        let (token, origin, impulse) = (transit.token, transit.origin, transit.impulse);
        let mut position = origin.lerp(target, ease_in_out(progress));
        position[1] += parabola(progress, impulse);
        let token = self.get_token_mut(token)?;
        token.position = position;
        Ok(vec![TokenUpdated {
            token: token.id,
            position,
            scale: token.scale,
        }])
    }
}
