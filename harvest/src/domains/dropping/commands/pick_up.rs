use crate::dropping::Dropping::TokenPickedUp;
use crate::dropping::{
    Dropping, DroppingDomain, DroppingError, Receiver, Stage, TokenId, TokenState, TransitId,
};

impl DroppingDomain {
    pub fn pick_up(
        &mut self,
        token: TokenId,
        receiver: Receiver,
    ) -> Result<(TransitId, impl FnOnce() -> Vec<Dropping> + '_), DroppingError> {
        let position = self.get_token(token)?.position;
        let transit = self
            .find_landed(token)
            .ok_or(DroppingError::TokenNotInWorld { id: token })?
            .id;
        let command = move || {
            let mut events = vec![];
            if let Ok(state) = self.get_token_mut(token).map(|token| &mut token.state) {
                *state = TokenState::InTransit;
            }
            if let Ok(landed) = self.get_transit_mut(transit) {
                landed.receiver = Some(receiver);
                landed.stage = Stage::Flight;
                landed.origin = position;
                events.push(TokenPickedUp {
                    token,
                    transit,
                    receiver,
                });
            }
            events
        };
        Ok((transit, command))
    }
}
