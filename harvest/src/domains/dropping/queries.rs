use crate::dropping::{
    DroppingDomain, DroppingError, Stage, Token, TokenId, Transit, TransitId,
};
use crate::timing::TweenId;

impl DroppingDomain {
    pub fn get_token(&self, id: TokenId) -> Result<&Token, DroppingError> {
        self.tokens
            .iter()
            .find(|token| token.id == id)
            .ok_or(DroppingError::TokenNotFound { id })
    }

    pub(crate) fn get_token_mut(&mut self, id: TokenId) -> Result<&mut Token, DroppingError> {
        self.tokens
            .iter_mut()
            .find(|token| token.id == id)
            .ok_or(DroppingError::TokenNotFound { id })
    }

    pub fn get_transit(&self, id: TransitId) -> Result<&Transit, DroppingError> {
        self.transits
            .iter()
            .find(|transit| transit.id == id)
            .ok_or(DroppingError::TransitNotFound { id })
    }

    pub(crate) fn get_transit_mut(&mut self, id: TransitId) -> Result<&mut Transit, DroppingError> {
        self.transits
            .iter_mut()
            .find(|transit| transit.id == id)
            .ok_or(DroppingError::TransitNotFound { id })
    }

    pub fn find_animated(&self, tween: TweenId) -> Option<TransitId> {
        self.transits
            .iter()
            .find(|transit| transit.animation == Some(tween))
            .map(|transit| transit.id)
    }

    pub fn find_landed(&self, token: TokenId) -> Option<&Transit> {
        self.transits
            .iter()
            .find(|transit| transit.token == token && transit.stage == Stage::InWorld)
    }

    pub fn landed_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.can_interact())
    }
}
