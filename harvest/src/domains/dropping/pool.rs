use log::debug;

use crate::dropping::{DroppingDomain, Token, TokenId, TokenState};
use crate::inventory::ItemKey;
use crate::math::Position;

impl DroppingDomain {
    /// Takes a released token of the item or allocates a new one.
    pub fn acquire(&mut self, item: ItemKey, position: Position) -> TokenId {
        let pooled = self.pools.get_mut(&item).and_then(|pool| pool.pop());
        let id = match pooled {
            Some(id) => id,
            None => {
                let id = self.tokens_id.one(TokenId);
                debug!("Allocates token {:?} of {:?}", id, item);
                self.tokens.push(Token {
                    id,
                    item,
                    position,
                    scale: 0.0,
                    state: TokenState::Pooled,
                });
                id
            }
        };
        if let Some(token) = self.tokens.iter_mut().find(|token| token.id == id) {
            token.position = position;
            token.scale = 0.0;
            token.state = TokenState::InTransit;
        }
        id
    }

    /// Returns token to the free list of its item, tokens are never freed.
    pub fn release(&mut self, id: TokenId) {
        if let Some(token) = self.tokens.iter_mut().find(|token| token.id == id) {
            if token.state == TokenState::Pooled {
                return;
            }
            token.state = TokenState::Pooled;
            token.scale = 0.0;
            self.pools.entry(token.item).or_default().push(id);
        }
    }

    pub fn count_pooled(&self, item: ItemKey) -> usize {
        self.pools.get(&item).map(|pool| pool.len()).unwrap_or(0)
    }
}
