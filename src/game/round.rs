use core::cmp::Ordering;
use core::sync::atomic::Ordering as AtomicOrdering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{HandEmptyError, RoundError};
use crate::hand::Hand;
use crate::result::{LossReason, RoundOutcome, RoundResult, WarLevel};

use super::{Game, GameState, Side, WAR_STAKE};

/// Both hands and the pot, locked for the duration of one round.
struct Table<'a> {
    player: &'a mut Hand,
    computer: &'a mut Hand,
    pot: &'a mut Vec<Card>,
}

impl Table<'_> {
    fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &*self.player,
            Side::Computer => &*self.computer,
        }
    }

    /// Moves the front card of each hand into the pot, player first.
    ///
    /// Both hands are checked before either is drawn from, so a failed draw
    /// leaves the table untouched.
    fn draw_pair(&mut self) -> Result<(Card, Card), HandEmptyError> {
        for side in Side::BOTH {
            if self.hand(side).is_empty() {
                return Err(HandEmptyError { owner: side });
            }
        }

        let player_card = self.player.dequeue()?;
        let computer_card = self.computer.dequeue()?;
        self.pot.push(player_card);
        self.pot.push(computer_card);

        Ok((player_card, computer_card))
    }

    /// Moves the whole pot, in order, to the back of the winner's hand.
    fn award_pot(&mut self, winner: Side) {
        let hand = match winner {
            Side::Player => &mut *self.player,
            Side::Computer => &mut *self.computer,
        };
        for card in self.pot.drain(..) {
            hand.enqueue(card);
        }
    }

    /// Returns the first side with an empty hand, player first.
    fn empty_side(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.hand(side).is_empty())
    }
}

impl Game {
    /// Plays one round: both sides turn up their top card and the higher
    /// rank takes the pot. A tie escalates into a war.
    ///
    /// The returned [`RoundResult`] carries the cards turned up, every war
    /// level fought, and the hand sizes after the round. If a side cannot
    /// afford a war, or a hand runs out of cards, the game state becomes
    /// [`GameState::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over, or if either hand is
    /// empty when the round starts. No card is moved in either case.
    pub fn play_round(&self) -> Result<RoundResult, RoundError> {
        if self.state().is_over() {
            return Err(RoundError::GameOver);
        }

        let (result, emptied) = {
            let mut player = self.player.lock();
            let mut computer = self.computer.lock();
            let mut pot = self.pot.lock();
            let mut table = Table {
                player: &mut *player,
                computer: &mut *computer,
                pot: &mut *pot,
            };

            let (player_card, computer_card) = table.draw_pair()?;
            let number = self.rounds.fetch_add(1, AtomicOrdering::SeqCst) + 1;
            log::debug!("round {number}: {player_card} vs {computer_card}");

            let mut wars = Vec::new();
            let outcome =
                self.compare_cards(&mut table, player_card, computer_card, &mut wars, 0)?;

            let result = RoundResult {
                number,
                player_card,
                computer_card,
                pot_size: 2 + wars.len() * 2 * WAR_STAKE,
                wars,
                outcome,
                player_cards: table.player.len(),
                computer_cards: table.computer.len(),
            };
            (result, table.empty_side())
        };

        match (result.outcome, emptied) {
            (RoundOutcome::InsufficientCards { loser }, _) => {
                self.finish(loser.opponent(), LossReason::InsufficientCardsForWar);
            }
            (RoundOutcome::Won(_), Some(loser)) => {
                self.finish(loser.opponent(), LossReason::OutOfCards);
            }
            (RoundOutcome::Won(_), None) => {
                *self.state.lock() = GameState::NormalRound;
            }
        }

        Ok(result)
    }

    /// Decides a pair of turned-up cards. Equal ranks go to war.
    fn compare_cards(
        &self,
        table: &mut Table<'_>,
        player_card: Card,
        computer_card: Card,
        wars: &mut Vec<WarLevel>,
        depth: u32,
    ) -> Result<RoundOutcome, HandEmptyError> {
        let winner = match player_card.cmp_rank(&computer_card) {
            Ordering::Equal => {
                log::debug!("tie on {}, time for war", player_card.rank);
                return self.war_round(table, wars, depth + 1);
            }
            Ordering::Greater => Side::Player,
            Ordering::Less => Side::Computer,
        };

        log::trace!(
            "{} takes {} cards",
            self.options.name(winner),
            table.pot.len()
        );
        table.award_pot(winner);
        Ok(RoundOutcome::Won(winner))
    }

    /// Resolves a war on top of the pot already on the table.
    ///
    /// A side holding fewer than [`WAR_STAKE`] cards loses on the spot, the
    /// player being checked first. Otherwise each side adds two face-down
    /// cards and one face-up card, and the face-up pair decides the whole
    /// pot, recursing on another tie.
    fn war_round(
        &self,
        table: &mut Table<'_>,
        wars: &mut Vec<WarLevel>,
        depth: u32,
    ) -> Result<RoundOutcome, HandEmptyError> {
        *self.state.lock() = GameState::WarRound { depth };

        for side in Side::BOTH {
            if table.hand(side).len() < WAR_STAKE {
                log::debug!(
                    "{} has {} cards, not enough for the war",
                    self.options.name(side),
                    table.hand(side).len()
                );
                return Ok(RoundOutcome::InsufficientCards { loser: side });
            }
        }

        let (player_first, computer_first) = table.draw_pair()?;
        let (player_second, computer_second) = table.draw_pair()?;
        let (player_card, computer_card) = table.draw_pair()?;

        log::debug!("war at depth {depth}: {player_card} vs {computer_card}");
        wars.push(WarLevel {
            depth,
            player_face_down: [player_first, player_second],
            computer_face_down: [computer_first, computer_second],
            player_card,
            computer_card,
        });

        self.compare_cards(table, player_card, computer_card, wars, depth)
    }
}
