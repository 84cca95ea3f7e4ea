//! Battle resolution: aggregate damage, swarm merging, and the round
//! verdict.

use crate::cards::CardId;
use crate::core::{GameResult, PlayerId};
use crate::state::CreatureInPlay;
use crate::triggers::TriggerEvent;

use super::GameEngine;

/// Copies of one card required on the field before they merge.
pub(crate) const SWARM_THRESHOLD: usize = 3;
/// Group size above which the merged creature gets a 10% bonus.
pub(crate) const SWARM_BONUS_ABOVE: usize = 4;

impl GameEngine {
    /// Resolve the Battle phase.
    ///
    /// The verdict compares projected survival (own total HP minus the
    /// opposing total ATK) using the pre-damage totals; the mutations
    /// that follow never change it. Damage lands on A then B, merges
    /// run A then B, and destruction triggers stay queued for the End
    /// phase. A tie goes to the non-first player.
    pub(crate) fn run_battle(&mut self) -> GameResult<()> {
        if self.state.round_result.is_some() {
            return Ok(());
        }
        let atk_a = self.state.players[PlayerId::A].total_atk();
        let hp_a = self.state.players[PlayerId::A].total_hp();
        let atk_b = self.state.players[PlayerId::B].total_atk();
        let hp_b = self.state.players[PlayerId::B].total_hp();
        let hp_after_a = hp_a - atk_b;
        let hp_after_b = hp_b - atk_a;

        self.apply_incoming_damage(PlayerId::A, atk_b);
        self.apply_incoming_damage(PlayerId::B, atk_a);
        self.merge_swarm(PlayerId::A);
        self.merge_swarm(PlayerId::B);

        let winner = if hp_after_a > hp_after_b {
            PlayerId::A
        } else if hp_after_b > hp_after_a {
            PlayerId::B
        } else {
            self.state.first_player.opponent()
        };
        self.state.set_round_winner(winner, "Battle resolved");
        self.state
            .push_log(format!("Battle resolved. Winner: {winner}"));
        Ok(())
    }

    /// Spend a damage budget across the field in slot order.
    ///
    /// Each creature absorbs up to its remaining HP. Creatures at 0 or
    /// less are destroyed: card to trash, slot cleared, and
    /// `OnCreatureDestroyed` enqueued.
    fn apply_incoming_damage(&mut self, player: PlayerId, damage: i32) {
        let mut remaining = damage;
        for index in 0..crate::state::FIELD_SLOTS {
            if remaining <= 0 {
                break;
            }
            let Some(creature) = self.state.players[player].field[index].as_mut() else {
                continue;
            };
            let dealt = remaining.min(creature.current_hp);
            creature.current_hp -= dealt;
            remaining -= dealt;
            if creature.current_hp > 0 {
                continue;
            }
            let card_id = creature.card.id.clone();
            let name = creature.card.name.clone();
            self.state.players[player].trash.push(card_id.clone());
            self.state.players[player].field[index] = None;
            self.state
                .push_log(format!("{player} loses {name} from slot {}", index + 1));
            self.state
                .enqueue_triggers(TriggerEvent::OnCreatureDestroyed, player, Some(&card_id));
        }
    }

    /// Merge groups of three or more surviving copies of one card.
    ///
    /// Groups form by card id in first-appearance order. The merged
    /// creature lands in the group's first slot, keeps that copy's
    /// instance id, and carries the floored sum of the group's current
    /// stats; groups larger than four get a further 10% (floored).
    /// Vacated copies go to the trash.
    fn merge_swarm(&mut self, player: PlayerId) {
        let mut groups: Vec<(CardId, Vec<usize>)> = Vec::new();
        for (idx, slot) in self.state.players[player].field.iter().enumerate() {
            let Some(creature) = slot else { continue };
            match groups.iter_mut().find(|(id, _)| *id == creature.card.id) {
                Some((_, slots)) => slots.push(idx),
                None => groups.push((creature.card.id.clone(), vec![idx])),
            }
        }
        for (card_id, slots) in groups {
            if slots.len() < SWARM_THRESHOLD {
                continue;
            }
            let state_player = &mut self.state.players[player];
            let mut total_atk: f64 = 0.0;
            let mut total_hp: f64 = 0.0;
            for &slot in &slots {
                if let Some(creature) = &state_player.field[slot] {
                    total_atk += f64::from(creature.current_atk);
                    total_hp += f64::from(creature.current_hp);
                }
            }
            let mut merged_atk = total_atk.floor();
            let mut merged_hp = total_hp.floor();
            if slots.len() > SWARM_BONUS_ABOVE {
                merged_atk = (merged_atk * 1.1).floor();
                merged_hp = (merged_hp * 1.1).floor();
            }

            let first_slot = slots[0];
            let Some(first) = state_player.field[first_slot].take() else {
                continue;
            };
            let merged = CreatureInPlay {
                instance: first.instance,
                card: first.card,
                current_atk: merged_atk as i32,
                current_hp: merged_hp as i32,
            };
            let name = merged.card.name.clone();
            state_player.field[first_slot] = Some(merged);
            for &slot in &slots[1..] {
                if state_player.field[slot].is_some() {
                    state_player.field[slot] = None;
                    state_player.trash.push(card_id.clone());
                }
            }
            self.state.push_log(format!(
                "{player} merges {} copies of {name}",
                slots.len()
            ));
        }
    }
}
