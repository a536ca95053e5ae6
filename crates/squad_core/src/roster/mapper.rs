//! RosterMapper: API roster → positioned starters + bench
//!
//! Players are ordered by line (GK, DEF, MID, FWD) and shirt number, then
//! poured into the formation slots of their line. Whatever does not fit a
//! slot goes to the bench.

use serde::{Deserialize, Serialize};

use crate::models::{Position, RawPlayer, SquadPlayer, UNKNOWN_NATIONALITY};
use crate::pitch::PitchCoord;
use crate::tactics::{Formation, DEFAULT_FORMATION};

/// Result of mapping one roster load
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RosterMapping {
    /// On the pitch, grouped by line in priority order
    pub starters: Vec<SquadPlayer>,
    /// Everyone who did not get a slot, same grouping
    pub bench: Vec<SquadPlayer>,
    /// Records with a position label outside GK/DEF/MID/FWD
    pub skipped: Vec<RawPlayer>,
}

impl RosterMapping {
    pub fn into_parts(self) -> (Vec<SquadPlayer>, Vec<SquadPlayer>) {
        (self.starters, self.bench)
    }

    pub fn mapped_count(&self) -> usize {
        self.starters.len() + self.bench.len()
    }
}

/// Map a roster onto the default 4-3-3.
pub fn map_roster(raw_players: &[RawPlayer]) -> RosterMapping {
    map_roster_with(raw_players, &DEFAULT_FORMATION)
}

/// Map a roster onto `formation`.
///
/// Deterministic for a given input: the sort is stable, so players sharing a
/// line and shirt number keep their input order.
pub fn map_roster_with(raw_players: &[RawPlayer], formation: &Formation) -> RosterMapping {
    let mut skipped = Vec::new();
    let mut sorted: Vec<(Position, &RawPlayer)> = Vec::with_capacity(raw_players.len());

    for player in raw_players {
        match Position::from_api_label(&player.position) {
            Some(position) => sorted.push((position, player)),
            None => {
                log::warn!(
                    "Skipping player {} ({}): unknown position label '{}'",
                    player.id,
                    player.name,
                    player.position
                );
                skipped.push(player.clone());
            }
        }
    }

    sorted.sort_by_key(|(position, player)| (position.priority(), shirt_sort_key(player.number)));

    let mut starters = Vec::new();
    let mut bench = Vec::new();

    for position in Position::ALL {
        let coords = formation.coords(position);
        let bucket = sorted.iter().filter(|(p, _)| *p == position).map(|(_, player)| *player);

        for (idx, player) in bucket.enumerate() {
            match coords.get(idx) {
                Some(&coord) => starters.push(to_squad_player(player, position, coord, true)),
                None => bench.push(to_squad_player(player, position, PitchCoord::BENCH, false)),
            }
        }
    }

    log::debug!(
        "Mapped roster onto {}: {} starters, {} bench, {} skipped",
        formation.name,
        starters.len(),
        bench.len(),
        skipped.len()
    );

    RosterMapping { starters, bench, skipped }
}

/// Missing or zero shirt numbers sort after every real number.
fn shirt_sort_key(number: Option<u32>) -> u32 {
    match number {
        Some(n) if n > 0 => n,
        _ => u32::MAX,
    }
}

fn to_squad_player(
    raw: &RawPlayer,
    position: Position,
    coord: PitchCoord,
    is_starter: bool,
) -> SquadPlayer {
    SquadPlayer {
        id: raw.id,
        name: raw.name.clone(),
        position,
        number: raw.number.unwrap_or(0),
        age: raw.age.unwrap_or(0),
        nationality: UNKNOWN_NATIONALITY.to_string(),
        photo: raw.photo.clone(),
        x: coord.x,
        y: coord.y,
        is_starter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    fn raw(id: PlayerId, position: &str, number: Option<u32>) -> RawPlayer {
        RawPlayer::new(id, &format!("Player {id}"), position, number)
    }

    fn ids(players: &[SquadPlayer]) -> Vec<PlayerId> {
        players.iter().map(|p| p.id).collect()
    }

    /// 2 GK, 6 DEF, 5 MID, 4 FWD = 17 players, shuffled
    fn full_squad() -> Vec<RawPlayer> {
        vec![
            raw(9, "Attacker", Some(9)),
            raw(22, "Goalkeeper", Some(22)),
            raw(5, "Defender", Some(5)),
            raw(8, "Midfielder", Some(8)),
            raw(1, "Goalkeeper", Some(1)),
            raw(2, "Defender", Some(2)),
            raw(17, "Midfielder", Some(17)),
            raw(3, "Defender", Some(3)),
            raw(11, "Attacker", Some(11)),
            raw(4, "Defender", Some(4)),
            raw(6, "Midfielder", Some(6)),
            raw(23, "Defender", Some(23)),
            raw(10, "Midfielder", Some(10)),
            raw(7, "Attacker", Some(7)),
            raw(15, "Defender", Some(15)),
            raw(14, "Midfielder", Some(14)),
            raw(19, "Attacker", Some(19)),
        ]
    }

    #[test]
    fn test_full_squad_fills_all_slots() {
        let mapping = map_roster(&full_squad());

        assert_eq!(mapping.starters.len(), 11);
        assert_eq!(mapping.bench.len(), 6);
        assert!(mapping.skipped.is_empty());

        assert_eq!(ids(&mapping.starters), vec![1, 2, 3, 4, 5, 6, 8, 10, 7, 9, 11]);
        assert_eq!(ids(&mapping.bench), vec![22, 15, 23, 14, 17, 19]);
    }

    #[test]
    fn test_starters_get_slot_coordinates_in_order() {
        let mapping = map_roster(&full_squad());
        let coords: Vec<(f32, f32)> = mapping.starters.iter().map(|p| (p.x, p.y)).collect();

        assert_eq!(
            coords,
            vec![
                (50.0, 89.0),
                (18.0, 70.0),
                (40.0, 72.0),
                (60.0, 72.0),
                (82.0, 70.0),
                (30.0, 45.0),
                (50.0, 50.0),
                (70.0, 45.0),
                (25.0, 25.0),
                (50.0, 15.0),
                (75.0, 25.0),
            ]
        );
        assert!(mapping.starters.iter().all(|p| p.is_starter));
    }

    #[test]
    fn test_bench_players_at_origin() {
        let mapping = map_roster(&full_squad());
        for player in &mapping.bench {
            assert!(!player.is_starter);
            assert_eq!(player.coord(), PitchCoord::BENCH);
        }
    }

    #[test]
    fn test_formation_scenario_extra_defender_benched() {
        let input = vec![
            raw(1, "Goalkeeper", Some(1)),
            raw(6, "Defender", Some(6)),
            raw(2, "Defender", Some(2)),
            raw(5, "Defender", Some(5)),
            raw(3, "Defender", Some(3)),
            raw(4, "Defender", Some(4)),
            raw(8, "Midfielder", Some(8)),
            raw(10, "Midfielder", Some(10)),
            raw(9, "Attacker", Some(9)),
        ];

        let mapping = map_roster(&input);

        assert_eq!(mapping.starters.len(), 8);
        let count = |pos: Position| mapping.starters.iter().filter(|p| p.position == pos).count();
        assert_eq!(count(Position::GK), 1);
        assert_eq!(count(Position::DEF), 4);
        assert_eq!(count(Position::MID), 2);
        assert_eq!(count(Position::FWD), 1);

        let def_numbers: Vec<u32> = mapping
            .starters
            .iter()
            .filter(|p| p.position == Position::DEF)
            .map(|p| p.number)
            .collect();
        assert_eq!(def_numbers, vec![2, 3, 4, 5]);

        assert_eq!(mapping.bench.len(), 1);
        assert_eq!(mapping.bench[0].number, 6);
        assert_eq!(mapping.bench[0].position, Position::DEF);
    }

    #[test]
    fn test_lowest_numbered_goalkeeper_starts() {
        let input = vec![
            raw(30, "Goalkeeper", None),
            raw(31, "Goalkeeper", Some(31)),
            raw(13, "Goalkeeper", Some(13)),
        ];

        let mapping = map_roster(&input);
        assert_eq!(ids(&mapping.starters), vec![13]);
        assert_eq!(ids(&mapping.bench), vec![31, 30]);
    }

    #[test]
    fn test_numberless_goalkeeper_starts_when_alone() {
        let mapping = map_roster(&[raw(40, "Goalkeeper", None)]);
        assert_eq!(ids(&mapping.starters), vec![40]);
        assert_eq!(mapping.starters[0].number, 0);
    }

    #[test]
    fn test_zero_number_sorts_last() {
        let input = vec![
            raw(50, "Midfielder", Some(0)),
            raw(51, "Midfielder", Some(99)),
            raw(52, "Midfielder", Some(12)),
            raw(53, "Midfielder", Some(4)),
        ];

        let mapping = map_roster(&input);
        assert_eq!(ids(&mapping.starters), vec![53, 52, 51]);
        assert_eq!(ids(&mapping.bench), vec![50]);
    }

    #[test]
    fn test_equal_numbers_keep_input_order() {
        let input = vec![
            raw(60, "Attacker", None),
            raw(61, "Attacker", None),
            raw(62, "Attacker", None),
            raw(63, "Attacker", None),
        ];

        let mapping = map_roster(&input);
        assert_eq!(ids(&mapping.starters), vec![60, 61, 62]);
        assert_eq!(ids(&mapping.bench), vec![63]);
    }

    #[test]
    fn test_unknown_positions_are_reported_not_mapped() {
        let input = vec![
            raw(1, "Goalkeeper", Some(1)),
            raw(70, "Coach", None),
            raw(71, "goalkeeper", Some(2)),
        ];

        let mapping = map_roster(&input);
        assert_eq!(mapping.mapped_count(), 1);
        assert_eq!(mapping.skipped.iter().map(|p| p.id).collect::<Vec<_>>(), vec![70, 71]);
    }

    #[test]
    fn test_field_normalization() {
        let input = vec![
            raw(1, "Goalkeeper", Some(1)).with_age(31).with_photo("gk.png"),
            raw(12, "Goalkeeper", None),
        ];

        let mapping = map_roster(&input);
        let starter = &mapping.starters[0];
        assert_eq!(starter.position, Position::GK);
        assert_eq!(starter.age, 31);
        assert_eq!(starter.photo.as_deref(), Some("gk.png"));
        assert_eq!(starter.nationality, UNKNOWN_NATIONALITY);

        let benched = &mapping.bench[0];
        assert_eq!(benched.number, 0);
        assert_eq!(benched.age, 0);
        assert_eq!(benched.photo, None);
        assert_eq!(benched.nationality, UNKNOWN_NATIONALITY);
    }

    #[test]
    fn test_idempotent() {
        let input = full_squad();
        assert_eq!(map_roster(&input), map_roster(&input));
    }

    #[test]
    fn test_empty_roster() {
        let mapping = map_roster(&[]);
        assert!(mapping.starters.is_empty());
        assert!(mapping.bench.is_empty());
        assert!(mapping.skipped.is_empty());
    }

    #[test]
    fn test_custom_formation_without_forward_line_benches_attackers() {
        let mut formation = Formation::default_433();
        formation.lines.retain(|line| line.position != Position::FWD);

        let mapping = map_roster_with(&full_squad(), &formation);
        assert_eq!(mapping.starters.len(), 8);
        assert_eq!(mapping.bench.iter().filter(|p| p.position == Position::FWD).count(), 4);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_label() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("Goalkeeper".to_string()),
                Just("Defender".to_string()),
                Just("Midfielder".to_string()),
                Just("Attacker".to_string()),
                Just("Coach".to_string()),
            ]
        }

        fn arb_roster() -> impl Strategy<Value = Vec<RawPlayer>> {
            prop::collection::vec((arb_label(), prop::option::of(0u32..40)), 0..40).prop_map(
                |entries| {
                    entries
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (label, number))| raw(idx as PlayerId, &label, number))
                        .collect()
                },
            )
        }

        proptest! {
            #[test]
            fn prop_counts_bounded(roster in arb_roster()) {
                let mapping = map_roster(&roster);
                let unknown = roster.iter().filter(|p| Position::from_api_label(&p.position).is_none()).count();

                prop_assert!(mapping.starters.len() <= 11);
                prop_assert_eq!(mapping.mapped_count(), roster.len() - unknown);
                prop_assert_eq!(mapping.skipped.len(), unknown);
            }

            #[test]
            fn prop_single_goalkeeper_starter(roster in arb_roster()) {
                let mapping = map_roster(&roster);
                let has_gk = roster.iter().any(|p| p.position == "Goalkeeper");
                let gk_starters = mapping.starters.iter().filter(|p| p.position == Position::GK).count();
                prop_assert_eq!(gk_starters, usize::from(has_gk));
            }

            #[test]
            fn prop_idempotent(roster in arb_roster()) {
                prop_assert_eq!(map_roster(&roster), map_roster(&roster));
            }
        }
    }
}
