//! Hint picking: reveal one cell of a random unfound word.

use crate::grid::{Placement, Position};
use rand::Rng;

/// Pick a hint cell: a uniformly random word from (targets − found), then a
/// uniformly random letter offset along its placement.
///
/// Returns `None` when every word is found, or when the chosen word was
/// never placed (a word the generator had to skip).
pub fn pick_hint<R: Rng + ?Sized>(
    targets: &[String],
    found: &[String],
    placements: &[Placement],
    rng: &mut R,
) -> Option<Position> {
    let remaining: Vec<&String> = targets.iter().filter(|w| !found.contains(w)).collect();
    if remaining.is_empty() {
        return None;
    }

    let word = remaining[rng.gen_range(0..remaining.len())];
    let placement = placements.iter().find(|p| &p.word == word)?;
    let offset = rng.gen_range(0..placement.len());

    Some(placement.cell_at(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn placement(word: &str, row: usize, col: usize, direction: Direction) -> Placement {
        Placement {
            word: word.to_string(),
            start: Position::new(row, col),
            direction,
        }
    }

    #[test]
    fn hint_lies_on_the_remaining_word() {
        let targets = vec!["CAT".to_string(), "DOG".to_string()];
        let found = vec!["CAT".to_string()];
        let placements = vec![
            placement("CAT", 0, 0, Direction::Right),
            placement("DOG", 4, 4, Direction::Down),
        ];

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let cell = pick_hint(&targets, &found, &placements, &mut rng).unwrap();
            assert!(placements[1].contains(cell));
        }
    }

    #[test]
    fn no_hint_when_all_found() {
        let targets = vec!["CAT".to_string()];
        let found = vec!["CAT".to_string()];
        let placements = vec![placement("CAT", 0, 0, Direction::Right)];

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_hint(&targets, &found, &placements, &mut rng), None);
    }

    #[test]
    fn no_hint_for_a_word_without_a_placement() {
        // The only remaining word was skipped by the generator.
        let targets = vec!["UNPLACED".to_string()];
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(pick_hint(&targets, &[], &[], &mut rng), None);
    }
}
