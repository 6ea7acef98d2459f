//! Weighted random draws from a candidate list.

use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::{
    error::{AgendaError, Result},
    models::{CandidateList, WheelDraw},
};

/// Spins the wheel of `list`, drawing one candidate with probability
/// proportional to its weight.
///
/// # Errors
///
/// Returns [`AgendaError::EmptyList`] when the list has no candidates and
/// [`AgendaError::InvalidInput`] when the weights cannot form a
/// distribution (all zero).
pub fn spin<R: Rng + ?Sized>(list: &CandidateList, rng: &mut R) -> Result<WheelDraw> {
    if list.candidates.is_empty() {
        return Err(AgendaError::EmptyList { id: list.id });
    }

    // Summed as u64 so a handful of u32::MAX weights cannot overflow
    let index = WeightedIndex::new(list.candidates.iter().map(|c| u64::from(c.weight)))
        .map_err(|e| AgendaError::invalid_input("weight").with_reason(e.to_string()))?;
    let candidate = list.candidates[index.sample(rng)].clone();
    let probability = f64::from(candidate.weight) / list.total_weight() as f64;

    Ok(WheelDraw {
        list_id: list.id,
        list_name: list.name.clone(),
        candidate,
        probability,
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::Candidate;

    fn list(weights: &[u32]) -> CandidateList {
        let created_at = Timestamp::UNIX_EPOCH;
        CandidateList {
            id: 3,
            user_id: "ada".to_string(),
            name: "Dinner".to_string(),
            description: None,
            candidates: weights
                .iter()
                .enumerate()
                .map(|(i, &weight)| Candidate {
                    id: i as u64 + 1,
                    list_id: 3,
                    label: format!("Option {}", i + 1),
                    weight,
                    created_at,
                })
                .collect(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        match spin(&list(&[]), &mut rng) {
            Err(AgendaError::EmptyList { id }) => assert_eq!(id, 3),
            other => panic!("Expected EmptyList, got {other:?}"),
        }
    }

    #[test]
    fn test_single_candidate_always_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let draw = spin(&list(&[4]), &mut rng).unwrap();
            assert_eq!(draw.candidate.label, "Option 1");
            assert_eq!(draw.probability, 1.0);
            assert_eq!(draw.list_name, "Dinner");
        }
    }

    #[test]
    fn test_zero_weight_candidate_is_never_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let draw = spin(&list(&[0, 1]), &mut rng).unwrap();
            assert_eq!(draw.candidate.id, 2);
        }
    }

    #[test]
    fn test_all_zero_weights_are_invalid_input() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            spin(&list(&[0, 0]), &mut rng),
            Err(AgendaError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_draws_follow_weights() {
        let mut rng = StdRng::seed_from_u64(2024);
        let candidates = list(&[9, 1]);
        let heavy = (0..2000)
            .filter(|_| spin(&candidates, &mut rng).unwrap().candidate.id == 1)
            .count();
        // Expected 1800; allow generous slack for sampling noise.
        assert!((1650..=1950).contains(&heavy), "heavy drawn {heavy} times");
    }

    #[test]
    fn test_maximum_weights_draw_evenly() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = list(&[u32::MAX, u32::MAX]);
        let first = (0..400)
            .filter(|_| spin(&candidates, &mut rng).unwrap().candidate.id == 1)
            .count();
        assert!((120..=280).contains(&first), "first drawn {first} times");

        let draw = spin(&candidates, &mut rng).unwrap();
        assert!((draw.probability - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_probability_reports_share_of_total_weight() {
        let mut rng = StdRng::seed_from_u64(5);
        let draw = spin(&list(&[1, 3]), &mut rng).unwrap();
        let expected = if draw.candidate.id == 1 { 0.25 } else { 0.75 };
        assert!((draw.probability - expected).abs() < f64::EPSILON);
    }
}
