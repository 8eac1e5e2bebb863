use uttt::Seats;

use crate::player::{clamp_rating, PlayerProfile};

/// The probability that a player rated `rating` beats one rated `opponent_rating`.
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / 400.0))
}

/// Computes the new ratings of both players after a decisive game.
///
/// `score` is the result from X's point of view, `1.0` if X won and `0.0`
/// if O won. The step size grows with the average rating of the two
/// players, raised to `k_factor / 50`. Results are clamped to the valid
/// rating range.
pub fn update_ratings(players: Seats<&PlayerProfile>, score: f64) -> Seats<f64> {
    let (x, o) = (players.x, players.o);
    let expected_x = expected_score(x.rating, o.rating);
    let expected_o = expected_score(o.rating, x.rating);

    let average = (x.rating + o.rating) / 2.0;
    let step_x = average.powf(f64::from(x.k_factor) / 50.0);
    let step_o = average.powf(f64::from(o.k_factor) / 50.0);

    Seats::new(
        clamp_rating(x.rating + step_x * (score - expected_x)),
        clamp_rating(o.rating + step_o * ((1.0 - score) - expected_o)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::MAX_RATING;

    #[test]
    fn equal_ratings_expect_half() {
        assert_eq!(expected_score(1800.0, 1800.0), 0.5);
        assert!((expected_score(2400.0, 2000.0) - 0.909).abs() < 0.001);
    }

    #[test]
    fn winner_gains_what_loser_loses() {
        let x = PlayerProfile::with_defaults("alice");
        let o = PlayerProfile::with_defaults("bob");
        let new = update_ratings(Seats::new(&x, &o), 1.0);
        // 2500^(20/50) / 2 ≈ 11.43
        assert!((new.x - 2511.43).abs() < 0.05, "{}", new.x);
        assert!((new.x + new.o - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn upset_moves_ratings_further() {
        let strong = PlayerProfile::new("strong", 3000.0, 20);
        let weak = PlayerProfile::new("weak", 2000.0, 20);
        let expected = update_ratings(Seats::new(&strong, &weak), 1.0);
        let upset = update_ratings(Seats::new(&strong, &weak), 0.0);
        assert!(upset.o - weak.rating > expected.x - strong.rating);
        assert!(upset.x < strong.rating);
    }

    #[test]
    fn ratings_stay_in_range() {
        let top = PlayerProfile::new("top", MAX_RATING, 40);
        let other = PlayerProfile::new("other", MAX_RATING, 40);
        let new = update_ratings(Seats::new(&top, &other), 1.0);
        assert_eq!(new.x, MAX_RATING);
    }
}
