//! Summary figures shown under the watchlist.

use serde::Serialize;

use super::entry::PlayerWatchEntry;

/// Rise probability (percent) above which a player counts as a likely riser.
pub const LIKELY_RISE_THRESHOLD: f64 = 70.0;
/// Form above which a player counts as being in excellent form.
pub const EXCELLENT_FORM_THRESHOLD: f64 = 7.5;

/// Aggregates over the whole tracked collection, independent of the active
/// filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Names of players likely to rise in price, in collection order
    pub likely_risers: Vec<String>,
    pub in_form_count: usize,
    /// Mean expected points rounded to the nearest whole point, halves up
    pub average_expected_points: Option<i64>,
}

impl Insights {
    pub fn from_players(players: &[PlayerWatchEntry]) -> Self {
        let likely_risers = players
            .iter()
            .filter(|p| p.price_rise_probability > LIKELY_RISE_THRESHOLD)
            .map(|p| p.name.clone())
            .collect();

        let in_form_count = players
            .iter()
            .filter(|p| p.form > EXCELLENT_FORM_THRESHOLD)
            .count();

        let average_expected_points = if players.is_empty() {
            None
        } else {
            let total: f64 = players.iter().map(|p| p.expected_points).sum();
            Some(round_half_up(total / players.len() as f64))
        };

        Self {
            likely_risers,
            in_form_count,
            average_expected_points,
        }
    }
}

/// Rounds `.5` towards positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::sample_players;

    #[test]
    fn test_sample_insights() {
        let insights = Insights::from_players(&sample_players());
        assert_eq!(
            insights.likely_risers,
            vec!["Cole Palmer".to_string(), "Bruno Guimarães".to_string()]
        );
        // Palmer 8.2 and Guimarães 7.8 clear 7.5; Porro 7.1 and Núñez 6.5 do not
        assert_eq!(insights.in_form_count, 2);
        // (28 + 18 + 22 + 25) / 4 = 23.25
        assert_eq!(insights.average_expected_points, Some(23));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut players = sample_players();
        players.truncate(1);
        players[0].price_rise_probability = LIKELY_RISE_THRESHOLD;
        players[0].form = EXCELLENT_FORM_THRESHOLD;

        let insights = Insights::from_players(&players);
        assert!(insights.likely_risers.is_empty());
        assert_eq!(insights.in_form_count, 0);
    }

    #[test]
    fn test_average_rounds_halves_up() {
        let mut players = sample_players();
        players.truncate(2);
        players[0].expected_points = -2.0;
        players[1].expected_points = -3.0;
        assert_eq!(
            Insights::from_players(&players).average_expected_points,
            Some(-2)
        );

        players[0].expected_points = 2.0;
        players[1].expected_points = 3.0;
        assert_eq!(
            Insights::from_players(&players).average_expected_points,
            Some(3)
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Insights::from_players(&sample_players())).unwrap();
        assert_eq!(json["inFormCount"], 2);
        assert_eq!(json["averageExpectedPoints"], 23);
        assert_eq!(json["likelyRisers"][0], "Cole Palmer");
    }

    #[test]
    fn test_empty_collection() {
        let insights = Insights::from_players(&[]);
        assert!(insights.likely_risers.is_empty());
        assert_eq!(insights.in_form_count, 0);
        assert_eq!(insights.average_expected_points, None);
    }
}
