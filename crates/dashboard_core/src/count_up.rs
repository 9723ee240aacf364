use std::time::Duration;

use shared::domain::{Candidate, SHORTLIST_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpTiming {
    pub duration_ms: u64,
    pub min_step_ms: u64,
}

impl Default for CountUpTiming {
    fn default() -> Self {
        Self {
            duration_ms: 900,
            min_step_ms: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    increment: u32,
    step_ms: u64,
    total_steps: u32,
    steps_taken: u32,
    percent: bool,
}

impl CountUp {
    pub fn new(target: u32, percent: bool, timing: CountUpTiming) -> Self {
        let step_ms = if target == 0 {
            timing.min_step_ms
        } else {
            timing.min_step_ms.max(timing.duration_ms / u64::from(target))
        }
        .max(1);

        let increment = if target == 0 {
            0
        } else if timing.duration_ms == 0 {
            target
        } else {
            let ticks = timing.duration_ms as f64 / step_ms as f64;
            ((f64::from(target) / ticks).ceil() as u32).max(1)
        };

        let total_steps = if increment == 0 {
            0
        } else {
            target.div_ceil(increment)
        };

        Self {
            target,
            increment,
            step_ms,
            total_steps,
            steps_taken: 0,
            percent,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.steps_taken >= self.total_steps
    }

    pub fn current(&self) -> u32 {
        if self.is_finished() {
            self.target
        } else {
            self.steps_taken.saturating_mul(self.increment).min(self.target)
        }
    }

    /// Advances one step; `None` once the target has been reached.
    pub fn step(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.steps_taken += 1;
        Some(self.current())
    }

    /// Catches up to the number of steps due after `elapsed`.
    pub fn advance_to(&mut self, elapsed: Duration) -> u32 {
        let due = (elapsed.as_millis() / u128::from(self.step_ms)).min(u128::from(self.total_steps));
        self.steps_taken = self.steps_taken.max(due as u32);
        self.current()
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.current(), if self.percent { "%" } else { "" })
    }
}

/// Resolves a tile's count-up target: an explicit target wins, otherwise the
/// digits embedded in the display text. Anything unparseable is zero.
pub fn parse_stat_target(explicit: Option<&str>, text: &str) -> u32 {
    let source: String = match explicit {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => text.chars().filter(char::is_ascii_digit).collect(),
    };
    leading_integer(&source).unwrap_or(0)
}

fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Debug, Clone)]
pub struct StatTile {
    pub label: String,
    text: String,
    counter: Option<CountUp>,
}

impl StatTile {
    pub fn new(
        label: impl Into<String>,
        explicit_target: Option<&str>,
        text: impl Into<String>,
        timing: CountUpTiming,
    ) -> Self {
        let text = text.into();
        let target = parse_stat_target(explicit_target, &text);
        let counter = (target > 0).then(|| CountUp::new(target, text.contains('%'), timing));
        Self {
            label: label.into(),
            text,
            counter,
        }
    }

    pub fn counter(&self) -> Option<&CountUp> {
        self.counter.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.counter.as_ref().is_some_and(|counter| !counter.is_finished())
    }

    pub fn advance_to(&mut self, elapsed: Duration) {
        if let Some(counter) = self.counter.as_mut() {
            counter.advance_to(elapsed);
        }
    }

    pub fn display(&self) -> String {
        match &self.counter {
            Some(counter) => counter.display(),
            None => self.text.clone(),
        }
    }
}

pub fn dashboard_stats(candidates: &[Candidate], timing: CountUpTiming) -> Vec<StatTile> {
    let total = candidates.len();
    let shortlisted = candidates
        .iter()
        .filter(|c| c.match_score >= SHORTLIST_THRESHOLD)
        .count();
    let flagged = candidates.iter().filter(|c| c.is_ai_flagged()).count();
    let average = if total == 0 {
        0
    } else {
        let sum: u32 = candidates.iter().map(|c| u32::from(c.match_score)).sum();
        (f64::from(sum) / total as f64).round() as u32
    };

    vec![
        StatTile::new("Total Candidates", None, total.to_string(), timing),
        StatTile::new("Shortlisted", None, shortlisted.to_string(), timing),
        StatTile::new("AI Flagged", None, flagged.to_string(), timing),
        StatTile::new("Avg. Match", None, format!("{average}%"), timing),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_candidates;

    #[test]
    fn small_targets_count_by_one() {
        let counter = CountUp::new(6, false, CountUpTiming::default());
        assert_eq!(counter.step_interval(), Duration::from_millis(150));
        assert_eq!(counter.total_steps(), 6);
    }

    #[test]
    fn large_targets_use_minimum_step_and_bounded_steps() {
        let mut counter = CountUp::new(1000, false, CountUpTiming::default());
        assert_eq!(counter.step_interval(), Duration::from_millis(12));
        // 900 / 12 = 75 ticks, ceil(1000 / 75) = 14 per step.
        assert_eq!(counter.total_steps(), 72);

        let mut values = Vec::new();
        while let Some(value) = counter.step() {
            values.push(value);
        }
        assert_eq!(values.len(), 72);
        assert_eq!(values[0], 14);
        assert_eq!(values.last(), Some(&1000));
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(counter.step(), None);
    }

    #[test]
    fn advance_to_is_capped_at_target() {
        let mut counter = CountUp::new(83, true, CountUpTiming::default());
        assert_eq!(counter.advance_to(Duration::ZERO), 0);
        assert_eq!(counter.display(), "0%");
        counter.advance_to(Duration::from_secs(60));
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "83%");
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let mut counter = CountUp::new(
            40,
            false,
            CountUpTiming {
                duration_ms: 0,
                min_step_ms: 12,
            },
        );
        assert_eq!(counter.step(), Some(40));
        assert!(counter.is_finished());
    }

    #[test]
    fn parses_targets_like_the_page_markup() {
        assert_eq!(parse_stat_target(Some("120"), "0"), 120);
        assert_eq!(parse_stat_target(Some(""), "1,284 applicants"), 1284);
        assert_eq!(parse_stat_target(None, "94%"), 94);
        assert_eq!(parse_stat_target(Some("abc"), "12"), 0);
        assert_eq!(parse_stat_target(None, "n/a"), 0);
    }

    #[test]
    fn zero_target_tiles_keep_their_text() {
        let tile = StatTile::new("Pending", None, "n/a", CountUpTiming::default());
        assert!(tile.counter().is_none());
        assert!(!tile.is_animating());
        assert_eq!(tile.display(), "n/a");
    }

    #[test]
    fn derives_seed_stats() {
        let mut tiles = dashboard_stats(&seed_candidates(), CountUpTiming::default());
        for tile in &mut tiles {
            tile.advance_to(Duration::from_secs(5));
        }
        let shown: Vec<(String, String)> = tiles
            .iter()
            .map(|tile| (tile.label.clone(), tile.display()))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("Total Candidates".to_string(), "6".to_string()),
                ("Shortlisted".to_string(), "4".to_string()),
                ("AI Flagged".to_string(), "2".to_string()),
                ("Avg. Match".to_string(), "83%".to_string()),
            ]
        );
    }
}
