//! Tool Execution Service - Runs the game tools an agent asks for
//!
//! Both tools are pure draws from the injected random source: the dice
//! roller reports a d6 result and the event picker returns one of the fixed
//! adventure events. Neither tool can fail.

use tracing::{debug, instrument};

use crate::application::ports::outbound::RandomPort;
use crate::domain::value_objects::{GameTool, ADVENTURE_EVENTS, DIE_FACES};

/// Service for executing game tools
pub struct ToolExecutionService<R: RandomPort> {
    random: R,
}

impl<R: RandomPort> ToolExecutionService<R> {
    /// Create a new tool execution service drawing from `random`
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Execute a tool call and return the text handed back to the model
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use fantasy_adventure::application::services::ToolExecutionService;
    /// use fantasy_adventure::infrastructure::random::SystemRandom;
    ///
    /// let service = ToolExecutionService::new(SystemRandom::new());
    /// let result = service.execute_tool(GameTool::RollDice);
    /// assert!(result.starts_with("🎲 You rolled a "));
    /// ```
    #[instrument(skip(self))]
    pub fn execute_tool(&self, tool: GameTool) -> String {
        let output = match tool {
            GameTool::RollDice => self.roll_dice(),
            GameTool::GenerateEvent => self.generate_event(),
        };
        debug!(tool = tool.name(), output = %output, "Tool executed");
        output
    }

    /// Roll a six-sided die
    pub fn roll_dice(&self) -> String {
        let value = self.random.gen_range(1, DIE_FACES);
        format!("🎲 You rolled a {}!", value)
    }

    /// Pick one of the adventure events
    pub fn generate_event(&self) -> String {
        let last = ADVENTURE_EVENTS.len() as i32 - 1;
        let index = self.random.gen_range(0, last).clamp(0, last) as usize;
        ADVENTURE_EVENTS[index].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::SystemRandom;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed random for testing.
    struct FixedRandom(i32);

    impl RandomPort for FixedRandom {
        fn gen_range(&self, _min: i32, _max: i32) -> i32 {
            self.0
        }
    }

    /// Cycles through `min..=max` in order.
    struct CyclingRandom(AtomicUsize);

    impl RandomPort for CyclingRandom {
        fn gen_range(&self, min: i32, max: i32) -> i32 {
            let span = (max - min + 1) as usize;
            min + (self.0.fetch_add(1, Ordering::SeqCst) % span) as i32
        }
    }

    fn parse_roll(output: &str) -> i32 {
        output
            .trim_start_matches("🎲 You rolled a ")
            .trim_end_matches('!')
            .parse()
            .unwrap_or_else(|_| panic!("unexpected dice output: {output}"))
    }

    /// Pearson's chi-square statistic against a uniform distribution
    fn chi_square(counts: &[usize], samples: usize) -> f64 {
        let expected = samples as f64 / counts.len() as f64;
        counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    #[test]
    fn test_roll_dice_format() {
        let service = ToolExecutionService::new(FixedRandom(4));
        assert_eq!(service.roll_dice(), "🎲 You rolled a 4!");
        assert_eq!(service.execute_tool(GameTool::RollDice), "🎲 You rolled a 4!");
    }

    #[test]
    fn test_generate_event_maps_every_index() {
        let service = ToolExecutionService::new(CyclingRandom(AtomicUsize::new(0)));
        let picked: Vec<String> = (0..4).map(|_| service.generate_event()).collect();
        assert_eq!(picked, ADVENTURE_EVENTS.map(String::from).to_vec());
    }

    #[test]
    fn test_roll_dice_stays_in_range() {
        let service = ToolExecutionService::new(SystemRandom::new());
        for _ in 0..1_000 {
            let value = parse_roll(&service.roll_dice());
            assert!((1..=6).contains(&value), "rolled {value}");
        }
    }

    #[test]
    fn test_roll_dice_is_uniform() {
        let service = ToolExecutionService::new(SystemRandom::new());
        let samples = 6_000;
        let mut counts = [0usize; 6];
        for _ in 0..samples {
            counts[(parse_roll(&service.roll_dice()) - 1) as usize] += 1;
        }

        // 5 degrees of freedom; the 0.001 critical value is 20.5
        let statistic = chi_square(&counts, samples);
        assert!(statistic < 30.0, "chi-square {statistic} for {counts:?}");
    }

    #[test]
    fn test_generate_event_is_uniform_over_known_events() {
        let service = ToolExecutionService::new(SystemRandom::new());
        let samples = 4_000;
        let mut counts = [0usize; 4];
        for _ in 0..samples {
            let event = service.execute_tool(GameTool::GenerateEvent);
            let index = ADVENTURE_EVENTS
                .iter()
                .position(|known| *known == event)
                .unwrap_or_else(|| panic!("unknown event: {event}"));
            counts[index] += 1;
        }

        // 3 degrees of freedom; the 0.001 critical value is 16.3
        let statistic = chi_square(&counts, samples);
        assert!(statistic < 25.0, "chi-square {statistic} for {counts:?}");
    }
}
