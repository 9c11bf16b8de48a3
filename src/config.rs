use crate::algorithms::{Algorithm, DEFAULT_DEPTH_LIMIT};
use crate::error::ConfigError;
use crate::grid::Position;
use crate::obstacles::DEFAULT_SPAWN_PROBABILITY;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Uninformed search on a grid with spawning obstacles", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// Start cell as `row,col`; defaults to (1, 1)
    #[arg(long)]
    pub start: Option<Position>,

    /// Target cell as `row,col`; defaults to (rows-2, cols-2)
    #[arg(long)]
    pub target: Option<Position>,

    #[arg(long, default_value_t = 0.2)]
    pub wall_probability: f64,

    /// Chance per search step that a new obstacle appears
    #[arg(long, default_value_t = DEFAULT_SPAWN_PROBABILITY)]
    pub obstacle_probability: f64,

    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// bfs, dfs, ucs, dls, iddfs, bidirectional or all
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    /// Seed for walls and obstacles; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip printing the final grid
    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["uninformed_search"])
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("wall probability", self.wall_probability),
            ("obstacle probability", self.obstacle_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        self.algorithms()?;
        self.endpoints()?;
        Ok(())
    }

    /// Algorithms selected by `--algorithm`, in run order.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, ConfigError> {
        if self.algorithm.trim().eq_ignore_ascii_case("all") {
            return Ok(Algorithm::ALL.to_vec());
        }
        Ok(vec![self.algorithm.parse::<Algorithm>()?])
    }

    /// Explicit endpoints, or (1, 1) and (rows-2, cols-2) when omitted.
    pub fn endpoints(&self) -> Result<(Position, Position), ConfigError> {
        let no_default = || ConfigError::NoDefaultEndpoints {
            rows: self.rows,
            cols: self.cols,
        };
        let start = self.start.unwrap_or(Position::new(1, 1));
        let target = match self.target {
            Some(target) => target,
            None => Position::new(
                self.rows.checked_sub(2).ok_or_else(no_default)?,
                self.cols.checked_sub(2).ok_or_else(no_default)?,
            ),
        };
        Ok((start, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = Config::default();
        assert_eq!(config.rows, 20);
        assert_eq!(config.depth_limit, 15);
        assert_eq!(config.obstacle_probability, 0.02);
        assert_eq!(config.algorithms().unwrap(), Algorithm::ALL.to_vec());
        assert_eq!(
            config.endpoints().unwrap(),
            (Position::new(1, 1), Position::new(18, 18))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_explicit_choices() {
        let config = Config::parse_from([
            "uninformed_search",
            "--algorithm",
            "iddfs",
            "--start",
            "0,0",
            "--target",
            "4,7",
            "--seed",
            "9",
        ]);
        assert_eq!(config.algorithms().unwrap(), vec![Algorithm::IterativeDeepening]);
        assert_eq!(config.endpoints().unwrap(), (Position::new(0, 0), Position::new(4, 7)));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rejects_bad_settings() {
        let mut config = Config::default();
        config.obstacle_probability = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Probability { .. })));

        let mut config = Config::default();
        config.algorithm = "greedy".into();
        assert!(matches!(config.validate(), Err(ConfigError::UnknownAlgorithm(_))));

        let mut config = Config::default();
        config.rows = 1;
        assert!(matches!(config.endpoints(), Err(ConfigError::NoDefaultEndpoints { .. })));
    }
}
