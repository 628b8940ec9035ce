/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use std::path::PathBuf;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;

/// Single-cabin elevator simulation with LOOK scheduling
#[derive(Parser, Debug)]
#[clap(name = "look-elevator", version)]
pub struct Cli {
    /// Number of floors in the building
    #[clap(value_name = "NUM_FLOORS")]
    pub num_floors: Option<u8>,

    /// Seconds the cabin needs to travel one floor
    #[clap(value_name = "ELEVATOR_SPEED")]
    pub speed: Option<f64>,

    /// Probability of a new passenger in each request window, between 0 and 1
    #[clap(value_name = "PASSENGER_FREQUENCY")]
    pub passenger_frequency: Option<f64>,

    /// Path to the config file [default: config.toml]
    #[clap(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the passenger generator
    #[clap(long)]
    pub seed: Option<u64>,

    /// Stop the simulation after this many seconds
    #[clap(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Print status reports as JSON lines
    #[clap(long)]
    pub json: bool,
}

impl Cli {
    /// Command-line values take precedence over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(num_floors) = self.num_floors {
            config.elevator.n_floors = num_floors;
        }
        if let Some(speed) = self.speed {
            config.elevator.speed = speed;
        }
        if let Some(frequency) = self.passenger_frequency {
            config.simulation.passenger_frequency = frequency;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.duration.is_some() {
            config.simulation.duration_secs = self.duration;
        }
        if self.json {
            config.output.json = true;
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
