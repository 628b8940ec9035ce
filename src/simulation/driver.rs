/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::elevator::{Elevator, StatusReport, SystemClock};
use crate::shared::ConfigError;
use crate::simulation::PassengerGenerator;

/**
 * Polling loop driving the elevator against wall-clock time.
 *
 * Everything runs on the calling thread: once per request window the generator
 * gets a chance to inject a passenger, and every iteration ends with one
 * `Elevator::update()`.
 *
 * # Fields
 * - `elevator`:        The controller being driven.
 * - `generator`:       Source of random passenger requests.
 * - `tick_interval`:   Upper bound on the time between two updates.
 * - `request_window`:  Time between two generator polls.
 * - `max_duration`:    Optional run time after which the loop ends by itself.
 */
pub struct Simulation {
    elevator: Elevator<SystemClock>,
    generator: PassengerGenerator,
    tick_interval: Duration,
    request_window: Duration,
    max_duration: Option<Duration>,
}

impl Simulation {
    pub fn new(config: &Config, status_tx: cbc::Sender<StatusReport>) -> Result<Simulation, ConfigError> {
        config.validate()?;

        Ok(Simulation {
            elevator: Elevator::new(&config.elevator, SystemClock, status_tx)?,
            generator: PassengerGenerator::new(
                config.elevator.n_floors,
                config.simulation.passenger_frequency,
                config.simulation.seed,
            ),
            tick_interval: config.simulation.tick_interval(),
            request_window: config.simulation.request_window(),
            max_duration: config.simulation.max_duration(),
        })
    }

    /// Runs until `terminate_rx` receives a message or is disconnected,
    /// or until the configured duration has passed.
    pub fn run(mut self, terminate_rx: cbc::Receiver<()>) {
        let started = Instant::now();
        let request_ticker = cbc::tick(self.request_window);

        loop {
            cbc::select! {
                recv(terminate_rx) -> _ => {
                    info!("Simulation terminated");
                    break;
                }
                recv(request_ticker) -> _ => {
                    if let Some(request) = self.generator.poll() {
                        if let Err(e) = self.elevator.add_request(request, true) {
                            warn!("Rejected generated request: {}", e);
                        }
                    }
                }
                default(self.tick_interval) => {}
            }

            self.elevator.update();

            if let Some(max_duration) = self.max_duration {
                if started.elapsed() >= max_duration {
                    info!("Simulation finished after {:?}", max_duration);
                    break;
                }
            }
        }
    }
}
