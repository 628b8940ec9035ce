/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::clock::{Clock, SystemClock};
use crate::elevator::request_store::RequestStore;
use crate::elevator::scheduler::look_schedule;
use crate::elevator::status::{StatusEvent, StatusReport};
use crate::shared::{CabinState, ConfigError, Direction, Request, RequestError};

/**
 * Single-cabin motion controller.
 *
 * The `Elevator` owns the cabin state, the pending requests and the LOOK visit
 * schedule derived from them. It is driven by an external loop calling `update()`
 * once per tick; new requests can be injected between ticks with `add_request()`.
 * Every notable event is published as a `StatusReport`.
 *
 * # Fields
 * - `num_floors`:  Number of floors served, numbered from 1.
 * - `speed`:       Travel time between two adjacent floors.
 * - `clock`:       Monotonic time source deciding when a floor change is due.
 * - `status_tx`:   Sends a status report for every event.
 * - `state`:       Cabin floor, direction, stopped flag and movement timer.
 * - `store`:       Pending requests keyed by their active floor.
 * - `schedule`:    LOOK visit order over the store's target floors.
 */
pub struct Elevator<C: Clock = SystemClock> {
    num_floors: u8,
    speed: Duration,
    clock: C,
    status_tx: cbc::Sender<StatusReport>,

    state: CabinState,
    store: RequestStore,
    schedule: Vec<u8>,
}

impl<C: Clock> Elevator<C> {
    pub fn new(
        config: &ElevatorConfig,
        clock: C,
        status_tx: cbc::Sender<StatusReport>,
    ) -> Result<Elevator<C>, ConfigError> {
        let speed = config.travel_time()?;
        let state = CabinState::new(clock.now());
        let elevator = Elevator {
            num_floors: config.n_floors,
            speed,
            clock,
            status_tx,
            state,
            store: RequestStore::new(),
            schedule: Vec::new(),
        };
        elevator.report(StatusEvent::Startup {
            num_floors: config.n_floors,
            speed_secs: config.speed,
        });
        Ok(elevator)
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn floor(&self) -> u8 {
        self.state.floor
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped
    }

    pub fn state(&self) -> &CabinState {
        &self.state
    }

    pub fn schedule(&self) -> &[u8] {
        &self.schedule
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    /// Queues a request. With `rerank == false` the caller must call `rank_requests()` afterwards.
    /// Requests with a floor outside this building are rejected and leave the controller untouched.
    pub fn add_request(&mut self, request: Request, rerank: bool) -> Result<(), RequestError> {
        for floor in [request.on_floor(), request.to_floor()] {
            if floor == 0 || floor > self.num_floors {
                return Err(RequestError::FloorOutOfRange {
                    floor,
                    num_floors: self.num_floors,
                });
            }
        }

        self.enqueue(request, rerank);
        Ok(())
    }

    fn enqueue(&mut self, request: Request, rerank: bool) {
        // The cabin finished its last arrival but has not been idled yet
        if self.schedule.is_empty() && !self.state.stopped {
            self.handle_idle();
        }

        self.store.insert(request);
        if rerank {
            self.rank_requests();
        }

        if request.is_picked_up() {
            self.report(StatusEvent::InsideRequest {
                on_floor: request.on_floor(),
                to_floor: request.to_floor(),
            });
        } else {
            self.report(StatusEvent::CallReceived {
                floor: request.on_floor(),
            });
        }
    }

    /// Advances the controller by one tick.
    pub fn update(&mut self) {
        if self.schedule.is_empty() {
            self.handle_idle();
            return;
        }

        // Leaving idle: restart the movement timer and head for the first target
        if self.state.stopped {
            self.state.time_since_last_floor_change = self.clock.now();
            self.state.stopped = false;
            self.state.direction = Direction::towards(self.state.floor, self.schedule[0]);
            self.report(StatusEvent::MoveStarted {
                direction: self.state.direction,
            });
        }

        self.handle_requests();
    }

    /// Rebuilds the visit schedule from the current targets using LOOK.
    pub fn rank_requests(&mut self) {
        self.schedule = look_schedule(self.store.targets(), self.state.floor, self.state.direction);
    }

    fn handle_requests(&mut self) {
        if self.advance() {
            let floor = self.state.floor;
            if self.schedule.first() == Some(&floor) {
                self.report(StatusEvent::DestinationReached { floor });
            } else {
                self.report(StatusEvent::FloorReached { floor });
            }
        }

        if self.schedule.first() == Some(&self.state.floor) {
            self.handle_arrival(self.state.floor);
        }
    }

    /// Serves every request waiting on `floor`: calls become in-cabin requests,
    /// drop-offs are discarded.
    fn handle_arrival(&mut self, floor: u8) {
        for mut request in self.store.take_and_clear(floor) {
            if !request.is_picked_up() {
                request.pick_up();
                self.enqueue(request, false);
            }
        }

        self.rank_requests();

        if let Some(&next) = self.schedule.first() {
            self.state.direction = if self.state.floor > next {
                Direction::Down
            } else {
                Direction::Up
            };
        }
    }

    fn handle_idle(&mut self) {
        if !self.state.stopped {
            self.state.stopped = true;
            self.report(StatusEvent::Idle {
                floor: self.state.floor,
            });
        }
    }

    /// Moves the cabin one floor once the travel time has elapsed.
    /// Returns `true` if a new floor was reached.
    fn advance(&mut self) -> bool {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.state.time_since_last_floor_change);

        if !self.state.stopped && elapsed > self.speed {
            // Direction always points at a scheduled floor inside the building
            self.state.floor = match self.state.direction {
                Direction::Up => self.state.floor + 1,
                Direction::Down => self.state.floor - 1,
            };
            debug_assert!((1..=self.num_floors).contains(&self.state.floor));
            self.state.stopped = self.schedule.is_empty();
            self.state.time_since_last_floor_change = now;
            return true;
        }

        false
    }

    fn report(&self, event: StatusEvent) {
        debug!("{}", event);
        let report = StatusReport {
            event,
            floor: self.state.floor,
            stopped: self.state.stopped,
            direction: self.state.direction,
            schedule: self.schedule.clone(),
            targets: self.store.targets().iter().copied().collect(),
            num_floors: self.num_floors,
        };
        let _ = self.status_tx.send(report);
    }
}
