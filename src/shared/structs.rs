/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::RequestError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction the cabin has to travel from `from` to reach `to`.
    /// Equal floors resolve to `Down`.
    pub fn towards(from: u8, to: u8) -> Direction {
        if from < to {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/**
 * A single passenger request.
 *
 * A request starts life as a call (`picked_up == false`) waiting on `on_floor`.
 * Once the cabin visits `on_floor` the passenger boards, the request is flipped to
 * `picked_up` and from then on it waits on `to_floor`.
 *
 * # Fields
 * - `on_floor`:    Floor where the passenger called the elevator.
 * - `to_floor`:    Floor the passenger wants to travel to.
 * - `picked_up`:   Whether the passenger is inside the cabin.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    on_floor: u8,
    to_floor: u8,
    picked_up: bool,
}

impl Request {
    pub fn new(on_floor: u8, to_floor: u8, num_floors: u8) -> Result<Request, RequestError> {
        for floor in [on_floor, to_floor] {
            if floor == 0 || floor > num_floors {
                return Err(RequestError::FloorOutOfRange { floor, num_floors });
            }
        }
        if on_floor == to_floor {
            return Err(RequestError::SameFloor(on_floor));
        }

        Ok(Request {
            on_floor,
            to_floor,
            picked_up: false,
        })
    }

    pub fn on_floor(&self) -> u8 {
        self.on_floor
    }

    pub fn to_floor(&self) -> u8 {
        self.to_floor
    }

    pub fn is_picked_up(&self) -> bool {
        self.picked_up
    }

    /// The floor the cabin has to visit next to serve this request.
    pub fn active_floor(&self) -> u8 {
        if self.picked_up {
            self.to_floor
        } else {
            self.on_floor
        }
    }

    pub fn pick_up(&mut self) {
        self.picked_up = true;
    }
}

/// Cabin state, owned exclusively by the motion controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinState {
    pub floor: u8,
    pub stopped: bool,
    pub direction: Direction,
    pub time_since_last_floor_change: Instant,
}

impl CabinState {
    pub fn new(now: Instant) -> CabinState {
        CabinState {
            floor: 1,
            stopped: true,
            direction: Direction::Up,
            time_since_last_floor_change: now,
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
