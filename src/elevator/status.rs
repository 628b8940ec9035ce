/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/

/// What happened to make the controller report its status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusEvent {
    Startup { num_floors: u8, speed_secs: f64 },
    CallReceived { floor: u8 },
    InsideRequest { on_floor: u8, to_floor: u8 },
    MoveStarted { direction: Direction },
    FloorReached { floor: u8 },
    DestinationReached { floor: u8 },
    Idle { floor: u8 },
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::Startup {
                num_floors,
                speed_secs,
            } => write!(
                f,
                "Starting Elevator (floors = {}, speed = {})",
                num_floors, speed_secs
            ),
            StatusEvent::CallReceived { floor } => {
                write!(f, "[CALLED] received call on floor {}", floor)
            }
            StatusEvent::InsideRequest { on_floor, to_floor } => write!(
                f,
                "[INSIDE] passenger on floor {} going to floor {}",
                on_floor, to_floor
            ),
            StatusEvent::MoveStarted { direction } => {
                write!(f, "[MOVE] starting to move {}", direction)
            }
            StatusEvent::FloorReached { floor } => write!(f, "[MOVE] reached floor {}", floor),
            StatusEvent::DestinationReached { floor } => {
                write!(f, "[MOVE] reached destination floor {}", floor)
            }
            StatusEvent::Idle { floor } => write!(f, "[IDLE] Waiting on floor {}", floor),
        }
    }
}

/**
 * Snapshot of the controller taken right after a status event.
 *
 * # Fields
 * - `event`:       The event being reported.
 * - `floor`:       Cabin floor.
 * - `stopped`:     Whether the cabin is at rest.
 * - `direction`:   Current direction of travel.
 * - `schedule`:    LOOK visit order.
 * - `targets`:     Floors with pending requests, ascending.
 * - `num_floors`:  Number of floors in the building.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub event: StatusEvent,
    pub floor: u8,
    pub stopped: bool,
    pub direction: Direction,
    pub schedule: Vec<u8>,
    pub targets: Vec<u8>,
    pub num_floors: u8,
}

impl StatusReport {
    /// Shaft picture, e.g. `L [.X..o.] H`.
    pub fn shaft(&self) -> String {
        let floors: String = (1..=self.num_floors)
            .map(|floor| {
                if floor == self.floor {
                    'X'
                } else if self.targets.contains(&floor) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect();
        format!("L [{}] H", floors)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.event)?;

        write!(
            f,
            "[STATUS] {{ floor = {}, stopped = {}, direction = {}, schedule = ",
            self.floor,
            if self.stopped { "YES" } else { "NO" },
            self.direction
        )?;
        for floor in &self.schedule {
            write!(f, "{}; ", floor)?;
        }
        writeln!(f, ", number of target floors = {} }}", self.targets.len())?;

        writeln!(f, "{}", self.shaft())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
