/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Request;

/**
 * Random source of passenger requests.
 *
 * Each `poll()` is one chance for a passenger to show up. Start and destination
 * floors are uniform over the building and never equal.
 */
pub struct PassengerGenerator {
    rng: StdRng,
    num_floors: u8,
    frequency: f64,
}

impl PassengerGenerator {
    pub fn new(num_floors: u8, frequency: f64, seed: Option<u64>) -> PassengerGenerator {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PassengerGenerator {
            rng,
            num_floors,
            frequency,
        }
    }

    pub fn poll(&mut self) -> Option<Request> {
        if self.rng.gen::<f64>() >= self.frequency {
            return None;
        }

        let on_floor = self.rng.gen_range(1..=self.num_floors);
        let mut to_floor = self.rng.gen_range(1..self.num_floors);
        if to_floor >= on_floor {
            to_floor += 1;
        }

        match Request::new(on_floor, to_floor, self.num_floors) {
            Ok(request) => Some(request),
            Err(e) => {
                warn!("Discarding generated request: {}", e);
                None
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
