/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::{BTreeMap, BTreeSet};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Request;

/**
 * Pending requests keyed by the floor where each one is currently active.
 *
 * A floor is in `targets` if and only if its request list is non-empty.
 * Requests sharing a floor are kept in insertion order.
 */
#[derive(Debug, Default, Clone)]
pub struct RequestStore {
    requests: BTreeMap<u8, Vec<Request>>,
    targets: BTreeSet<u8>,
}

impl RequestStore {
    pub fn new() -> RequestStore {
        RequestStore::default()
    }

    /// Queues `request` on its active floor: `to_floor` once picked up, `on_floor` otherwise.
    pub fn insert(&mut self, request: Request) {
        let floor = request.active_floor();
        self.requests.entry(floor).or_default().push(request);
        self.targets.insert(floor);
    }

    /// Removes and returns every request waiting on `floor`.
    /// Returns an empty list if nothing is waiting there.
    pub fn take_and_clear(&mut self, floor: u8) -> Vec<Request> {
        self.targets.remove(&floor);
        self.requests.remove(&floor).unwrap_or_default()
    }

    /// Distinct floors with at least one pending request, in ascending order.
    pub fn targets(&self) -> &BTreeSet<u8> {
        &self.targets
    }

    pub fn requests_on(&self, floor: u8) -> &[Request] {
        self.requests.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.values().map(Vec::len).sum()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
