/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/**
 * Orders target floors for a LOOK sweep.
 *
 * Targets ahead of the cabin (in `direction`) are visited first, nearest first,
 * then the cabin turns around and visits the remaining targets, again nearest first.
 * A target on the cabin's own floor counts as already passed, so it is served
 * on the return sweep.
 *
 * # Arguments
 * - `targets`:     Distinct floors with pending requests.
 * - `floor`:       Current cabin floor.
 * - `direction`:   Current direction of travel.
 */
pub fn look_schedule<'a, I>(targets: I, floor: u8, direction: Direction) -> Vec<u8>
where
    I: IntoIterator<Item = &'a u8>,
{
    let mut below: Vec<u8> = Vec::new();
    let mut above: Vec<u8> = Vec::new();

    for &target in targets {
        if target < floor {
            below.push(target);
        } else if target > floor {
            above.push(target);
        } else {
            match direction {
                Direction::Up => below.push(target),
                Direction::Down => above.push(target),
            }
        }
    }

    // Diverge from the current position
    below.sort_unstable_by(|a, b| b.cmp(a));
    above.sort_unstable();

    let (mut first, second) = match direction {
        Direction::Up => (above, below),
        Direction::Down => (below, above),
    };
    first.extend(second);
    first
}
