//! Knight movement
//!
//! `|Δfile| * |Δrank| == 2` has exactly the L-shaped solutions (1, 2) and
//! (2, 1). Knights jump, so occupancy between the squares is irrelevant.

use crate::types::Square;

/// Knight geometry: an L-shaped jump, blockers ignored
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    (df as i16 * dr as i16).abs() == 2
}
