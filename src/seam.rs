// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam through an energy map
//!
//! The seam is the minimum-cost connected path from the top row to
//! the bottom row, where "connected" means each row's column is at
//! most one away from the previous row's.  This is a shortest path on
//! a grid-shaped DAG with out-degree three, solved with the usual
//! dynamic-programming sweep: accumulate per-row costs forward, then
//! backtrack through recorded predecessors.
//!
//! Only the previous row of the cost table is ever consulted, so the
//! costs live in two alternating row buffers.  The predecessor table
//! has to survive until backtracking and is kept whole.

use crate::cq;
use crate::raster::Raster;
use std::mem;

/// The stand-in cost of a step wider than one column.  The candidate
/// scan below never offers such a step, but the constant keeps the
/// general transition rule in one self-describing place.
const WIDE_STEP_COST: f64 = 10_000_000.0;

// Every legal step costs one unit, which adds a constant per row and
// so never changes which seam wins.
fn step_cost(to: u32, from: u32) -> f64 {
    let step = cq!(to > from, to - from, from - to);
    cq!(step <= 1, 1.0, WIDE_STEP_COST)
}

/// Given an energy map, return the list of x-coordinates that, when
/// zipped with the range (0..height), give the coordinates of the
/// cheapest top-to-bottom seam.  Ties are broken toward the lowest
/// column index, both among a cell's candidate predecessors and in
/// the final bottom-row scan, so the result is deterministic.
pub fn find_vertical_seam(energy: &Raster<f64>) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mw = width - 1;

    let mut parents: Raster<u32> = Raster::new(width, height);
    let mut above: Vec<f64> = (0..width).map(|x| energy[(x, 0)]).collect();
    let mut current: Vec<f64> = vec![0.0; width as usize];

    for y in 1..height {
        for x in 0..width {
            let lo = cq!(x == 0, 0, x - 1);
            let hi = cq!(x == mw, mw, x + 1);

            let mut cheapest = step_cost(x, lo) + above[lo as usize];
            let mut parent = lo;
            for candidate in (lo + 1)..=hi {
                let cost = step_cost(x, candidate) + above[candidate as usize];
                if cost < cheapest {
                    cheapest = cost;
                    parent = candidate;
                }
            }
            current[x as usize] = energy[(x, y)] + cheapest;
            parents[(x, y)] = parent;
        }
        mem::swap(&mut above, &mut current);
    }

    // After the sweep the `above` buffer holds the bottom row's
    // accumulated costs.  First minimum wins.
    let mut seam_col = 0;
    let mut least = above[0];
    for x in 1..width {
        if above[x as usize] < least {
            least = above[x as usize];
            seam_col = x;
        }
    }

    // Working upwards, generate the column for every row, then flip
    // the list back into top-to-bottom order.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = parents[(seam_col, y)];
            acc
        })
        .into_iter()
        .rev()
        .collect()
}
