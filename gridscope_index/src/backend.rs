// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query trait shared by the bucket index and the brute-force scan.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use gridscope_grid::CellRange;

/// A source of entity slots that can be queried by cell rectangle.
pub trait CellQuery {
    /// Visit slots of placed entities whose cell lies in `range`.
    ///
    /// Visiting stops early when `f` returns [`ControlFlow::Break`], and the
    /// break is propagated to the caller. The visiting order must be
    /// deterministic for a given snapshot and range.
    fn visit_range<F>(&self, range: CellRange, f: F) -> ControlFlow<()>
    where
        F: FnMut(usize) -> ControlFlow<()>;

    /// Collect the slots `visit_range` would visit, in visiting order.
    fn query_range(&self, range: CellRange) -> Vec<usize> {
        let mut out = Vec::new();
        let _ = self.visit_range(range, |slot| {
            out.push(slot);
            ControlFlow::Continue(())
        });
        out
    }

    /// Collect at most `limit` slots, in visiting order.
    fn query_range_limited(&self, range: CellRange, limit: usize) -> Vec<usize> {
        let mut out = Vec::new();
        if limit == 0 {
            return out;
        }
        let _ = self.visit_range(range, |slot| {
            out.push(slot);
            if out.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        out
    }
}
