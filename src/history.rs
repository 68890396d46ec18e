use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::RasterResult;
use crate::raster::{RasterSnapshot, Surface};

/// What happens to the redo stack when a new drawing action saves a snapshot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedoPolicy {
    /// A new stroke or clear discards everything that could be redone
    #[default]
    ClearOnNewAction,
    /// Redo entries survive new actions
    Retain,
}

/// Linear undo/redo history of full raster snapshots.
///
/// Both stacks hold at most `max_depth` entries; pushing onto a full stack
/// evicts its oldest snapshot.
#[derive(Debug)]
pub struct History {
    undo_stack: VecDeque<RasterSnapshot>,
    redo_stack: VecDeque<RasterSnapshot>,
    max_depth: usize,
    redo_policy: RedoPolicy,
}

impl History {
    pub fn new(max_depth: usize, redo_policy: RedoPolicy) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
            redo_policy,
        }
    }

    /// Records the raster as it was before a destructive action
    pub fn save_state(&mut self, snapshot: RasterSnapshot) {
        push_capped(&mut self.undo_stack, snapshot, self.max_depth);
        if self.redo_policy == RedoPolicy::ClearOnNewAction && !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo snapshots", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Steps back one snapshot. Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, surface: &mut Surface) -> RasterResult<bool> {
        step(&mut self.undo_stack, &mut self.redo_stack, surface, self.max_depth)
    }

    /// Steps forward one snapshot. Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self, surface: &mut Surface) -> RasterResult<bool> {
        step(&mut self.redo_stack, &mut self.undo_stack, surface, self.max_depth)
    }

    /// Drops every snapshot, e.g. after the surface changed size
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn redo_policy(&self) -> RedoPolicy {
        self.redo_policy
    }

    pub fn set_redo_policy(&mut self, policy: RedoPolicy) {
        self.redo_policy = policy;
    }
}

fn push_capped(stack: &mut VecDeque<RasterSnapshot>, snapshot: RasterSnapshot, max_depth: usize) {
    while stack.len() >= max_depth {
        stack.pop_front();
        log::debug!("History full ({max_depth}), evicted oldest snapshot");
    }
    stack.push_back(snapshot);
}

/// Pops from `from`, parks the current raster on `to` and shows the popped snapshot
fn step(
    from: &mut VecDeque<RasterSnapshot>,
    to: &mut VecDeque<RasterSnapshot>,
    surface: &mut Surface,
    max_depth: usize,
) -> RasterResult<bool> {
    let Some(target) = from.pop_back() else {
        return Ok(false);
    };
    let current = surface.snapshot();
    if let Err(err) = surface.restore(&target) {
        from.push_back(target);
        return Err(err);
    }
    push_capped(to, current, max_depth);
    Ok(true)
}
