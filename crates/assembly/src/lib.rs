//! Launch-pad assembly state machine.
//!
//! An [`Assembly`] tracks the ordered stack of parts placed for one level
//! (index 0 is the bottom). It moves through `Empty → Partial → Complete` as
//! parts are stacked, and is frozen once a launch has been attempted.
//!
//! Invalid commands never fail: they are ignored and return no events, so a
//! caller can forward raw input without pre-validating it.

use academy_catalog::{Level, Part};

/// Notification emitted by an accepted command.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyEvent {
    /// `position` is 1-based.
    PartPlaced { part: Part, position: usize },
    PartRemoved { part: Part, remaining_count: usize },
    PartReordered { part: Part },
    /// Emitted after the placement that fills the last slot.
    AssemblyComplete,
}

/// Coarse fill state of the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStage {
    Empty,
    Partial(usize),
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    required: Vec<Part>,
    placed: Vec<Part>,
    frozen: bool,
}

impl Assembly {
    /// Fresh, unfrozen assembly for `level`.
    pub fn new(level: &Level) -> Self {
        let mut required = level.required_parts.clone();
        required.sort_by_key(|p| p.required_order);
        Self {
            required,
            placed: Vec::with_capacity(level.required_parts.len()),
            frozen: false,
        }
    }

    /// Stack `part_id` on top.
    ///
    /// Ignored when frozen, when the pad is full, when the part is not part
    /// of the level, or when it is already placed.
    pub fn place(&mut self, part_id: &str) -> Vec<AssemblyEvent> {
        if self.frozen || self.is_complete() {
            log::debug!("place '{part_id}' ignored: assembly frozen or full");
            return Vec::new();
        }
        let Some(part) = self.required.iter().find(|p| p.id == part_id) else {
            log::debug!("place '{part_id}' ignored: not a part of this level");
            return Vec::new();
        };
        if self.contains(part_id) {
            log::debug!("place '{part_id}' ignored: already assembled");
            return Vec::new();
        }

        self.placed.push(part.clone());
        let mut events = vec![AssemblyEvent::PartPlaced {
            part: part.clone(),
            position: self.placed.len(),
        }];
        if self.is_complete() {
            events.push(AssemblyEvent::AssemblyComplete);
        }
        events
    }

    /// Move the part at `from` so it ends up at `to`, shifting the parts in between.
    pub fn reorder(&mut self, from: usize, to: usize) -> Vec<AssemblyEvent> {
        let len = self.placed.len();
        if self.frozen || from == to || from >= len || to >= len {
            log::debug!("reorder {from} -> {to} ignored (len {len}, frozen {})", self.frozen);
            return Vec::new();
        }
        let part = self.placed.remove(from);
        self.placed.insert(to, part.clone());
        vec![AssemblyEvent::PartReordered { part }]
    }

    /// Take the topmost part off the stack.
    pub fn remove_last(&mut self) -> Vec<AssemblyEvent> {
        if self.frozen {
            log::debug!("remove ignored: assembly frozen");
            return Vec::new();
        }
        match self.placed.pop() {
            Some(part) => vec![AssemblyEvent::PartRemoved {
                part,
                remaining_count: self.placed.len(),
            }],
            None => Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.placed.len() == self.required.len()
    }

    /// True when the stack matches the required bottom-to-top order exactly.
    pub fn is_correctly_ordered(&self) -> bool {
        self.placed.len() == self.required.len()
            && self
                .placed
                .iter()
                .zip(&self.required)
                .all(|(placed, required)| placed.id == required.id)
    }

    pub fn stage(&self) -> AssemblyStage {
        match self.placed.len() {
            0 => AssemblyStage::Empty,
            n if n == self.required.len() => AssemblyStage::Complete,
            n => AssemblyStage::Partial(n),
        }
    }

    /// Lock the assembly after a launch attempt.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Clear the pad and unfreeze, keeping the same level.
    pub fn reset(&mut self) {
        self.placed.clear();
        self.frozen = false;
    }

    pub fn placed(&self) -> &[Part] {
        &self.placed
    }

    pub fn required(&self) -> &[Part] {
        &self.required
    }

    pub fn contains(&self, part_id: &str) -> bool {
        self.placed.iter().any(|p| p.id == part_id)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Mass of the parts currently stacked.
    pub fn placed_mass(&self) -> f64 {
        self.placed.iter().map(|p| p.mass).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, order: u32, mass: f64) -> Part {
        Part {
            id: id.to_string(),
            name: id.to_string(),
            required_order: order,
            mass,
            fact: None,
        }
    }

    fn level(parts: Vec<Part>) -> Level {
        Level {
            level: 1,
            name: "Test".to_string(),
            description: String::new(),
            target: "Orbit".to_string(),
            planet: "Earth".to_string(),
            gravity: 9.8,
            astronauts: 0,
            required_parts: parts,
            reward: 5,
        }
    }

    fn three_part() -> Assembly {
        Assembly::new(&level(vec![
            part("c", 3, 50.0),
            part("a", 1, 300.0),
            part("b", 2, 100.0),
        ]))
    }

    fn ids(assembly: &Assembly) -> Vec<&str> {
        assembly.placed().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn placing_in_required_order_completes_correctly() {
        let mut assembly = three_part();
        assert_eq!(assembly.stage(), AssemblyStage::Empty);
        assembly.place("a");
        assert_eq!(assembly.stage(), AssemblyStage::Partial(1));
        assembly.place("b");
        let events = assembly.place("c");
        assert_eq!(events.last(), Some(&AssemblyEvent::AssemblyComplete));
        assert_eq!(assembly.stage(), AssemblyStage::Complete);
        assert!(assembly.is_complete());
        assert!(assembly.is_correctly_ordered());
        assert_eq!(assembly.placed_mass(), 450.0);
    }

    #[test]
    fn required_parts_are_kept_in_build_order() {
        let mut assembly = three_part();
        assembly.place("c");
        let required: Vec<&str> = assembly.required().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(required, ["a", "b", "c"]);
    }

    #[test]
    fn reverse_order_is_complete_but_wrong() {
        let mut assembly = three_part();
        for id in ["c", "b", "a"] {
            assembly.place(id);
        }
        assert!(assembly.is_complete());
        assert!(!assembly.is_correctly_ordered());
    }

    #[test]
    fn placement_event_carries_one_based_position() {
        let mut assembly = three_part();
        assembly.place("b");
        let events = assembly.place("a");
        assert_eq!(
            events,
            vec![AssemblyEvent::PartPlaced {
                part: part("a", 1, 300.0),
                position: 2
            }]
        );
    }

    #[test]
    fn duplicate_and_unknown_parts_are_ignored() {
        let mut assembly = three_part();
        assembly.place("a");
        let before = assembly.clone();
        assert!(assembly.place("a").is_empty());
        assert!(assembly.place("payload").is_empty());
        assert_eq!(assembly, before);
        assert_eq!(ids(&assembly), ["a"]);
    }

    #[test]
    fn remove_last_on_empty_is_ignored() {
        let mut assembly = three_part();
        assert!(assembly.remove_last().is_empty());
        assert_eq!(assembly.len(), 0);
    }

    #[test]
    fn remove_last_pops_top_and_reports_count() {
        let mut assembly = three_part();
        assembly.place("a");
        assembly.place("b");
        let events = assembly.remove_last();
        assert_eq!(
            events,
            vec![AssemblyEvent::PartRemoved {
                part: part("b", 2, 100.0),
                remaining_count: 1
            }]
        );
        assert_eq!(ids(&assembly), ["a"]);
    }

    #[test]
    fn reorder_moves_bottom_to_top() {
        let mut assembly = three_part();
        for id in ["a", "b", "c"] {
            assembly.place(id);
        }
        let events = assembly.reorder(0, 2);
        assert_eq!(
            events,
            vec![AssemblyEvent::PartReordered {
                part: part("a", 1, 300.0)
            }]
        );
        assert_eq!(ids(&assembly), ["b", "c", "a"]);
    }

    #[test]
    fn reorder_moves_top_to_bottom() {
        let mut assembly = three_part();
        for id in ["b", "c", "a"] {
            assembly.place(id);
        }
        assembly.reorder(2, 0);
        assert_eq!(ids(&assembly), ["a", "b", "c"]);
        assert!(assembly.is_correctly_ordered());
    }

    #[test]
    fn invalid_reorders_are_ignored() {
        let mut assembly = three_part();
        assembly.place("a");
        assembly.place("b");
        let before = assembly.clone();
        assert!(assembly.reorder(1, 1).is_empty());
        assert!(assembly.reorder(0, 2).is_empty());
        assert!(assembly.reorder(5, 0).is_empty());
        assert_eq!(assembly, before);
    }

    #[test]
    fn frozen_assembly_rejects_every_mutation() {
        let mut assembly = three_part();
        assembly.place("b");
        assembly.place("a");
        assembly.freeze();
        let before = assembly.clone();
        assert!(assembly.place("c").is_empty());
        assert!(assembly.reorder(0, 1).is_empty());
        assert!(assembly.remove_last().is_empty());
        assert_eq!(assembly, before);

        assembly.reset();
        assert!(!assembly.is_frozen());
        assert!(assembly.is_empty());
    }
}
