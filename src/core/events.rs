use crate::collision::CollisionRecord;
use std::collections::VecDeque;

/// A pair resolved during a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Index of the first body in the slice passed to `tick`
    pub body_a: usize,

    /// Index of the second body in the slice passed to `tick`
    pub body_b: usize,

    /// The collision as detected, before resolution
    pub record: CollisionRecord,
}

impl CollisionEvent {
    /// Returns whether the event involves the body at `index`
    pub fn involves(&self, index: usize) -> bool {
        self.body_a == index || self.body_b == index
    }
}

/// Collisions resolved by the latest tick, in visitation order
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    collision_events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        !self.collision_events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.collision_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    /// Iterates over the queued events without removing them
    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Gets all collision events involving the body at `index`
    pub fn get_collision_events_for_body(&self, index: usize) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.involves(index))
            .collect()
    }
}
