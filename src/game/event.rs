//! Event System
//!
//! The physics pass records contacts instead of acting on them, and the
//! contact handlers record sound cues instead of touching the audio device.
//! Contacts are drained within the frame; sound cues are drained by the
//! main loop after `tick`.
//!
//! Example flow:
//! 1. Physics finds the player overlapping a coin → sends `Contact::Collected`
//! 2. Contact handler destroys the coin, respawns one, scores → sends `SoundCue::Bell`
//! 3. Main loop plays the bell

use super::components::{Hazard, Pickup};
use super::entity::Entity;

/// A queue for events of a single type
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sounds the scene wants played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Coin collected
    Bell,
    /// Star collected
    Bell2,
    /// Player hit
    Dead,
}

/// The player touched something that matters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Collected { item: Entity, pickup: Pickup },
    Hit { hazard: Entity, kind: Hazard },
}

/// All per-frame event queues
#[derive(Debug, Default)]
pub struct Events {
    pub contacts: EventQueue<Contact>,
    pub sounds: EventQueue<SoundCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_drains_in_order() {
        let mut queue: EventQueue<SoundCue> = EventQueue::new();
        queue.send(SoundCue::Bell);
        queue.send(SoundCue::Dead);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![SoundCue::Bell, SoundCue::Dead]);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_queues_are_independent() {
        let mut events = Events::new();
        events.sounds.send(SoundCue::Bell2);
        events.contacts.send(Contact::Hit {
            hazard: Entity::new(3, 1),
            kind: Hazard::Bomb,
        });

        let contacts: Vec<_> = events.contacts.drain().collect();
        assert_eq!(contacts.len(), 1);
        assert_eq!(events.sounds.drain().collect::<Vec<_>>(), vec![SoundCue::Bell2]);
    }
}
