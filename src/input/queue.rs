//! Event queue: hands events from producer threads to the frame driver.
//!
//! A platform backend (or any other producer) holds an [`EventSender`]
//! and pushes [`InputEvent`]s whenever they happen. Once per frame the
//! driver calls [`EventQueue::drain_into`], which starts a new frame on
//! the snapshot and folds every pending event into it. Widgets therefore
//! only ever see a consistent per-frame view.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use log::trace;

use super::event::InputEvent;
use super::snapshot::InputSnapshot;

/// Producer handle for an [`EventQueue`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<InputEvent>,
}

impl EventSender {
    /// Queue an event.
    ///
    /// Returns `false` if the event was dropped because the queue is full
    /// or the queue itself has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                trace!("input queue full, dropping {event:?}");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Multi-producer queue of input events, drained once per frame.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl EventQueue {
    /// Create an unbounded queue.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Create a queue that drops events beyond `capacity` pending ones.
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// Get a producer handle.
    pub fn sender(&self) -> EventSender {
        EventSender { tx: self.tx.clone() }
    }

    /// Number of events waiting.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Start a new frame on `snapshot` and apply every pending event.
    ///
    /// Returns the number of events applied.
    pub fn drain_into(&self, snapshot: &mut InputSnapshot) -> usize {
        snapshot.begin_frame();
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            snapshot.apply(&event);
            applied += 1;
        }
        if applied > 0 {
            trace!("applied {applied} input events");
        }
        applied
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyModifiers, MouseButton, TextEvent};
    use std::thread;

    #[test]
    fn test_queue_drains_events_from_other_threads() {
        let queue = EventQueue::new();
        let sender = queue.sender();

        let producer = thread::spawn(move || {
            assert!(sender.send(InputEvent::MouseMove { x: 12, y: 7 }));
            assert!(sender.send(InputEvent::MouseDown { x: 12, y: 7, button: MouseButton::Left }));
            assert!(sender.send(InputEvent::KeyDown {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
            }));
        });
        producer.join().unwrap();

        let mut snapshot = InputSnapshot::new();
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.drain_into(&mut snapshot), 3);
        assert_eq!(snapshot.mouse_position(), (12, 7));
        assert!(snapshot.button_pressed(MouseButton::Left));
        assert_eq!(snapshot.text_events(), &[TextEvent::Text("q".to_string())]);

        // Next frame: nothing new, the click is no longer an edge.
        assert_eq!(queue.drain_into(&mut snapshot), 0);
        assert!(!snapshot.button_pressed(MouseButton::Left));
        assert!(snapshot.text_events().is_empty());
    }

    #[test]
    fn test_bounded_queue_drops_overflow() {
        let queue = EventQueue::bounded(1);
        let sender = queue.sender();
        assert!(sender.send(InputEvent::MouseMove { x: 1, y: 1 }));
        assert!(!sender.send(InputEvent::MouseMove { x: 2, y: 2 }));
    }

    #[test]
    fn test_sender_after_queue_dropped() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.send(InputEvent::MouseMove { x: 0, y: 0 }));
    }
}
