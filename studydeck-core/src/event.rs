//! Terminal events and anchor-region hit-testing

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Raw event from crossterm, before normalization.
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Normalized event payload delivered to components and listeners.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event other than scroll wheel
    Mouse(MouseEvent),
    /// Scroll wheel, with position and direction (+1 down, -1 up)
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// Position of a pointer-down interaction, if this event is one.
    ///
    /// This is the event that dismisses dropdowns: any press whose target
    /// lies outside a dropdown's anchor region closes it.
    pub fn pointer_down(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(m) if matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) => {
                Some((m.column, m.row))
            }
            _ => None,
        }
    }
}

/// Identifies an anchor region (a dropdown's trigger plus its panel).
///
/// Applications define an enum of their anchors and get this for free.
pub trait AnchorId: Copy + Eq + Hash + Debug + 'static {}

impl<T: Copy + Eq + Hash + Debug + 'static> AnchorId for T {}

/// Screen regions recorded during render, consulted during event handling.
///
/// Each dropdown registers its anchor `Rect` every frame; outside-click
/// detection asks whether a pointer-down position falls inside it. Anchors
/// are re-registered per frame, so a region that was not rendered this
/// frame counts as "everything is outside it".
#[derive(Debug, Clone, Default)]
pub struct EventContext<Id: AnchorId> {
    anchors: HashMap<Id, Rect>,
}

impl<Id: AnchorId> EventContext<Id> {
    pub fn new() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }

    /// Forget all anchors. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.anchors.clear();
    }

    /// Record (or extend) the anchor region for `id`.
    ///
    /// A dropdown's region is the union bounding box of its trigger and its
    /// open panel, so clicks within the panel are "inside".
    pub fn add_anchor(&mut self, id: Id, area: Rect) {
        self.anchors
            .entry(id)
            .and_modify(|r| *r = r.union(area))
            .or_insert(area);
    }

    pub fn anchor(&self, id: Id) -> Option<Rect> {
        self.anchors.get(&id).copied()
    }

    /// Whether a point lies inside the anchor region for `id`.
    pub fn hits(&self, id: Id, x: u16, y: u16) -> bool {
        self.anchors
            .get(&id)
            .is_some_and(|area| area.contains(ratatui::layout::Position { x, y }))
    }

    /// Whether a point lies outside the anchor region for `id`.
    ///
    /// An unregistered anchor is treated as outside: if the region was not
    /// drawn, any interaction dismisses whatever it anchored.
    pub fn misses(&self, id: Id, x: u16, y: u16) -> bool {
        !self.hits(id, x, y)
    }
}

/// Normalize a raw crossterm event, folding wheel events into
/// [`EventKind::Scroll`].
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        },
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

/// Spawn the crossterm polling task.
///
/// Polls for terminal events and forwards them over `tx` until the token is
/// cancelled or the channel closes. The crossterm buffer is drained on
/// cancellation so stray input does not leak to the shell.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    while event::poll(poll_timeout).unwrap_or(false) {
                        let Ok(evt) = event::read() else { continue };
                        let raw = match evt {
                            event::Event::Key(key) => RawEvent::Key(key),
                            event::Event::Mouse(mouse) => RawEvent::Mouse(mouse),
                            event::Event::Resize(w, h) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}
