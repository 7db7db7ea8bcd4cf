//! Transient click effects and the store that holds them.
//!
//! Every qualifying mouse event produces one or two short-lived effects:
//! a ring centered on the event, and for button/wheel events an icon
//! showing which control fired. Effects carry their own expiry deadline;
//! the UI thread purges overdue entries on each repaint tick, so nothing
//! outlives its lifetime by more than one frame interval.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::constants::*;
use crate::events::{MouseButton, MouseEvent};

/// Identity of a single effect, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl EffectId {
    fn next() -> Self {
        EffectId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which icon glyph an icon effect shows.
///
/// The three button kinds share one reusable glyph each; the scroll kinds
/// are derived per wheel event from the sign of the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    LeftButton,
    RightButton,
    WheelButton,
    ScrollUp,
    ScrollDown,
}

impl IconKind {
    /// True for the three button glyphs that do not vary per event.
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            IconKind::LeftButton | IconKind::RightButton | IconKind::WheelButton
        )
    }
}

/// What an effect draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Translucent stroked circle of fixed radius centered on the event.
    Ring,
    /// Mouse glyph blitted at the (already offset) effect position.
    Icon(IconKind),
}

/// A transient visual record, alive from its creation until its deadline.
#[derive(Debug, Clone, Copy)]
pub struct ClickEffect {
    pub id: EffectId,
    /// Virtual-screen x coordinate.
    pub x: i32,
    /// Virtual-screen y coordinate.
    pub y: i32,
    pub kind: EffectKind,
    pub expires_at: Instant,
}

impl ClickEffect {
    /// Ring effect at the event position.
    pub fn ring(x: i32, y: i32, now: Instant) -> Self {
        Self {
            id: EffectId::next(),
            x,
            y,
            kind: EffectKind::Ring,
            expires_at: now + Duration::from_millis(RING_LIFETIME_MS),
        }
    }

    /// Icon effect at an already-offset position.
    pub fn icon(kind: IconKind, x: i32, y: i32, now: Instant) -> Self {
        Self {
            id: EffectId::next(),
            x,
            y,
            kind: EffectKind::Icon(kind),
            expires_at: now + Duration::from_millis(ICON_LIFETIME_MS),
        }
    }

    /// True once the effect's deadline has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Translate a mouse event into the effects it produces.
///
/// Every qualifying event gets a ring at its position. Button-downs add
/// the matching button icon, wheel events add a scroll icon for the sign
/// of the delta (a zero delta adds no icon). Icons sit below-right of the
/// cursor by [`ICON_OFFSET`] on both axes.
pub fn plan_effects(event: &MouseEvent, now: Instant) -> Vec<ClickEffect> {
    let (x, y) = event.position();
    let mut effects = vec![ClickEffect::ring(x, y, now)];

    let icon_kind = match *event {
        MouseEvent::ButtonDown { button, .. } => Some(match button {
            MouseButton::Left => IconKind::LeftButton,
            MouseButton::Right => IconKind::RightButton,
            MouseButton::Middle => IconKind::WheelButton,
        }),
        MouseEvent::Wheel { delta, .. } => {
            if delta > 0 {
                Some(IconKind::ScrollUp)
            } else if delta < 0 {
                Some(IconKind::ScrollDown)
            } else {
                None
            }
        }
    };

    if let Some(kind) = icon_kind {
        effects.push(ClickEffect::icon(
            kind,
            x + ICON_OFFSET,
            y + ICON_OFFSET,
            now,
        ));
    }

    effects
}

/// Lock-protected collection of the effects currently on screen.
///
/// All access goes through the one internal mutex: the hook-driven insert
/// path, the per-tick purge and the paint snapshot never observe a
/// half-mutated list. There is no capacity bound and no deduplication —
/// rapid clicks coexist as independently-expiring effects.
pub struct EffectStore {
    inner: Mutex<Vec<ClickEffect>>,
}

impl EffectStore {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Insert an effect.
    pub fn add(&self, effect: ClickEffect) {
        self.lock().push(effect);
    }

    /// Remove an effect by identity. Removing an absent id is a no-op;
    /// returns whether anything was removed.
    pub fn remove(&self, id: EffectId) -> bool {
        let mut effects = self.lock();
        let before = effects.len();
        effects.retain(|e| e.id != id);
        effects.len() != before
    }

    /// Drop every effect whose deadline has passed; returns how many.
    pub fn purge_expired(&self, now: Instant) -> usize {
        let mut effects = self.lock();
        let before = effects.len();
        effects.retain(|e| !e.is_expired(now));
        before - effects.len()
    }

    /// Copy of the current effect list, for painting.
    pub fn snapshot(&self) -> Vec<ClickEffect> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop everything, regardless of deadlines.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ClickEffect>> {
        self.inner.lock().expect("effect store mutex poisoned")
    }
}

impl Default for EffectStore {
    fn default() -> Self {
        Self::new()
    }
}
