//! Transient drag state for one in-progress pointer interaction.
//!
//! Strictly single-threaded: the host event loop serializes pointer
//! events, so at most one drag is ever in flight. Nothing here touches
//! the placement store; the session wires a completed drop into a
//! placement. Hover state exists purely for highlighting.

use dropslot_core::{ItemId, TargetId};

/// The in-flight drag, if any: which item is held and which target the
/// pointer is over. Cleared on drop or cancellation, never persisted.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active_item: Option<ItemId>,
    hover_target: Option<TargetId>,
}

impl DragSession {
    /// Creates an idle drag session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging an item. A drag already in flight is simply
    /// replaced; there is no queueing.
    pub fn begin(&mut self, item: ItemId) {
        self.active_item = Some(item);
        self.hover_target = None;
    }

    /// Updates the hovered target. `None` means the pointer left all
    /// targets. Ignored while no drag is active.
    pub fn hover(&mut self, target: Option<TargetId>) {
        if self.active_item.is_some() {
            self.hover_target = target;
        }
    }

    /// Ends the drag. Returns the (item, target) pair when the item was
    /// dropped on a target; a drop elsewhere is a cancellation and
    /// returns `None`. Active and hover state are cleared either way.
    pub fn end(&mut self, dropped_on: Option<TargetId>) -> Option<(ItemId, TargetId)> {
        self.hover_target = None;
        let item = self.active_item.take()?;
        let target = dropped_on?;
        Some((item, target))
    }

    /// Clears all drag state.
    pub fn clear(&mut self) {
        self.active_item = None;
        self.hover_target = None;
    }

    /// Returns true while a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.active_item.is_some()
    }

    /// The item being dragged, if any.
    pub fn active_item(&self) -> Option<&ItemId> {
        self.active_item.as_ref()
    }

    /// The target under the pointer, if any.
    pub fn hover_target(&self) -> Option<&TargetId> {
        self.hover_target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_replaces_active_drag() {
        let mut drag = DragSession::new();
        drag.begin("a".into());
        drag.hover(Some("t1".into()));
        drag.begin("b".into());

        assert_eq!(drag.active_item(), Some(&ItemId::new("b")));
        // Hover belongs to the old drag and is discarded.
        assert_eq!(drag.hover_target(), None);
    }

    #[test]
    fn test_hover_requires_active_drag() {
        let mut drag = DragSession::new();
        drag.hover(Some("t1".into()));
        assert_eq!(drag.hover_target(), None);

        drag.begin("a".into());
        drag.hover(Some("t1".into()));
        assert_eq!(drag.hover_target(), Some(&TargetId::new("t1")));
        drag.hover(None);
        assert_eq!(drag.hover_target(), None);
    }

    #[test]
    fn test_end_on_target_yields_pair() {
        let mut drag = DragSession::new();
        drag.begin("a".into());
        drag.hover(Some("t1".into()));

        let dropped = drag.end(Some("t1".into()));
        assert_eq!(dropped, Some(("a".into(), "t1".into())));
        assert!(!drag.is_dragging());
        assert_eq!(drag.hover_target(), None);
    }

    #[test]
    fn test_end_without_target_cancels() {
        let mut drag = DragSession::new();
        drag.begin("a".into());

        assert_eq!(drag.end(None), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_end_without_drag_is_noop() {
        let mut drag = DragSession::new();
        assert_eq!(drag.end(Some("t1".into())), None);
    }
}
