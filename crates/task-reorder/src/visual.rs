//! Per-item Drag Visual State
//!
//! idle -> dragging -> dragging-over(edge) <-> dragging-over(edge') -> idle,
//! with `Preview` while the item is pressed and its drag image is prepared,
//! before the drag threshold is crossed.

use crate::models::Edge;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemDragState {
    #[default]
    Idle,
    Preview,
    Dragging,
    DraggingOver(Option<Edge>),
}

impl ItemDragState {
    /// CSS class for the list item
    pub fn class_name(&self) -> &'static str {
        match self {
            ItemDragState::Idle => "drag-ready",
            ItemDragState::Preview => "drag-preview",
            ItemDragState::Dragging => "drag",
            ItemDragState::DraggingOver(_) => "drag-over",
        }
    }

    /// True once a drag is under way; the item ignores clicks meanwhile
    pub fn is_dragging(&self) -> bool {
        matches!(self, ItemDragState::Dragging | ItemDragState::DraggingOver(_))
    }

    pub fn edge(&self) -> Option<Edge> {
        match self {
            ItemDragState::DraggingOver(edge) => *edge,
            _ => None,
        }
    }

    pub fn preview(self) -> Self {
        ItemDragState::Preview
    }

    pub fn drag_start(self) -> Self {
        ItemDragState::Dragging
    }

    pub fn drag_enter(self, edge: Option<Edge>) -> Self {
        ItemDragState::DraggingOver(edge)
    }

    /// Pointer moved over this item; unchanged when the edge is the same
    pub fn drag(self, edge: Option<Edge>) -> Self {
        match self {
            ItemDragState::DraggingOver(current) if current == edge => self,
            _ => ItemDragState::DraggingOver(edge),
        }
    }

    pub fn drag_leave(self) -> Self {
        ItemDragState::Idle
    }

    pub fn drop(self) -> Self {
        ItemDragState::Idle
    }

    /// Trace label for a state change, `None` when nothing changed
    pub fn transition_label(from: Self, to: Self) -> Option<String> {
        let edge_name = |edge: Option<Edge>| edge.map_or("nothing", |e| e.as_str());
        let label = match (from, to) {
            _ if from == to => return None,
            (_, ItemDragState::Preview) => "drag armed".to_string(),
            (_, ItemDragState::Dragging) => "drag start".to_string(),
            (ItemDragState::DraggingOver(_), ItemDragState::DraggingOver(edge)) => {
                format!("drag near {}", edge_name(edge))
            }
            (_, ItemDragState::DraggingOver(edge)) => format!("drag enter {}", edge_name(edge)),
            (ItemDragState::DraggingOver(_), ItemDragState::Idle) => "drag leave".to_string(),
            (_, ItemDragState::Idle) => "drag end".to_string(),
        };
        Some(label)
    }
}
