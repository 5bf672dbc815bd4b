use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::Rect;
use super::WindowId;

/// Per-window frames for one layout pass.
///
/// Entries are kept in clockwise order: left columns from left to right, then
/// the primary slot(s), then right columns from left to right. Hosts walk this
/// order when swapping windows clockwise, so it is part of the output, not an
/// accident of storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameMap(Vec<(WindowId, Rect)>);

impl FrameMap {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, id: WindowId, frame: Rect) {
        self.0.push((id, frame));
    }

    #[must_use]
    pub fn get(&self, id: &WindowId) -> Option<&Rect> {
        self.0
            .iter()
            .find_map(|(window, frame)| (window == id).then_some(frame))
    }

    #[must_use]
    pub fn contains(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WindowId, &Rect)> {
        self.0.iter().map(|(id, frame)| (id, frame))
    }

    /// Window ids in clockwise order
    pub fn ids(&self) -> impl Iterator<Item = &WindowId> {
        self.0.iter().map(|(id, _)| id)
    }
}

impl IntoIterator for FrameMap {
    type Item = (WindowId, Rect);
    type IntoIter = std::vec::IntoIter<(WindowId, Rect)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// Serialized as an object keyed by window id; keys are written in clockwise
// order for hosts that read insertion order.
impl Serialize for FrameMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, frame) in &self.0 {
            map.serialize_entry(&id.to_string(), frame)?;
        }

        map.end()
    }
}
