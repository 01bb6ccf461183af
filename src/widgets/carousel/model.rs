// SPDX-License-Identifier: MPL-2.0

//! Item model for the carousel widget.

/// Identifier of a carousel item, resolved to an image by an
/// [`ImageSource`](crate::assets::ImageSource).
pub type ItemId = String;

/// The ordered items shown by the carousel and the currently focused one.
///
/// Items are fixed at construction; duplicates are allowed and order is
/// significant. The focused index is only moved by the widget state in
/// response to scroll and drag events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselModel {
    items: Vec<ItemId>,
    focused_index: usize,
}

impl CarouselModel {
    /// Creates a model with the given items, focused on the first one.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            focused_index: 0,
        }
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the item currently centered in the strip.
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Sets the focused index.
    ///
    /// The value is not validated; callers keep it inside `0..len()`.
    pub fn set_focused_index(&mut self, index: usize) {
        self.focused_index = index;
    }

    /// Returns the focused item, if the index is in range.
    pub fn focused_item(&self) -> Option<&ItemId> {
        self.items.get(self.focused_index)
    }
}
