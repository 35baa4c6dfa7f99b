//! Style board: a titled grid of up to six photos.
//!
//! Lives only in memory and is dropped when the view is left.

use crate::types::{ImageRef, PhotoId};

/// Grid capacity
pub const MAX_PHOTOS: usize = 6;

/// Title shown until the user names the board
pub const BOARD_TITLE_PLACEHOLDER: &str = "Name your board";

/// Hint shown under an empty grid
pub const BOARD_INSTRUCTIONS: &str = "Press '+' to save your style";

/// Board title with click-to-edit behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTitle {
    text: String,
    editing: bool,
}

impl Default for BoardTitle {
    fn default() -> Self {
        Self {
            text: BOARD_TITLE_PLACEHOLDER.to_string(),
            editing: false,
        }
    }
}

impl BoardTitle {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == BOARD_TITLE_PLACEHOLDER
    }

    /// Start editing; a placeholder title is cleared first.
    pub fn begin_edit(&mut self) {
        if self.is_placeholder() {
            self.text.clear();
        }
        self.editing = true;
    }

    pub fn set(&mut self, text: &str) {
        if self.editing {
            self.text = text.to_string();
        }
    }

    /// Finish editing (Enter or blur); a blank title reverts to the placeholder.
    pub fn commit(&mut self) {
        self.editing = false;
        if self.text.trim().is_empty() {
            self.text = BOARD_TITLE_PLACEHOLDER.to_string();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPhoto {
    pub id: PhotoId,
    pub src: ImageRef,
}

/// One cell of the photo grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSlot {
    Photo(BoardPhoto),
    /// Opens the file picker
    Add,
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBoard {
    pub title: BoardTitle,
    photos: Vec<BoardPhoto>,
}

impl StyleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photos(&self) -> &[BoardPhoto] {
        &self.photos
    }

    pub fn is_full(&self) -> bool {
        self.photos.len() >= MAX_PHOTOS
    }

    /// Add one photo; a no-op returning `None` once the board is full.
    pub fn add_photo(&mut self, src: ImageRef) -> Option<PhotoId> {
        if self.is_full() {
            return None;
        }
        let id = PhotoId::new();
        self.photos.push(BoardPhoto { id, src });
        Some(id)
    }

    /// Add photos in order until the board is full; the rest are dropped.
    ///
    /// Returns how many were added.
    pub fn add_photos<I>(&mut self, sources: I) -> usize
    where
        I: IntoIterator<Item = ImageRef>,
    {
        sources
            .into_iter()
            .map_while(|src| self.add_photo(src))
            .count()
    }

    /// Remove a photo (double-click). Unknown ids are ignored.
    pub fn remove_photo(&mut self, id: PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        self.photos.len() != before
    }

    /// Exactly [`MAX_PHOTOS`] cells: photos, then the add cell while there
    /// is room, then empty cells.
    pub fn grid_slots(&self) -> Vec<GridSlot> {
        let mut slots: Vec<GridSlot> = self.photos.iter().cloned().map(GridSlot::Photo).collect();
        if !self.is_full() {
            slots.push(GridSlot::Add);
        }
        slots.resize(MAX_PHOTOS, GridSlot::Empty);
        slots
    }

    pub fn show_instructions(&self) -> bool {
        self.photos.is_empty()
    }
}
