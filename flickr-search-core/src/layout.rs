//! Grid geometry in device-independent units.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn square(edge: f32) -> Self {
        Size {
            width: edge,
            height: edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn is_empty(&self) -> bool {
        self.width <= 0. || self.height <= 0.
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

pub const ITEMS_PER_ROW: u32 = 3;

pub const SECTION_INSETS: EdgeInsets = EdgeInsets {
    top: 50.,
    left: 20.,
    bottom: 50.,
    right: 20.,
};

/// Fixed number of square cells per row, separated by gutters equal to the
/// left section inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    pub items_per_row: u32,
    pub section_insets: EdgeInsets,
}

impl Default for FlowLayout {
    fn default() -> Self {
        FlowLayout {
            items_per_row: ITEMS_PER_ROW,
            section_insets: SECTION_INSETS,
        }
    }
}

impl FlowLayout {
    /// One gutter on each side plus one between each pair of items.
    pub fn padding_space(&self) -> f32 {
        self.section_insets.left * (self.items_per_row as f32 + 1.)
    }

    pub fn item_edge(&self, viewport_width: f32) -> f32 {
        let available_width = viewport_width - self.padding_space();
        (available_width / self.items_per_row as f32).max(0.)
    }

    pub fn item_size(&self, viewport_width: f32) -> Size {
        Size::square(self.item_edge(viewport_width))
    }

    pub fn section_insets(&self) -> EdgeInsets {
        self.section_insets
    }

    pub fn minimum_line_spacing(&self) -> f32 {
        self.section_insets.left
    }
}
