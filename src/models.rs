//! Item Models
//!
//! Per-row state machine and the inline style derived from it.

/// Per-row state. Owned by exactly one list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    /// Set by a click, never cleared
    pub done: bool,
    /// Pointer is over the row
    pub hover: bool,
}

/// UI events a row reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    Click,
    PointerEnter,
    PointerLeave,
}

impl ItemState {
    /// Next state after `event`.
    ///
    /// Enter and leave set `hover` unconditionally, so a missed or repeated
    /// pointer event cannot leave the row stuck in the wrong weight.
    pub fn apply(self, event: ItemEvent) -> Self {
        match event {
            ItemEvent::Click => Self {
                done: true,
                hover: !self.hover,
            },
            ItemEvent::PointerEnter => Self { hover: true, ..self },
            ItemEvent::PointerLeave => Self { hover: false, ..self },
        }
    }

    /// Inline style for this state
    pub fn style(&self) -> ItemStyle {
        ItemStyle {
            text_decoration: if self.done {
                TextDecoration::LineThrough
            } else {
                TextDecoration::None
            },
            font_weight: if self.hover {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    None,
    LineThrough,
}

impl TextDecoration {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Style of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    pub text_decoration: TextDecoration,
    pub font_weight: FontWeight,
}

impl ItemStyle {
    /// CSS declarations for the `style` attribute
    pub fn to_css(&self) -> String {
        format!(
            "text-decoration: {}; font-weight: {};",
            self.text_decoration.as_str(),
            self.font_weight.as_str()
        )
    }
}
