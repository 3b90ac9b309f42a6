//! Text direction and the layout values that follow from it.
//!
//! Every section that renders horizontal content must take its alignment,
//! flex direction and icon orientation from the same [`DirectionalLayout`],
//! so that flipping the language mirrors all of them at once.

use serde::Serialize;

/// Text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (English)
    Ltr,
    /// Right-to-left (Arabic)
    Rtl,
}

impl Direction {
    /// Returns the HTML `dir` attribute value.
    pub fn as_html_dir(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Returns the CSS `text-align` value for the start of text.
    pub fn text_align_start(&self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    /// Returns the CSS `flex-direction` for a horizontal row of items.
    pub fn flex_row(&self) -> &'static str {
        match self {
            Direction::Ltr => "row",
            Direction::Rtl => "row-reverse",
        }
    }

    /// Rotation in degrees applied to directional icons such as arrows.
    pub fn icon_rotation(&self) -> u16 {
        match self {
            Direction::Ltr => 0,
            Direction::Rtl => 180,
        }
    }

    /// Sign of the horizontal offset a block slides in from before it is
    /// revealed: leading-edge blocks start off-screen on the reading side.
    pub fn leading_offset_sign(&self) -> i8 {
        match self {
            Direction::Ltr => -1,
            Direction::Rtl => 1,
        }
    }

    /// The opposite direction.
    pub fn flipped(&self) -> Direction {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    /// Bundle every direction-dependent rendering value.
    pub fn layout(&self) -> DirectionalLayout {
        DirectionalLayout {
            dir: self.as_html_dir(),
            text_align: self.text_align_start(),
            flex_direction: self.flex_row(),
            icon_rotation: self.icon_rotation(),
            leading_offset_sign: self.leading_offset_sign(),
        }
    }
}

/// Rendering values derived from a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionalLayout {
    pub dir: &'static str,
    pub text_align: &'static str,
    pub flex_direction: &'static str,
    pub icon_rotation: u16,
    pub leading_offset_sign: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_layout() {
        let layout = Direction::Ltr.layout();
        assert_eq!(layout.dir, "ltr");
        assert_eq!(layout.text_align, "left");
        assert_eq!(layout.flex_direction, "row");
        assert_eq!(layout.icon_rotation, 0);
        assert_eq!(layout.leading_offset_sign, -1);
    }

    #[test]
    fn test_rtl_layout() {
        let layout = Direction::Rtl.layout();
        assert_eq!(layout.dir, "rtl");
        assert_eq!(layout.text_align, "right");
        assert_eq!(layout.flex_direction, "row-reverse");
        assert_eq!(layout.icon_rotation, 180);
        assert_eq!(layout.leading_offset_sign, 1);
    }

    #[test]
    fn test_every_value_inverts_together() {
        for direction in [Direction::Ltr, Direction::Rtl] {
            let a = direction.layout();
            let b = direction.flipped().layout();

            assert_ne!(a.dir, b.dir);
            assert_ne!(a.text_align, b.text_align);
            assert_ne!(a.flex_direction, b.flex_direction);
            assert_eq!((a.icon_rotation + b.icon_rotation) % 360, 180);
            assert_eq!(a.leading_offset_sign, -b.leading_offset_sign);
        }
    }

    #[test]
    fn test_flipped_twice_is_identity() {
        assert_eq!(Direction::Ltr.flipped().flipped(), Direction::Ltr);
        assert_eq!(Direction::Rtl.flipped().flipped(), Direction::Rtl);
    }
}
