use crate::types::Alignment;

/// Fixed-width padding for table cells. Lengths are character counts, not display widths.
/// Content already at or past the target width is returned unchanged, never truncated.
pub trait Justify {
    fn char_len(&self) -> usize;
    fn pad_left(&self, width: usize) -> String;
    fn pad_right(&self, width: usize) -> String;
    fn pad_both(&self, width: usize) -> String;

    fn justify(&self, width: usize, alignment: &Alignment) -> String {
        match *alignment {
            Alignment::Left => self.pad_right(width),
            Alignment::Center => self.pad_both(width),
            Alignment::Right => self.pad_left(width),
        }
    }
}

impl Justify for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn pad_left(&self, width: usize) -> String {
        format!("{self:>width$}")
    }

    fn pad_right(&self, width: usize) -> String {
        format!("{self:<width$}")
    }

    /// left side gets the floor of the free space, right side the remainder
    fn pad_both(&self, width: usize) -> String {
        let fill = width.saturating_sub(self.char_len());
        let left = fill / 2;
        let right = fill - left;

        let mut padded = String::with_capacity(self.len() + fill);
        padded.extend(std::iter::repeat(' ').take(left));
        padded.push_str(self);
        padded.extend(std::iter::repeat(' ').take(right));
        padded
    }
}
