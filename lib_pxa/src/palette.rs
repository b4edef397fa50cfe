use crate::color::Color;

/// The primary/secondary color pair and the current drawing color.
///
/// The drawing color is held as a value rather than derived from a slot
/// marker: selecting a new secondary color must leave the drawing color
/// untouched even while the user is drawing with the secondary slot, so in
/// that state the old color stays active until the next swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    primary: Color,
    secondary: Color,
    current: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            primary: Color::BLACK,
            secondary: Color::WHITE,
            current: Color::BLACK,
        }
    }

    pub fn get_primary(&self) -> Color {
        self.primary
    }

    pub fn get_secondary(&self) -> Color {
        self.secondary
    }

    pub fn get_current_color(&self) -> Color {
        self.current
    }

    /// Sets the primary color and makes it the current drawing color.
    pub fn set_primary(&mut self, color: Color) {
        self.primary = color;
        self.current = color;
    }

    /// Sets the secondary color without changing the current drawing color.
    pub fn set_secondary(&mut self, color: Color) {
        self.secondary = color;
    }

    /// Toggles the current drawing color between the two slots: drawing with
    /// the primary switches to the secondary, anything else switches back to
    /// the primary.
    pub fn swap(&mut self) {
        self.current = if self.current == self.primary {
            self.secondary
        } else {
            self.primary
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let palette = Palette::new();
        assert_eq!(palette.get_primary(), Color::BLACK);
        assert_eq!(palette.get_secondary(), Color::WHITE);
        assert_eq!(palette.get_current_color(), Color::BLACK);
    }

    #[test]
    fn test_set_primary_activates_it() {
        let mut palette = Palette::new();
        palette.swap(); // secondary is now current

        let red = Color::new(255, 0, 0);
        palette.set_primary(red);
        assert_eq!(palette.get_current_color(), red);
    }

    #[test]
    fn test_set_secondary_keeps_current_color() {
        let mut palette = Palette::new();
        let green = Color::new(0, 255, 0);

        palette.set_secondary(green);
        assert_eq!(palette.get_secondary(), green);
        assert_eq!(palette.get_current_color(), palette.get_primary());
    }

    #[test]
    fn test_set_secondary_keeps_current_color_while_secondary_is_active() {
        let mut palette = Palette::new();
        palette.swap(); // drawing with the secondary (white)

        let red = Color::new(255, 0, 0);
        palette.set_secondary(red);

        // The replaced color keeps drawing; only the slot value changed.
        assert_eq!(palette.get_current_color(), Color::WHITE);
        assert_eq!(palette.get_secondary(), red);

        // The next swap lands on the primary, as before the change.
        palette.swap();
        assert_eq!(palette.get_current_color(), palette.get_primary());
    }

    #[test]
    fn test_swap_toggles_between_slots() {
        let mut palette = Palette::new();

        palette.swap();
        assert_eq!(palette.get_current_color(), palette.get_secondary());
        palette.swap();
        assert_eq!(palette.get_current_color(), palette.get_primary());
    }

    #[test]
    fn test_swap_is_an_involution() {
        let mut palette = Palette::new();
        palette.set_primary(Color::new(10, 20, 30));
        palette.set_secondary(Color::new(40, 50, 60));

        let before = palette.get_current_color();
        palette.swap();
        palette.swap();
        assert_eq!(palette.get_current_color(), before);
    }

    #[test]
    fn test_swapping_keeps_current_color_on_a_slot() {
        let mut palette = Palette::new();
        palette.set_primary(Color::new(1, 1, 1));
        palette.set_secondary(Color::new(2, 2, 2));

        for _ in 0..5 {
            let current = palette.get_current_color();
            assert!(current == palette.get_primary() || current == palette.get_secondary());
            palette.swap();
        }
    }
}
