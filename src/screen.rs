//! Static screens for the 128×64 monochrome display.
//!
//! Everything here draws into any `embedded-graphics` target; flushing the
//! frame buffer to the panel is left to the caller so each view costs exactly
//! one transfer.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{
            FONT_6X10,
            FONT_10X20,
        },
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Baseline,
        Text,
    },
};

use crate::joystick::MenuSelection;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// Highest score the three-digit field can show.
pub const MAX_SHOWN_SCORE: u32 = 999;

const SELECTOR_X: i32 = 32;
const SELECTOR_SIZE: u32 = 7;
const PLAY_ROW: i32 = 24;
const ABOUT_ROW: i32 = 34;

const ABOUT_TITLE: &str = "SOBRE";
const ABOUT_LINES: [&str; 2] = ["SPACE WAR", "FEITO EM RUST"];

/// What to put on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Full menu with the given entry highlighted.
    Menu(MenuSelection),
    /// Only the two selector boxes of an already drawn menu.
    Selector(MenuSelection),
    About,
    Score(u32),
}

/// Draw `view` into `target`.
pub fn draw<D>(target: &mut D, view: View) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match view {
        View::Menu(selection) => draw_menu(target, selection),
        View::Selector(selection) => draw_selector(target, selection),
        View::About => draw_about(target),
        View::Score(score) => draw_score(target, score),
    }
}

fn small_text() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On)
}

fn label<D>(target: &mut D, text: &str, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, Point::new(x, y), small_text(), Baseline::Top).draw(target)?;
    Ok(())
}

fn centered_x(text: &str, char_width: u32) -> i32 {
    (WIDTH as i32 - (text.len() as u32 * char_width) as i32) / 2
}

fn border<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::new(3, 3), Size::new(WIDTH - 6, HEIGHT - 6))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

fn draw_menu<D>(target: &mut D, selection: MenuSelection) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    border(target)?;
    label(target, "PLAY", 48, PLAY_ROW)?;
    label(target, "SOBRE", 44, ABOUT_ROW)?;
    draw_selector(target, selection)
}

/// Redraw both selector boxes: filled for the chosen entry, outlined for
/// the other. Touches nothing outside the two 7×7 squares.
fn draw_selector<D>(target: &mut D, selection: MenuSelection) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for (row, entry) in [(PLAY_ROW, MenuSelection::Play), (ABOUT_ROW, MenuSelection::About)] {
        let area = Rectangle::new(Point::new(SELECTOR_X, row), Size::new_equal(SELECTOR_SIZE));
        target.fill_solid(&area, BinaryColor::Off)?;
        let style = if entry == selection {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        area.into_styled(style).draw(target)?;
    }
    Ok(())
}

fn draw_about<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    border(target)?;
    label(target, ABOUT_TITLE, centered_x(ABOUT_TITLE, 6), 10)?;
    for (i, line) in ABOUT_LINES.iter().enumerate() {
        label(target, line, centered_x(line, 6), 28 + i as i32 * 12)?;
    }
    Ok(())
}

fn draw_score<D>(target: &mut D, score: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    border(target)?;
    label(target, "SCORE", centered_x("SCORE", 6), 12)?;

    let mut buf = [0u8; 3];
    let digits = format_score(score, &mut buf);
    let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_baseline(digits, Point::new(centered_x(digits, 10), 28), style, Baseline::Top)
        .draw(target)?;
    Ok(())
}

/// Decimal digits of `score`, saturated to [`MAX_SHOWN_SCORE`].
pub fn format_score(score: u32, buf: &mut [u8; 3]) -> &str {
    let mut n = score.min(MAX_SHOWN_SCORE);
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[start..]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;

    /// In-memory 128×64 panel.
    #[derive(Clone, PartialEq, Eq)]
    struct Canvas {
        pixels: [[bool; WIDTH as usize]; HEIGHT as usize],
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: [[false; WIDTH as usize]; HEIGHT as usize],
            }
        }

        fn at(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        fn lit_count(&self) -> usize {
            self.pixels.iter().flatten().filter(|p| **p).count()
        }
    }

    impl core::fmt::Debug for Canvas {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "Canvas({} lit)", self.lit_count())
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                    self.pixels[point.y as usize][point.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn render(view: View) -> Canvas {
        let mut canvas = Canvas::new();
        draw(&mut canvas, view).unwrap();
        canvas
    }

    #[test]
    fn menu_fills_the_selected_box_only() {
        let canvas = render(View::Menu(MenuSelection::Play));
        // Centre of the Play box is filled, centre of the About box is hollow.
        assert!(canvas.at(35, 27));
        assert!(!canvas.at(35, 37));
        // Both outlines are present.
        assert!(canvas.at(32, 24));
        assert!(canvas.at(32, 34));
        // Border corner.
        assert!(canvas.at(3, 3));
        assert!(canvas.at(124, 60));
    }

    #[test]
    fn selector_redraw_matches_full_menu() {
        let mut canvas = render(View::Menu(MenuSelection::Play));
        draw(&mut canvas, View::Selector(MenuSelection::About)).unwrap();
        assert_eq!(canvas, render(View::Menu(MenuSelection::About)));

        draw(&mut canvas, View::Selector(MenuSelection::Play)).unwrap();
        assert_eq!(canvas, render(View::Menu(MenuSelection::Play)));
    }

    #[test]
    fn every_screen_clears_the_previous_one() {
        let mut canvas = render(View::About);
        draw(&mut canvas, View::Score(7)).unwrap();
        assert_eq!(canvas, render(View::Score(7)));
    }

    #[test]
    fn score_screen_changes_with_score() {
        assert_ne!(render(View::Score(0)), render(View::Score(1)));
        assert_eq!(render(View::Score(1234)), render(View::Score(999)));
    }

    #[test]
    fn about_screen_has_text() {
        let canvas = render(View::About);
        assert!(canvas.lit_count() > render(View::Score(0)).lit_count() / 2);
        assert_ne!(canvas, render(View::Menu(MenuSelection::Play)));
    }

    #[test]
    fn score_digits() {
        let mut buf = [0u8; 3];
        assert_eq!(format_score(0, &mut buf), "0");
        assert_eq!(format_score(1, &mut buf), "1");
        assert_eq!(format_score(42, &mut buf), "42");
        assert_eq!(format_score(999, &mut buf), "999");
        assert_eq!(format_score(u32::MAX, &mut buf), "999");
    }
}
