//! Heart sprite rasterized from the implicit heart curve
//! `(x² + y² − 1)³ − x²·y³ ≤ 0`.

use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Sprite width in cells at scale 1.0.
pub const BASE_HEART_WIDTH: u16 = 14;

const X_EXTENT: f32 = 1.25;
const Y_TOP: f32 = 1.3;
const Y_BOTTOM: f32 = -1.1;

fn inside(x: f32, y: f32) -> bool {
    let a = x * x + y * y - 1.0;
    a * a * a - x * x * y * y * y <= 0.0
}

/// Rows of the heart at `width` cells wide. The height follows from the cell
/// aspect ratio. Rows are padded to `width` so they can be centered as-is.
#[must_use]
pub fn heart_sprite(width: u16, fill: char) -> Vec<String> {
    let width = width.max(2);
    let span_y = Y_TOP - Y_BOTTOM;
    let height = ((f32::from(width) * span_y / (2.0 * X_EXTENT)) / CELL_ASPECT)
        .round()
        .max(1.0) as u16;

    (0..height)
        .map(|row| {
            let y = Y_TOP - (f32::from(row) + 0.5) / f32::from(height) * span_y;
            (0..width)
                .map(|col| {
                    // Sample the left half only so rows mirror exactly.
                    let col = col.min(width - 1 - col);
                    let x = (f32::from(col) + 0.5) / f32::from(width) * 2.0 * X_EXTENT - X_EXTENT;
                    if inside(x, y) { fill } else { ' ' }
                })
                .collect()
        })
        .collect()
}

/// Sprite width for `scale`, shrunk to fit `area`.
#[must_use]
pub fn fitted_width(scale: f32, area: Rect) -> u16 {
    let wanted = (f32::from(BASE_HEART_WIDTH) * scale.max(0.1)).round() as u16;
    let by_height = area.height.saturating_mul(2);
    wanted.min(area.width).min(by_height).max(2)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{BASE_HEART_WIDTH, fitted_width, heart_sprite};

    #[test]
    fn sprite_is_mirror_symmetric() {
        for width in [8u16, 14, 21, 40] {
            for row in heart_sprite(width, '#') {
                let reversed: String = row.chars().rev().collect();
                assert_eq!(row, reversed, "width {width}");
                assert_eq!(row.chars().count(), usize::from(width));
            }
        }
    }

    #[test]
    fn sprite_has_two_lobes_and_a_point() {
        let rows = heart_sprite(28, '#');
        let first_filled = rows
            .iter()
            .find(|r| r.contains('#'))
            .expect("filled row");
        let middle = first_filled.chars().nth(14).expect("middle cell");
        assert_eq!(middle, ' ', "top row should dip between the lobes");

        let last_filled = rows
            .iter()
            .rev()
            .find(|r| r.contains('#'))
            .expect("filled row");
        assert!(last_filled.matches('#').count() <= 4);
    }

    #[test]
    fn sprite_grows_with_width() {
        let small = heart_sprite(BASE_HEART_WIDTH, '#');
        let large = heart_sprite(BASE_HEART_WIDTH * 2, '#');
        assert!(large.len() > small.len());
    }

    #[test]
    fn fitted_width_respects_area() {
        let roomy = Rect::new(0, 0, 100, 50);
        assert_eq!(fitted_width(1.0, roomy), BASE_HEART_WIDTH);
        assert_eq!(fitted_width(2.0, roomy), BASE_HEART_WIDTH * 2);

        let cramped = Rect::new(0, 0, 20, 5);
        assert_eq!(fitted_width(3.0, cramped), 10);
    }
}
