//! Fretboard renderer — draws a ranked fingering as an SVG diagram.
//!
//! The diagram is a grid with one cell per (string, fret). Gray header cells
//! frame it with string numbers on the left/right and fret numbers on the
//! top/bottom. Every cell carries its pitch label; the cells of the fingering
//! also show their 1-based order in the scale.

mod constants;
mod svg_builder;

use std::collections::HashSet;

use crate::fretboard::Fretboard;
use crate::generator::ScaleFingerings;
use crate::model::{Position, ScoredFingering};
use constants::*;
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render one fingering into a complete SVG string.
///
/// `title` goes in the top-left corner cell; `rank` is 0-based.
pub fn render_fingering_svg(
    fretboard: &Fretboard,
    fingering: &ScoredFingering,
    title: &str,
    rank: usize,
) -> String {
    let num_strings = fretboard.num_strings();
    let num_frets = fretboard.num_frets();
    let width = (num_frets + 2) as f64 * CELL_SIZE;
    let grid_height = (num_strings + 2) as f64 * CELL_SIZE;
    let height = grid_height + CAPTION_HEIGHT;

    let mut svg = SvgBuilder::new(width, height);

    // Background
    svg.rect(0.0, 0.0, width, height, BACKGROUND_COLOR);

    render_frame(&mut svg, num_strings, num_frets);
    render_grid(&mut svg, num_strings, num_frets, width, grid_height);
    render_pitches(&mut svg, fretboard, &fingering.positions);
    render_ordinals(&mut svg, &fingering.positions);

    // Title and caption
    svg.centered_text(CELL_SIZE / 2.0, CELL_SIZE / 2.0, title, TITLE_FONT_SIZE, TEXT_COLOR);
    svg.text(
        CELL_SIZE / 4.0,
        grid_height + CAPTION_HEIGHT * 0.65,
        &format!("#{}  score {:.2}", rank + 1, fingering.score),
        CAPTION_FONT_SIZE,
        CAPTION_COLOR,
        "start",
    );

    svg.build()
}

/// Render every ranked fingering of a scale, best first.
pub fn render_scale_svgs(fretboard: &Fretboard, result: &ScaleFingerings) -> Vec<String> {
    let title = result.label();
    result
        .fingerings
        .iter()
        .enumerate()
        .map(|(rank, f)| render_fingering_svg(fretboard, f, &title, rank))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Pieces
// ═══════════════════════════════════════════════════════════════════════

/// Cell origin for column `col` / row `row` of the full grid (headers included).
fn cell_origin(col: usize, row: usize) -> (f64, f64) {
    (col as f64 * CELL_SIZE, row as f64 * CELL_SIZE)
}

/// Center of the cell holding `pos`, shifted down by `offset` cells.
fn position_anchor(pos: Position, offset: f64) -> (f64, f64) {
    (
        (pos.slot as f64 + 1.5) * CELL_SIZE,
        (pos.line as f64 + 1.0 + offset) * CELL_SIZE,
    )
}

fn render_frame(svg: &mut SvgBuilder, num_strings: usize, num_frets: usize) {
    let marker_cols = [1, num_frets / 2 + 1, num_frets];

    for row in 1..=num_strings {
        for col in [0, num_frets + 1] {
            let (x, y) = cell_origin(col, row);
            svg.rect(x, y, CELL_SIZE, CELL_SIZE, HEADER_CELL_COLOR);
            svg.centered_text(
                x + CELL_SIZE / 2.0,
                y + CELL_SIZE / 2.0,
                &row.to_string(),
                HEADER_FONT_SIZE,
                TEXT_COLOR,
            );
        }
        for col in marker_cols {
            let (x, y) = cell_origin(col, row);
            svg.rect(x, y, CELL_SIZE, CELL_SIZE, MARKER_CELL_COLOR);
        }
    }

    for col in 1..=num_frets {
        for row in [0, num_strings + 1] {
            let (x, y) = cell_origin(col, row);
            svg.rect(x, y, CELL_SIZE, CELL_SIZE, HEADER_CELL_COLOR);
            // Column 1 is the open string and stays unnumbered.
            if col > 1 {
                svg.centered_text(
                    x + CELL_SIZE / 2.0,
                    y + CELL_SIZE / 2.0,
                    &(col - 1).to_string(),
                    HEADER_FONT_SIZE,
                    TEXT_COLOR,
                );
            }
        }
    }
}

fn render_grid(svg: &mut SvgBuilder, num_strings: usize, num_frets: usize, width: f64, height: f64) {
    for row in 1..=num_strings + 1 {
        let y = row as f64 * CELL_SIZE;
        svg.line(0.0, y, width, y, GRID_COLOR, GRID_LINE_WIDTH);
    }
    for col in 1..=num_frets + 1 {
        let x = col as f64 * CELL_SIZE;
        svg.line(x, 0.0, x, height, GRID_COLOR, GRID_LINE_WIDTH);
    }
}

fn render_pitches(svg: &mut SvgBuilder, fretboard: &Fretboard, fingering: &[Position]) {
    let played: HashSet<Position> = fingering.iter().copied().collect();
    for pos in fretboard.positions() {
        let Some(pitch) = fretboard.pitch_at(pos) else {
            continue;
        };
        let color = if played.contains(&pos) {
            TEXT_COLOR
        } else {
            IDLE_PITCH_COLOR
        };
        let (x, y) = position_anchor(pos, PITCH_OFFSET);
        svg.centered_text(x, y, &format!("[{pitch}]"), PITCH_FONT_SIZE, color);
    }
}

fn render_ordinals(svg: &mut SvgBuilder, fingering: &[Position]) {
    for (i, pos) in fingering.iter().enumerate() {
        let (x, y) = position_anchor(*pos, ORDINAL_OFFSET);
        svg.centered_text(x, y, &(i + 1).to_string(), ORDINAL_FONT_SIZE, TEXT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{fingerings_for_scale, GeneratorOptions};
    use crate::model::{NoteName, Pitch};
    use crate::scale::ScaleKind;

    fn sample() -> ScoredFingering {
        ScoredFingering {
            positions: vec![Position::new(2, 0), Position::new(1, 3)],
            score: 3.1623,
        }
    }

    #[test]
    fn diagram_has_expected_dimensions() {
        let board = Fretboard::standard_guitar();
        let svg = render_fingering_svg(&board, &sample(), "C3min", 0);
        // 27 x 8 cells of 60 units plus the caption strip
        assert!(svg.contains(r#"viewBox="0 0 1620 510""#), "{}", &svg[..200]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn diagram_labels_cells_and_ordinals() {
        let board = Fretboard::standard_guitar();
        let svg = render_fingering_svg(&board, &sample(), "C3min", 4);
        assert!(svg.contains(">C3min</text>"));
        assert!(svg.contains(">#5  score 3.16</text>"));
        // played cells in black, the rest in gray
        assert!(svg.contains(&format!(r#"fill="{TEXT_COLOR}" text-anchor="middle" dominant-baseline="central">[G3]</text>"#)));
        assert!(svg.contains(&format!(r#"fill="{TEXT_COLOR}" text-anchor="middle" dominant-baseline="central">[D4]</text>"#)));
        assert!(svg.contains(&format!(r#"fill="{IDLE_PITCH_COLOR}" text-anchor="middle" dominant-baseline="central">[E2]</text>"#)));
        // one pitch label per cell
        assert_eq!(svg.matches("dominant-baseline=\"central\">[").count(), 6 * 25);
        // fret numbers run 1..24 on top and bottom
        assert_eq!(svg.matches(">24</text>").count(), 2);
        assert_eq!(svg.matches("<line").count(), 7 + 26);
    }

    #[test]
    fn scale_renders_one_svg_per_fingering() {
        let board = Fretboard::standard_guitar();
        let result = fingerings_for_scale(
            &board,
            Pitch::new(NoteName::E, 2),
            ScaleKind::Minor,
            &GeneratorOptions { cutoff: 3, ..Default::default() },
        );
        let svgs = render_scale_svgs(&board, &result);
        assert_eq!(svgs.len(), result.fingerings.len());
        assert!(svgs.iter().all(|s| s.contains(">E2min</text>")));
    }
}
