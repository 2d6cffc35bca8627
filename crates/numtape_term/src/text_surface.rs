//! Plain-text rendition of the tape for terminals.
//!
//! Each unit takes [`CELL`] columns. Inputs and frozen labels sit above the
//! arc they belong to; the sum input trails the ruler.

use std::collections::BTreeMap;

use numtape::geometry::{ArcPath, InputPlacement, TapeGeometry};
use numtape::problem::Field;
use numtape::surface::Surface;

pub const CELL: usize = 3;
const INPUT_BOX: &str = "[_]";

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarkState {
    Editing,
    Frozen(Option<i64>),
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Mark {
    placement: InputPlacement,
    state: MarkState,
}

#[derive(Debug, Clone)]
pub struct TextSurface {
    geometry: TapeGeometry,
    max_number: u32,
    tape_drawn: bool,
    arcs: Vec<(f64, f64)>,
    marks: BTreeMap<Field, Mark>,
    expression: String,
}

impl TextSurface {
    pub fn new(geometry: TapeGeometry, max_number: u32) -> Self {
        Self {
            geometry,
            max_number,
            tape_drawn: false,
            arcs: Vec::new(),
            marks: BTreeMap::new(),
            expression: String::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    fn width(&self) -> usize {
        (self.max_number as usize + 1) * CELL
    }

    /// Column under pixel `x`, clamped to the ruler.
    fn column(&self, x: f64) -> usize {
        let units = (x - self.geometry.margin_left) / self.geometry.step;
        let col = (units * CELL as f64).round().max(0.0) as usize;
        col.min(self.width().saturating_sub(1))
    }

    fn put(line: &mut [char], col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(slot) = line.get_mut(col + i) {
                *slot = ch;
            }
        }
    }

    fn marker_line(&self) -> Option<String> {
        let mut line = vec![' '; self.width() + INPUT_BOX.len()];
        let mut any = false;
        for mark in self.marks.values() {
            let InputPlacement::At { left, .. } = mark.placement else {
                continue;
            };
            let text = match mark.state {
                MarkState::Editing => INPUT_BOX.to_string(),
                MarkState::Frozen(v) => v.map(|v| v.to_string()).unwrap_or_default(),
                MarkState::Hidden => continue,
            };
            let center = self.column(left + self.geometry.input_size / 2.0);
            let col = center.saturating_sub(text.chars().count() / 2);
            Self::put(&mut line, col, &text);
            any = true;
        }
        any.then(|| line.into_iter().collect::<String>().trim_end().to_string())
    }

    fn arc_line(&self, (left, right): (f64, f64)) -> String {
        let (l, r) = (self.column(left), self.column(right));
        let mut line = vec![' '; self.width()];
        for slot in line.iter_mut().take(r).skip(l + 1) {
            *slot = '-';
        }
        line[l] = '\'';
        line[r] = '>';
        line.into_iter().collect::<String>().trim_end().to_string()
    }

    fn ruler(&self) -> String {
        (0..=self.max_number)
            .map(|n| format!("{:<width$}", n, width = CELL))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Everything drawn so far, one line per row.
    pub fn render(&self) -> String {
        let mut out = vec![self.expression.clone()];
        if self.tape_drawn {
            out.extend(self.marker_line());
            out.extend(self.arcs.iter().map(|&span| self.arc_line(span)));
            out.push(self.ruler());
        }
        let sum_editing = self.marks.get(&Field::Sum).is_some_and(|m| {
            m.state == MarkState::Editing && matches!(m.placement, InputPlacement::RightEdge { .. })
        });
        if sum_editing {
            out.push(format!("= {INPUT_BOX}"));
        }
        out.join("\n")
    }
}

impl Surface for TextSurface {
    fn draw_tape(&mut self, geometry: &TapeGeometry) {
        self.geometry = *geometry;
        self.tape_drawn = true;
    }

    fn stroke_arc(&mut self, arc: &ArcPath) {
        self.arcs.push(arc.x_span());
    }

    fn show_input(&mut self, field: Field, placement: InputPlacement) {
        self.marks.insert(
            field,
            Mark {
                placement,
                state: MarkState::Editing,
            },
        );
    }

    fn freeze_input(&mut self, field: Field, value: Option<i64>) {
        if let Some(mark) = self.marks.get_mut(&field) {
            mark.state = MarkState::Frozen(value);
        }
    }

    fn hide_input(&mut self, field: Field) {
        if let Some(mark) = self.marks.get_mut(&field) {
            mark.state = MarkState::Hidden;
        }
    }

    fn set_expression(&mut self, text: &str) {
        self.expression = text.to_string();
    }
}
