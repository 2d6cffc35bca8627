//! Host-side rendering interface.
//!
//! The sequencer never touches a canvas or DOM directly. Hosts implement
//! [`Surface`]; the web host paints a 2D canvas and moves input elements, the
//! terminal host prints text, and tests use [`RecordingSurface`].

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::geometry::{ArcPath, InputPlacement, TapeGeometry};
use crate::problem::Field;

pub trait Surface {
    /// Paint the tape background into the lower band.
    fn draw_tape(&mut self, geometry: &TapeGeometry);

    /// Stroke an annotation arc and its arrowhead.
    fn stroke_arc(&mut self, arc: &ArcPath);

    /// Make the input for `field` visible at `placement` and focus it.
    fn show_input(&mut self, field: Field, placement: InputPlacement);

    /// Replace the input for `field` with a read-only label.
    fn freeze_input(&mut self, field: Field, value: Option<i64>);

    fn hide_input(&mut self, field: Field);

    /// Replace the expression readout.
    fn set_expression(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum DrawCommand {
    DrawTape,
    StrokeArc { arc: ArcPath },
    ShowInput { field: Field, placement: InputPlacement },
    FreezeInput { field: Field, value: Option<i64> },
    HideInput { field: Field },
    SetExpression { text: String },
}

/// Keeps every call as a [`DrawCommand`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand back everything recorded so far and start over.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Most recent expression text, if any was set.
    pub fn expression(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::SetExpression { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPath> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeArc { arc } => Some(arc),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_tape(&mut self, _geometry: &TapeGeometry) {
        self.commands.push(DrawCommand::DrawTape);
    }

    fn stroke_arc(&mut self, arc: &ArcPath) {
        self.commands.push(DrawCommand::StrokeArc { arc: *arc });
    }

    fn show_input(&mut self, field: Field, placement: InputPlacement) {
        self.commands
            .push(DrawCommand::ShowInput { field, placement });
    }

    fn freeze_input(&mut self, field: Field, value: Option<i64>) {
        self.commands.push(DrawCommand::FreezeInput { field, value });
    }

    fn hide_input(&mut self, field: Field) {
        self.commands.push(DrawCommand::HideInput { field });
    }

    fn set_expression(&mut self, text: &str) {
        self.commands.push(DrawCommand::SetExpression {
            text: text.to_string(),
        });
    }
}
