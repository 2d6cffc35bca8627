//! The four-step addition walk-through.
//!
//! [`Session`] holds the problem, the learner's values and the current
//! [`Step`]. [`Widget`] pairs a session with a [`Surface`] and is what hosts
//! feed key presses and field commits into.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::expression::{parse_int, ExpressionTemplate, InputValues};
use crate::geometry::TapeGeometry;
use crate::problem::{Field, Problem};
use crate::surface::Surface;

/// Progress marker. Strictly linear: `PrintFirst -> PrintSecond -> PrintSum -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Step {
    #[default]
    PrintFirst,
    PrintSecond,
    PrintSum,
    Done,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::PrintFirst => "print_first",
            Step::PrintSecond => "print_second",
            Step::PrintSum => "print_sum",
            Step::Done => "done",
        }
    }

    /// Field the learner is answering in this step.
    pub fn active_field(self) -> Option<Field> {
        match self {
            Step::PrintFirst => Some(Field::A),
            Step::PrintSecond => Some(Field::B),
            Step::PrintSum => Some(Field::Sum),
            Step::Done => None,
        }
    }

    /// `Done` stays `Done`.
    pub fn next(self) -> Step {
        match self {
            Step::PrintFirst => Step::PrintSecond,
            Step::PrintSecond => Step::PrintSum,
            Step::PrintSum | Step::Done => Step::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == Step::Done
    }
}

/// What the host should do with a raw key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter {
    Allow,
    /// Swallow the key (e.g. `preventDefault`).
    Suppress,
}

impl KeyFilter {
    /// Only keys that read as a base-10 integer get through.
    pub fn for_key(key: &str) -> Self {
        if parse_int(key).is_some() {
            KeyFilter::Allow
        } else {
            KeyFilter::Suppress
        }
    }

    pub fn allows(self) -> bool {
        self == KeyFilter::Allow
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Session {
    problem: Problem,
    values: InputValues,
    step: Step,
}

impl Session {
    pub fn new(problem: Problem) -> Self {
        Self {
            problem,
            values: InputValues::new(),
            step: Step::PrintFirst,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn values(&self) -> &InputValues {
        &self.values
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Check a committed value for `field`, advancing on a match.
    ///
    /// A parsed value is recorded whether or not it is right. Unparsable
    /// input, and commits for a field other than the one being asked for,
    /// are dropped without touching anything.
    pub fn submit_field(&mut self, field: Field, raw: &str) -> bool {
        if self.step.active_field() != Some(field) {
            tracing::debug!(
                field = field.slot(),
                step = self.step.label(),
                "commit for inactive field ignored"
            );
            return false;
        }
        let Some(value) = parse_int(raw) else {
            tracing::debug!(field = field.slot(), raw, "unparsable commit");
            return false;
        };

        self.values.record(field, value);

        if value != i64::from(self.problem.expected(field)) {
            tracing::debug!(field = field.slot(), value, "wrong answer");
            return false;
        }

        let from = self.step;
        self.step = self.step.next();
        tracing::debug!(from = from.label(), to = self.step.label(), "step advanced");
        true
    }
}

/// A session wired to a rendering surface.
#[derive(Debug)]
pub struct Widget<S: Surface> {
    session: Session,
    surface: S,
    geometry: TapeGeometry,
    template: ExpressionTemplate,
}

impl<S: Surface> Widget<S> {
    pub fn new(problem: Problem, config: &WidgetConfig, surface: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            session: Session::new(problem),
            surface,
            geometry: config.geometry,
            template: config.template()?,
        })
    }

    /// Stock geometry and `"{a} + {b} = {sum}"` readout.
    pub fn with_defaults(problem: Problem, surface: S) -> Self {
        Self {
            session: Session::new(problem),
            surface,
            geometry: TapeGeometry::default(),
            template: ExpressionTemplate::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step()
    }

    pub fn geometry(&self) -> &TapeGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// First paint: placeholders, tape, then the opening step.
    pub fn start(&mut self) {
        self.render_expression();
        self.surface.draw_tape(&self.geometry);
        self.render_step();
    }

    pub fn on_key_press(&mut self, _field: Field, key: &str) -> KeyFilter {
        KeyFilter::for_key(key)
    }

    /// Returns whether the answer was accepted.
    pub fn on_field_commit(&mut self, field: Field, raw: &str) -> bool {
        let accepted = self.session.submit_field(field, raw);
        if accepted {
            self.render_step();
        }
        accepted
    }

    /// Bring the surface in line with the current step.
    pub fn render_step(&mut self) {
        let problem = *self.session.problem();
        let (a, b) = (problem.a(), problem.b());

        match self.session.step() {
            Step::PrintFirst => {
                self.draw_arc(0, a);
                self.surface
                    .show_input(Field::A, self.geometry.input_placement(0, a));
            }
            Step::PrintSecond => {
                self.freeze(Field::A);
                self.draw_arc(a, a + b);
                self.surface
                    .show_input(Field::B, self.geometry.input_placement(a, b));
            }
            Step::PrintSum => {
                self.freeze(Field::B);
                self.surface
                    .show_input(Field::Sum, self.geometry.sum_placement());
            }
            Step::Done => self.surface.hide_input(Field::Sum),
        }

        self.render_expression();
    }

    pub fn render_expression(&mut self) {
        let text = self.template.render(self.session.values());
        self.surface.set_expression(&text);
    }

    pub fn draw_arc(&mut self, start_unit: u32, end_unit: u32) {
        let arc = self.geometry.arc(start_unit, end_unit);
        self.surface.stroke_arc(&arc);
    }

    fn freeze(&mut self, field: Field) {
        let value = self.session.values().get(field);
        self.surface.freeze_input(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::InputPlacement;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn three_plus_four() -> Problem {
        Problem::new(3, 4, 20).unwrap()
    }

    fn started() -> Widget<RecordingSurface> {
        let mut w = Widget::with_defaults(three_plus_four(), RecordingSurface::new());
        w.start();
        w
    }

    #[test]
    fn correct_first_answer_advances() {
        let mut s = Session::new(three_plus_four());
        assert!(s.submit_field(Field::A, "3"));
        assert_eq!(s.step(), Step::PrintSecond);
    }

    #[test]
    fn wrong_first_answer_stays_put() {
        let mut s = Session::new(three_plus_four());
        assert!(!s.submit_field(Field::A, "2"));
        assert_eq!(s.step(), Step::PrintFirst);
        assert_eq!(s.values().get(Field::A), Some(2));
    }

    #[test]
    fn wrong_then_right() {
        let mut s = Session::new(three_plus_four());
        assert!(!s.submit_field(Field::A, "5"));
        assert_eq!(s.step(), Step::PrintFirst);
        assert!(s.submit_field(Field::A, "3"));
        assert_eq!(s.step(), Step::PrintSecond);
        assert_eq!(s.values().get(Field::A), Some(3));
    }

    #[test]
    fn garbage_and_empty_never_advance() {
        let mut s = Session::new(three_plus_four());
        assert!(!s.submit_field(Field::A, ""));
        assert!(!s.submit_field(Field::A, "abc"));
        assert_eq!(s.step(), Step::PrintFirst);
        assert!(s.values().is_empty());
    }

    #[test]
    fn inactive_field_commits_are_ignored() {
        let mut s = Session::new(three_plus_four());
        assert!(!s.submit_field(Field::Sum, "7"));
        assert!(!s.submit_field(Field::B, "4"));
        assert_eq!(s.step(), Step::PrintFirst);
        assert!(s.values().is_empty());
    }

    #[test]
    fn done_is_terminal() {
        let mut s = Session::new(three_plus_four());
        for (f, v) in [(Field::A, "3"), (Field::B, "4"), (Field::Sum, "7")] {
            assert!(s.submit_field(f, v));
        }
        assert_eq!(s.step(), Step::Done);
        assert_eq!(Step::Done.next(), Step::Done);
        for &f in Field::all() {
            assert!(!s.submit_field(f, "7"));
        }
        assert_eq!(s.step(), Step::Done);
    }

    #[test]
    fn key_filter_only_lets_digits_through() {
        let mut w = started();
        assert_eq!(w.on_key_press(Field::A, "4"), KeyFilter::Allow);
        assert_eq!(w.on_key_press(Field::A, "0"), KeyFilter::Allow);
        assert_eq!(w.on_key_press(Field::A, "a"), KeyFilter::Suppress);
        assert_eq!(w.on_key_press(Field::A, "-"), KeyFilter::Suppress);
        assert_eq!(w.on_key_press(Field::A, "Enter"), KeyFilter::Suppress);
        assert_eq!(w.on_key_press(Field::A, " "), KeyFilter::Suppress);
    }

    #[test]
    fn start_paints_expression_tape_arc_and_first_input() {
        let w = started();
        let g = TapeGeometry::default();
        assert_eq!(
            w.surface().commands(),
            &[
                DrawCommand::SetExpression {
                    text: "? + ? = ?".to_string()
                },
                DrawCommand::DrawTape,
                DrawCommand::StrokeArc { arc: g.arc(0, 3) },
                DrawCommand::ShowInput {
                    field: Field::A,
                    placement: g.input_placement(0, 3)
                },
                DrawCommand::SetExpression {
                    text: "? + ? = ?".to_string()
                },
            ]
        );
    }

    #[test]
    fn full_sequence() {
        let mut w = started();
        let g = TapeGeometry::default();
        w.surface_mut().take();

        assert!(w.on_field_commit(Field::A, "3"));
        assert_eq!(w.step(), Step::PrintSecond);
        assert_eq!(w.surface().expression(), Some("3 + ? = ?"));
        assert_eq!(
            w.surface_mut().take(),
            vec![
                DrawCommand::FreezeInput {
                    field: Field::A,
                    value: Some(3)
                },
                DrawCommand::StrokeArc { arc: g.arc(3, 7) },
                DrawCommand::ShowInput {
                    field: Field::B,
                    placement: g.input_placement(3, 4)
                },
                DrawCommand::SetExpression {
                    text: "3 + ? = ?".to_string()
                },
            ]
        );

        assert!(w.on_field_commit(Field::B, "4"));
        assert_eq!(w.step(), Step::PrintSum);
        assert_eq!(w.surface().expression(), Some("3 + 4 = ?"));
        let cmds = w.surface_mut().take();
        assert_eq!(
            cmds[..2],
            [
                DrawCommand::FreezeInput {
                    field: Field::B,
                    value: Some(4)
                },
                DrawCommand::ShowInput {
                    field: Field::Sum,
                    placement: InputPlacement::RightEdge { right: -5.0 }
                },
            ]
        );

        assert!(w.on_field_commit(Field::Sum, "7"));
        assert_eq!(w.step(), Step::Done);
        assert_eq!(w.surface().expression(), Some("3 + 4 = 7"));
        assert_eq!(
            w.surface().commands()[0],
            DrawCommand::HideInput { field: Field::Sum }
        );
    }

    #[test]
    fn wrong_answer_does_not_repaint() {
        let mut w = started();
        w.surface_mut().take();
        assert!(!w.on_field_commit(Field::A, "5"));
        assert!(w.surface().commands().is_empty());
        assert_eq!(w.step(), Step::PrintFirst);
    }

    #[test]
    fn arcs_are_contiguous_across_steps() {
        let mut w = started();
        w.on_field_commit(Field::A, "3");
        let spans: Vec<(f64, f64)> = w.surface().arcs().map(|a| a.x_span()).collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].1, spans[1].0);
        let step = w.geometry().step;
        assert_eq!(spans[0].1 - spans[0].0, step * 3.0);
        assert_eq!(spans[1].1 - spans[1].0, step * 4.0);
    }

    #[test]
    fn custom_config_template_is_used() {
        let cfg = WidgetConfig {
            pattern: "{a}+{b}={sum}".to_string(),
            placeholder: "_".to_string(),
            ..Default::default()
        };
        let mut w = Widget::new(three_plus_four(), &cfg, RecordingSurface::new()).unwrap();
        w.start();
        assert_eq!(w.surface().expression(), Some("_+_=_"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = WidgetConfig {
            max_number: 0,
            ..Default::default()
        };
        assert!(Widget::new(three_plus_four(), &cfg, RecordingSurface::new()).is_err());
    }
}
