//! Tuition fee range slider
//!
//! Two handles over the fee domain. Up/Down pick the active handle,
//! Left/Right nudge it one step, Home/End snap it to its extreme. All
//! clamping lives in the range itself; this component only proposes values.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studydeck_core::{BoundedRange, Component, EventKind};

use crate::action::Action;
use crate::state::FeeBound;

pub struct FeeSliderProps<'a> {
    pub range: &'a BoundedRange,
    pub active: FeeBound,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct FeeSlider;

impl FeeSlider {
    pub fn new() -> Self {
        Self
    }
}

fn dollars(v: u32) -> String {
    // 100000 -> "$100,000"
    let s = v.to_string();
    let mut out = String::from("$");
    let offset = s.len() % 3;
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Component<Action> for FeeSlider {
    type Props<'a> = FeeSliderProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        let r = props.range;
        let step = r.step();
        match key.code {
            KeyCode::Up | KeyCode::Down => Some(Action::FeeBoundSwitch),
            KeyCode::Left => Some(match props.active {
                FeeBound::Min => Action::FeeSetMin(r.min().saturating_sub(step)),
                FeeBound::Max => Action::FeeSetMax(r.max().saturating_sub(step)),
            }),
            KeyCode::Right => Some(match props.active {
                FeeBound::Min => Action::FeeSetMin(r.min() + step),
                FeeBound::Max => Action::FeeSetMax(r.max().saturating_add(step)),
            }),
            KeyCode::Home => Some(match props.active {
                FeeBound::Min => Action::FeeSetMin(r.floor()),
                FeeBound::Max => Action::FeeSetMax(r.min() + step),
            }),
            KeyCode::End => Some(match props.active {
                FeeBound::Min => Action::FeeSetMin(r.max().saturating_sub(step)),
                FeeBound::Max => Action::FeeSetMax(r.ceil()),
            }),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let r = props.range;
        let bound_style = |bound: FeeBound| {
            if props.is_focused && props.active == bound {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };
        let label = Line::from(vec![
            Span::styled(dollars(r.min()), bound_style(FeeBound::Min)),
            Span::styled(" to ", Style::default().fg(Color::DarkGray)),
            Span::styled(dollars(r.max()), bound_style(FeeBound::Max)),
        ]);
        frame.render_widget(Paragraph::new(label), area);

        if area.height < 2 {
            return;
        }
        let track_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let width = track_area.width.max(2) as usize;
        let pos = |v: u32| ((r.ratio(v) * (width - 1) as f64).round() as usize).min(width - 1);
        let (lo, hi) = (pos(r.min()), pos(r.max()));
        let track: String = (0..width)
            .map(|i| {
                if i == lo || i == hi {
                    '●'
                } else if i > lo && i < hi {
                    '━'
                } else {
                    '─'
                }
            })
            .collect();
        let track_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(track, track_style)),
            track_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FEE_STEP, MAX_FEE, MIN_FEE};
    use studydeck_core::assert_emitted;
    use studydeck_core::testing::{key_event, RenderHarness};

    fn range() -> BoundedRange {
        BoundedRange::new(MIN_FEE, MAX_FEE, FEE_STEP)
    }

    fn props(range: &BoundedRange, active: FeeBound) -> FeeSliderProps<'_> {
        FeeSliderProps {
            range,
            active,
            is_focused: true,
        }
    }

    #[test]
    fn right_nudges_active_bound_up_one_step() {
        let mut slider = FeeSlider::new();
        let r = range();
        let actions: Vec<_> = slider
            .handle_event(&key_event("right"), props(&r, FeeBound::Min))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::FeeSetMin(v) if *v == FEE_STEP);
    }

    #[test]
    fn left_at_floor_proposes_floor_again() {
        let mut slider = FeeSlider::new();
        let r = range();
        let actions: Vec<_> = slider
            .handle_event(&key_event("left"), props(&r, FeeBound::Min))
            .into_iter()
            .collect();
        // The reducer reports no change for this
        assert_emitted!(actions, Action::FeeSetMin(0));
    }

    #[test]
    fn up_switches_handles() {
        let mut slider = FeeSlider::new();
        let r = range();
        let actions: Vec<_> = slider
            .handle_event(&key_event("up"), props(&r, FeeBound::Min))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::FeeBoundSwitch);
    }

    #[test]
    fn end_snaps_max_to_ceiling() {
        let mut slider = FeeSlider::new();
        let mut r = range();
        r.set_max(50_000);
        let actions: Vec<_> = slider
            .handle_event(&key_event("end"), props(&r, FeeBound::Max))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::FeeSetMax(v) if *v == MAX_FEE);
    }

    #[test]
    fn renders_bounds_and_track() {
        let mut harness = RenderHarness::new(30, 3);
        let mut slider = FeeSlider::new();
        let mut r = range();
        r.set_min(20_000);
        r.set_max(80_000);
        let out = harness.render_to_string(|frame| {
            slider.render(frame, Rect::new(0, 0, 30, 2), props(&r, FeeBound::Min));
        });
        assert!(out.contains("$20,000 to $80,000"));
        assert!(out.contains("●"));
        assert!(out.contains("━"));
    }

    #[test]
    fn dollar_formatting() {
        assert_eq!(dollars(0), "$0");
        assert_eq!(dollars(1000), "$1,000");
        assert_eq!(dollars(100_000), "$100,000");
    }
}
