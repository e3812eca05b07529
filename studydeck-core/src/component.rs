//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI element that renders from props and emits actions.
///
/// Rules:
/// 1. Props carry ALL read-only data needed for rendering (including focus).
/// 2. `handle_event` returns actions; it never mutates application state.
/// 3. Presentation-only state (scroll offset, cursor position) may live in
///    `&mut self`; data mutations go through the reducer.
///
/// # Example
///
/// ```ignore
/// struct ResultCount;
///
/// struct ResultCountProps {
///     shown: usize,
/// }
///
/// impl Component<AppAction> for ResultCount {
///     type Props<'a> = ResultCountProps;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("({})", props.shown);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Read-only data required to render and handle events.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None` for nothing (the
    /// default), `Some(action)` for one, a `Vec` for several.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
