//! Results grid
//!
//! Cards in up to two columns, scrolled vertically in terminal rows. The
//! grid renders whatever slice of cards intersects the viewport; cards
//! scrolled past the top are dropped whole rather than clipped.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use studydeck_core::Component;

use crate::action::Action;
use crate::catalog::{flag_url, Country, Course, University};

const COURSE_CARD_HEIGHT: u16 = 8;
const UNIVERSITY_CARD_HEIGHT: u16 = 6;
/// Two columns once there is room for them.
const TWO_COLUMN_MIN_WIDTH: u16 = 72;

pub enum GridRows<'a> {
    Courses(&'a [&'a Course]),
    Universities(&'a [&'a University]),
}

impl GridRows<'_> {
    pub fn len(&self) -> usize {
        match self {
            GridRows::Courses(c) => c.len(),
            GridRows::Universities(u) => u.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn empty_text(&self) -> &'static str {
        match self {
            GridRows::Courses(_) => "No courses match your filters.",
            GridRows::Universities(_) => "No universities match your filters.",
        }
    }

    fn card_height(&self) -> u16 {
        match self {
            GridRows::Courses(_) => COURSE_CARD_HEIGHT,
            GridRows::Universities(_) => UNIVERSITY_CARD_HEIGHT,
        }
    }
}

pub struct ListingGridProps<'a> {
    pub rows: GridRows<'a>,
    /// All known countries, for flag lookups on university cards.
    pub countries: &'a [Country],
    /// Offset into the card rows, in terminal rows.
    pub scroll: u16,
}

#[derive(Default)]
pub struct ListingGrid;

impl ListingGrid {
    pub fn new() -> Self {
        Self
    }

    fn course_card(frame: &mut Frame, area: Rect, course: &Course) {
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            course.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} · {}", course.level.label(), course.mode.label()),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                course.university.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(course.location.clone(), dim)),
            Line::from(vec![
                Span::styled("Duration: ", dim),
                Span::raw(course.duration.clone()),
                Span::styled("  Intake: ", dim),
                Span::raw(course.intake.clone()),
            ]),
        ];
        let mut fees = vec![Span::styled("Fees: ", dim), Span::raw(course.fees.clone())];
        if course.scholarship {
            fees.push(Span::styled(
                "  Scholarship available",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(fees));
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn university_card(frame: &mut Frame, area: Rect, university: &University, countries: &[Country]) {
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            university.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = Style::default().fg(Color::DarkGray);
        let rank = match university.ranking {
            Some(r) => format!("Rank #{r}"),
            None => "Unranked".to_string(),
        };
        let popularity = match university.popularity {
            Some(p) => format!("Popularity {p}"),
            None => String::new(),
        };
        let mut lines = vec![
            Line::from(Span::raw(university.location.clone())),
            Line::from(vec![
                Span::styled(rank, Style::default().fg(Color::Magenta)),
                Span::raw("  "),
                Span::styled(popularity, dim),
            ]),
        ];
        // Flag asset for whichever country the location names
        if let Some(country) = countries
            .iter()
            .find(|c| university.location.contains(&c.name))
        {
            lines.push(Line::from(Span::styled(flag_url(&country.code), dim)));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component<Action> for ListingGrid {
    type Props<'a> = ListingGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.rows.is_empty() {
            let msg = Paragraph::new(Line::from(Span::styled(
                props.rows.empty_text(),
                Style::default().fg(Color::DarkGray),
            )));
            let centered = Rect {
                y: area.y + area.height / 3,
                height: 1,
                ..area
            };
            frame.render_widget(msg, centered);
            return;
        }

        let cols = if area.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let card_w = area.width / cols;
        let card_h = props.rows.card_height();

        for i in 0..props.rows.len() {
            let col = (i as u16) % cols;
            let row = (i as u16) / cols;
            let y = i64::from(area.y) + i64::from(row * card_h) - i64::from(props.scroll);
            if y < i64::from(area.y) {
                continue;
            }
            if y >= i64::from(area.bottom()) {
                break;
            }
            let height = card_h.min((i64::from(area.bottom()) - y) as u16);
            if height < 2 {
                continue;
            }
            let card = Rect::new(area.x + col * card_w, y as u16, card_w, height);
            match &props.rows {
                GridRows::Courses(courses) => Self::course_card(frame, card, courses[i]),
                GridRows::Universities(unis) => {
                    Self::university_card(frame, card, unis[i], props.countries)
                }
            }
        }
    }
}
