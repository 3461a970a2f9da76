//! Terminal UI rendering for the Finery tour.
//!
//! Layout is a pure function of (area, state): the same geometry helpers
//! drive both drawing and mouse hit-testing in the update function, so a
//! click resolves against exactly what was rendered. This module renders
//! from RenderState (immutable snapshot) - it never mutates application
//! state.
//!
//! Structure mirrors the web tour's default layout: sidebar navigation on
//! the left, header with the logo and theme control, a column of demo
//! cards, a footer of key hints, and the code pullout tray overlaying the
//! right edge while open.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::pages::{
    market_data, ButtonSpec, CurrencyIcon, Demo, DemoCard, Emphasis, Market, MarketView, Route,
};
use crate::pages::{filtered_by_quote, grouped_by_base, page, row_details, sorted_desc};
use crate::render::RenderState;
use crate::theme::{self, Palette};

pub const SIDEBAR_WIDTH: u16 = 24;
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
/// The pullout tray caps at 72 columns, like the web tray's 720px.
pub const TRAY_MAX_WIDTH: u16 = 72;

const CLOSE_LABEL: &str = "\u{2192} close";

// -----------------------------------------------------------------------------
// Layout geometry (shared with hit-testing)
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub sidebar: Rect,
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn regions(area: Rect, sidebar_open: bool) -> Regions {
    let sidebar_width = if sidebar_open {
        SIDEBAR_WIDTH.min(area.width / 2)
    } else {
        0
    };
    let [sidebar, rest] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(rest);
    Regions {
        sidebar,
        header,
        main,
        footer,
    }
}

/// The pullout tray: right-aligned, full height.
pub fn tray_rect(area: Rect) -> Rect {
    let width = area.width.min(TRAY_MAX_WIDTH);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

/// The explicit close control at the tray's top-left.
pub fn close_control_rect(tray: Rect) -> Rect {
    let width = (CLOSE_LABEL.chars().count() as u16).min(tray.width.saturating_sub(2));
    Rect::new(tray.x + 2, tray.y + 1, width, 1.min(tray.height))
}

/// One sidebar row per route, top-down.
pub fn nav_item_rects(sidebar: Rect) -> Vec<(Route, Rect)> {
    Route::ALL
        .iter()
        .enumerate()
        .filter_map(|(i, route)| {
            let y = sidebar.y + 1 + i as u16;
            (y < sidebar.y + sidebar.height)
                .then(|| (*route, Rect::new(sidebar.x, y, sidebar.width, 1)))
        })
        .collect()
}

pub fn nav_item_at(sidebar: Rect, pos: Position) -> Option<Route> {
    nav_item_rects(sidebar)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(route, _)| route)
}

/// Fixed display height per demo kind, borders included.
pub fn card_height(demo: &Demo) -> u16 {
    match demo {
        Demo::Prose(_) => 7,
        Demo::Buttons(_) => 5,
        Demo::Icon(_) => 6,
        Demo::Market(MarketView::Basic) => 19,
        Demo::Market(MarketView::Paginated { .. }) => 19,
        Demo::Market(MarketView::Sorted) => 19,
        Demo::Market(MarketView::Filtered { .. }) => 13,
        Demo::Market(MarketView::MasterDetails) => 9,
        Demo::Market(MarketView::RowChildren) => 18,
        Demo::Products { .. } => 7,
    }
}

/// The cards visible from `card_scroll`, with their indices. Cards stack
/// vertically with one blank row between; a card that does not fully fit
/// is dropped unless nothing fits at all.
pub fn card_rects(main: Rect, route: Route, card_scroll: usize) -> Vec<(usize, Rect)> {
    let mut rects = Vec::new();
    let mut y = main.y;
    let bottom = main.y + main.height;
    for (i, card) in route.cards().iter().enumerate().skip(card_scroll) {
        let height = card_height(&card.demo);
        if y + height > bottom {
            if rects.is_empty() && y < bottom {
                rects.push((i, Rect::new(main.x, y, main.width, bottom - y)));
            }
            break;
        }
        rects.push((i, Rect::new(main.x, y, main.width, height)));
        y += height + 1;
    }
    rects
}

pub fn card_at(main: Rect, route: Route, card_scroll: usize, pos: Position) -> Option<usize> {
    card_rects(main, route, card_scroll)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(i, _)| i)
}

/// Smallest scroll offset that keeps the selected card visible.
pub fn scroll_for_selection(
    main: Rect,
    route: Route,
    selected: usize,
    current_scroll: usize,
) -> usize {
    if selected <= current_scroll {
        return selected;
    }
    let visible = |scroll: usize| {
        card_rects(main, route, scroll)
            .iter()
            .any(|(i, _)| *i == selected)
    };
    let mut scroll = current_scroll;
    while scroll < selected && !visible(scroll) {
        scroll += 1;
    }
    scroll
}

// -----------------------------------------------------------------------------
// Drawing
// -----------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &RenderState) {
    let palette = state.theme.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    let regions = regions(area, state.sidebar_open);
    if regions.sidebar.width > 0 {
        render_sidebar(frame, state, regions.sidebar, palette);
    }
    render_header(frame, state, regions.header, palette);
    render_cards(frame, state, regions.main, palette);
    render_footer(frame, state, regions.footer, palette);

    // The tray overlays everything; the rest of the screen is the backdrop.
    if state.pullout_open {
        render_pullout(frame, state, area);
    }
}

fn render_sidebar(frame: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    let mut lines = vec![Line::from("")];
    for route in Route::ALL {
        let (indent, label) = match route.nav_label().strip_prefix("Grid: ") {
            Some(sub) if route != Route::GridBasics => ("    ", sub),
            Some(_) => ("  ", "Grid"),
            None => ("  ", route.nav_label()),
        };
        let style = if route == state.route {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.text_dimmed)
        };
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(label.to_string(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_header(frame: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    let left = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "Finery",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" UI", Style::default().fg(palette.text)),
        Span::styled("   ", Style::default()),
        Span::styled(state.route.title(), Style::default().fg(palette.text_dimmed)),
    ]);

    let theme_glyph = match state.theme {
        theme::Theme::Light => "\u{25d0}",
        theme::Theme::Dark => "\u{25d1}",
    };
    let right = Line::from(vec![
        Span::styled(
            format!("{} {} theme", theme_glyph, state.theme.label()),
            Style::default().fg(palette.text_dimmed),
        ),
        Span::styled("  t  ", Style::default().fg(palette.text_muted)),
    ]);

    let [_, top, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(left), top);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), top);
}

fn render_footer(frame: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    let hints = if state.pullout_open {
        "  esc close   x close   j/k scroll   q quit"
    } else {
        "  tab page   j/k card   enter source   y copy   t theme   b sidebar   q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.text_muted))),
        area,
    );
}

fn render_cards(frame: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    for (i, rect) in card_rects(area, state.route, state.card_scroll) {
        let Some(card) = state.route.cards().get(i) else {
            continue;
        };
        render_card(
            frame,
            card,
            rect,
            i == state.selected_card,
            state.copied_card == Some(i),
            palette,
        );
    }
}

fn render_card(
    frame: &mut Frame,
    card: &DemoCard,
    rect: Rect,
    selected: bool,
    copied: bool,
    palette: &Palette,
) {
    let border_style = if selected {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let status = if copied {
        Span::styled("\u{2713} copied ", Style::default().fg(palette.buy))
    } else {
        Span::styled("y copy  s source ", Style::default().fg(palette.text_muted))
    };
    let block = Block::bordered()
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", card.title.to_uppercase()),
            Style::default().fg(palette.text_dimmed),
        ))
        .title_top(Line::from(status).right_aligned());

    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match &card.demo {
        Demo::Prose(text) => {
            let para = Paragraph::new(*text)
                .style(Style::default().fg(palette.text))
                .wrap(Wrap { trim: true });
            frame.render_widget(para, inset(inner, 1, 1));
        }
        Demo::Buttons(specs) => {
            let para = Paragraph::new(button_line(specs, palette));
            frame.render_widget(para, inset(inner, 1, 1));
        }
        Demo::Icon(icon) => render_icon(frame, icon, inset(inner, 1, 1), palette),
        Demo::Market(view) => render_market_view(frame, *view, inner, palette),
        Demo::Products {
            rows,
            loading,
            no_data_text,
        } => render_products(frame, rows, *loading, *no_data_text, inner, palette),
    }
}

fn inset(rect: Rect, dx: u16, dy: u16) -> Rect {
    Rect::new(
        rect.x + dx.min(rect.width),
        rect.y + dy.min(rect.height),
        rect.width.saturating_sub(dx * 2),
        rect.height.saturating_sub(dy * 2),
    )
}

fn button_line(specs: &[ButtonSpec], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for spec in specs {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(button_span(spec, palette));
    }
    Line::from(spans)
}

fn button_span(spec: &ButtonSpec, palette: &Palette) -> Span<'static> {
    use ratatui::style::Color;

    let mut style = match spec.emphasis {
        Emphasis::Primary => Style::default().bg(palette.primary).fg(Color::White),
        Emphasis::Secondary => Style::default().bg(palette.surface).fg(palette.text),
        Emphasis::Ghost => Style::default().fg(palette.text_dimmed),
        Emphasis::Danger => Style::default().bg(palette.danger).fg(Color::White),
        Emphasis::Buy => Style::default().bg(palette.buy).fg(Color::White),
        Emphasis::Sell => Style::default().bg(palette.sell).fg(Color::White),
    };
    if spec.disabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let mut label = String::new();
    if spec.loading {
        label.push_str("\u{2026} ");
    }
    if let Some(glyph) = spec.decorator_left {
        label.push_str(glyph);
        label.push(' ');
    }
    label.push_str(spec.label);
    if let Some(glyph) = spec.decorator_right {
        label.push(' ');
        label.push_str(glyph);
    }

    let padded = if spec.compact {
        format!(" {} ", label)
    } else {
        format!("  {}  ", label)
    };
    Span::styled(padded, style)
}

fn render_icon(frame: &mut Frame, icon: &CurrencyIcon, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", icon.glyph),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} \u{2014} {}", icon.code, icon.name),
            Style::default().fg(palette.text_dimmed),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn market_row(market: &Market, palette: &Palette) -> Row<'static> {
    let status_style = if market.trading_disabled {
        Style::default().fg(palette.danger)
    } else {
        Style::default().fg(palette.buy)
    };
    let dimmed = Style::default().fg(palette.text_dimmed);
    Row::new(vec![
        Cell::from(Span::styled(market.id.clone(), Style::default().fg(palette.text))),
        Cell::from(Span::styled(market.base_currency.clone(), dimmed)),
        Cell::from(Span::styled(market.quote_currency.clone(), dimmed)),
        Cell::from(Span::styled(market.base_min_size.clone(), dimmed)),
        Cell::from(Span::styled(market.base_max_size.clone(), dimmed)),
        Cell::from(Span::styled(market.status.clone(), status_style)),
    ])
}

fn market_table<'a, I>(markets: I, market_header: &'static str, palette: &Palette) -> Table<'static>
where
    I: IntoIterator<Item = &'a Market>,
{
    let rows: Vec<Row<'static>> = markets
        .into_iter()
        .map(|m| market_row(m, palette))
        .collect();
    let header = Row::new(vec![
        market_header,
        "Base",
        "Quote",
        "Base Min",
        "Base Max",
        "Status",
    ])
    .style(
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::BOLD),
    );
    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(header)
}

fn render_market_view(frame: &mut Frame, view: MarketView, inner: Rect, palette: &Palette) {
    let area = inset(inner, 1, 0);
    match view {
        MarketView::Basic => {
            frame.render_widget(market_table(market_data(), "Market", palette), area);
        }
        MarketView::Sorted => {
            let sorted = sorted_desc();
            frame.render_widget(
                market_table(sorted.into_iter(), "Market \u{2193}", palette),
                area,
            );
        }
        MarketView::Paginated { page_size } => {
            let [table_area, pager_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
            let total = market_data().len();
            let pages = total.div_ceil(page_size);
            frame.render_widget(market_table(page(page_size), "Market", palette), table_area);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Page 1 of {} \u{b7} {} markets", pages.max(1), total),
                    Style::default().fg(palette.text_muted),
                )),
                pager_area,
            );
        }
        MarketView::Filtered { quote } => {
            let [filter_area, table_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("quote = {}", quote),
                    Style::default().fg(palette.accent),
                )),
                filter_area,
            );
            frame.render_widget(
                market_table(filtered_by_quote(quote).into_iter(), "Market", palette),
                table_area,
            );
        }
        MarketView::MasterDetails => {
            let markets = market_data();
            let shown = &markets[..markets.len().min(4)];
            let [table_area, detail_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
            frame.render_widget(market_table(shown, "\u{25be} Market", palette), table_area);
            if let Some(first) = shown.first() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!("\u{2514} {}", row_details(first)),
                        Style::default().fg(palette.text_dimmed),
                    )),
                    detail_area,
                );
            }
        }
        MarketView::RowChildren => {
            let mut lines = Vec::new();
            for (parent, children) in grouped_by_base() {
                lines.push(Line::from(Span::styled(
                    format!("\u{25be} {}", parent.id),
                    Style::default().fg(palette.text),
                )));
                for child in children {
                    lines.push(Line::from(Span::styled(
                        format!("    \u{2514} {}", child.id),
                        Style::default().fg(palette.text_dimmed),
                    )));
                }
            }
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

fn render_products(
    frame: &mut Frame,
    rows: &[(&str, &str)],
    loading: bool,
    no_data_text: Option<&str>,
    inner: Rect,
    palette: &Palette,
) {
    let area = inset(inner, 1, 0);
    let mut lines = vec![Line::from(Span::styled(
        format!("{:<22}{}", "Product Name", "Product Description"),
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::BOLD),
    ))];
    for (name, desc) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", name), Style::default().fg(palette.text)),
            Span::styled((*desc).to_string(), Style::default().fg(palette.text_dimmed)),
        ]));
    }
    if loading {
        lines.push(Line::from(Span::styled(
            "\u{280b} Loading\u{2026}",
            Style::default().fg(palette.accent),
        )));
    } else if rows.is_empty() {
        if let Some(text) = no_data_text {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(palette.text_dimmed),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_pullout(frame: &mut Frame, state: &RenderState, area: Rect) {
    let tray = tray_rect(area);
    frame.render_widget(Clear, tray);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::CODE_BG)),
        tray,
    );

    let close = close_control_rect(tray);
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(theme::DARK.text_dimmed),
        )),
        close,
    );

    if tray.width <= 6 || tray.height <= 5 {
        return;
    }
    let code_area = Rect::new(tray.x + 3, tray.y + 3, tray.width - 6, tray.height - 4);
    let para = Paragraph::new(Text::from(state.code_lines.clone()))
        .style(theme::code_text_style())
        .scroll((state.pullout_scroll, 0));
    frame.render_widget(para, code_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn test_regions_respect_sidebar_toggle() {
        let open = regions(AREA, true);
        assert_eq!(open.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(open.main.width, AREA.width - SIDEBAR_WIDTH);

        let closed = regions(AREA, false);
        assert_eq!(closed.sidebar.width, 0);
        assert_eq!(closed.main.width, AREA.width);
    }

    #[test]
    fn test_tray_is_right_aligned_and_capped() {
        let tray = tray_rect(AREA);
        assert_eq!(tray.width, TRAY_MAX_WIDTH);
        assert_eq!(tray.x + tray.width, AREA.width);
        assert_eq!(tray.height, AREA.height);

        let narrow = Rect::new(0, 0, 40, 20);
        assert_eq!(tray_rect(narrow).width, 40);
    }

    #[test]
    fn test_close_control_sits_inside_tray() {
        let tray = tray_rect(AREA);
        let close = close_control_rect(tray);
        assert!(tray.contains(Position::new(close.x, close.y)));
        assert!(close.x + close.width <= tray.x + tray.width);
    }

    #[test]
    fn test_card_rects_are_disjoint_and_inside_main() {
        let main = regions(AREA, true).main;
        let rects = card_rects(main, Route::Buttons, 0);
        assert!(!rects.is_empty());
        for window in rects.windows(2) {
            let (_, a) = window[0];
            let (_, b) = window[1];
            assert!(a.y + a.height < b.y, "cards must not overlap");
        }
        for (_, rect) in &rects {
            assert!(rect.y + rect.height <= main.y + main.height);
        }
    }

    #[test]
    fn test_tiny_main_still_shows_one_card() {
        let main = Rect::new(0, 0, 60, 4);
        let rects = card_rects(main, Route::GridBasics, 0);
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn test_scroll_for_selection_keeps_card_visible() {
        let main = regions(AREA, true).main;
        let last = Route::Buttons.cards().len() - 1;
        let scroll = scroll_for_selection(main, Route::Buttons, last, 0);
        assert!(card_rects(main, Route::Buttons, scroll)
            .iter()
            .any(|(i, _)| *i == last));

        // Moving back up to an earlier card scrolls straight to it.
        assert_eq!(scroll_for_selection(main, Route::Buttons, 0, scroll), 0);
    }

    #[test]
    fn test_nav_hit_testing_matches_rows() {
        let sidebar = regions(AREA, true).sidebar;
        for (route, rect) in nav_item_rects(sidebar) {
            let pos = Position::new(rect.x + 1, rect.y);
            assert_eq!(nav_item_at(sidebar, pos), Some(route));
        }
        assert_eq!(nav_item_at(sidebar, Position::new(0, 0)), None);
    }

    #[test]
    fn test_card_hit_testing() {
        let main = regions(AREA, true).main;
        let rects = card_rects(main, Route::Buttons, 0);
        let (index, rect) = rects[rects.len() - 1];
        let pos = Position::new(rect.x + 2, rect.y + 1);
        assert_eq!(card_at(main, Route::Buttons, 0, pos), Some(index));
    }

    #[test]
    fn test_draw_smoke_all_routes() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        for route in Route::ALL {
            let state = RenderState {
                route,
                ..RenderState::default()
            };
            terminal.draw(|f| draw(f, &state)).unwrap();
        }
    }

    #[test]
    fn test_draw_smoke_pullout_open() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = RenderState {
            pullout_open: true,
            code_lines: crate::highlight::highlight_lines("const x = 1"),
            ..RenderState::default()
        };
        terminal.draw(|f| draw(f, &state)).unwrap();
    }
}
