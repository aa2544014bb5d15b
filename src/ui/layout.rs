use {
    crate::{
        chart_service::{BarChartModel, BoxPlotModel, BoxStats, Chart, ChartSet, HistogramModel},
        ui::View,
    },
    ratatui::{
        layout::{Constraint, Direction, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        symbols::Marker,
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Context, Line as CanvasLine, Points, Rectangle},
            Bar, BarChart, BarGroup, Block, Borders, Paragraph,
        },
        Frame,
    },
};

const BAR_GAP: u16 = 2;

/// Render header, charts and key help
pub fn render_layout(f: &mut Frame, charts: &ChartSet, view: View) {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Charts
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], charts);

    match view {
        View::Zoom(index) if index < charts.len() => render_chart(f, chunks[1], &charts.charts[index], index),
        _ => render_grid(f, chunks[1], charts),
    }

    render_footer(f, chunks[2], view);
}

fn render_header(f: &mut Frame, area: Rect, charts: &ChartSet) {
    let header = Block::default().borders(Borders::ALL);
    let text = Line::from(vec![
        Span::styled("Rocket Plot", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " - {} - {} games",
            charts.player_name.as_deref().unwrap_or("no player"),
            charts.games
        )),
    ]);
    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_footer(f: &mut Frame, area: Rect, view: View) {
    let help = match view {
        View::Grid => "q quit | 1-5 zoom | left/right cycle",
        View::Zoom(_) => "q quit | 0 grid | left/right cycle",
    };
    f.render_widget(Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)), area);
}

/// Two charts per row, an odd one out gets the full width
fn render_grid(f: &mut Frame, area: Rect, charts: &ChartSet) {
    if charts.is_empty() {
        return;
    }
    let rows = charts.len().div_ceil(2);
    let row_areas = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let start = row * 2;
        let pair = &charts.charts[start..(start + 2).min(charts.len())];
        let cells = RatLayout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, pair.len() as u32); pair.len()])
            .split(*row_area);
        for (offset, (chart, cell)) in pair.iter().zip(cells.iter()).enumerate() {
            render_chart(f, *cell, chart, start + offset);
        }
    }
}

fn render_chart(f: &mut Frame, area: Rect, chart: &Chart, index: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} {}", index + 1, chart.title()));
    match chart {
        Chart::Bar(model) => render_bars(f, area, block, model),
        Chart::Box(model) => render_box_plot(f, area, block, model),
        Chart::Histogram(model) => render_histogram(f, area, block, model),
    }
}

fn bar_width(area: Rect, count: usize) -> u16 {
    let count = count.max(1) as u16;
    let inner = area.width.saturating_sub(2);
    (inner.saturating_sub(BAR_GAP * (count - 1)) / count).clamp(1, 16)
}

fn render_bars(f: &mut Frame, area: Rect, block: Block, model: &BarChartModel) {
    let bars: Vec<Bar> = model.bars.iter()
        .map(|e| Bar::default()
            .value(e.value)
            .label(Line::from(e.label.clone()))
            .text_value(e.value.to_string())
            .style(Style::default().fg(e.color))
            .value_style(Style::default().fg(Color::Black).bg(e.color)))
        .collect();

    let chart = BarChart::default()
        .block(block.title_bottom(model.y_label.clone()))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, bars.len()))
        .bar_gap(BAR_GAP)
        .max(model.y_max);
    f.render_widget(chart, area);
}

fn bin_label(value: f64, width: f64) -> String {
    match width >= 1.0 {
        true => format!("{value:.0}"),
        false => format!("{value:.1}"),
    }
}

fn render_histogram(f: &mut Frame, area: Rect, block: Block, model: &HistogramModel) {
    let block = block.title_bottom(format!("{} / {}", model.x_label, model.y_label));
    if model.bins.is_empty() {
        f.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }

    let bars: Vec<Bar> = model.bins.iter()
        .map(|e| Bar::default()
            .value(e.count)
            .label(Line::from(bin_label(e.lower, e.upper - e.lower)))
            .text_value(e.count.to_string())
            .style(Style::default().fg(model.color)))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, bars.len()).min(8))
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn draw_box(ctx: &mut Context, x: f64, stats: &BoxStats, color: Color) {
    let half = 0.25;
    ctx.draw(&Rectangle { x: x - half, y: stats.q1, width: half * 2.0, height: stats.q3 - stats.q1, color });
    ctx.draw(&CanvasLine { x1: x - half, y1: stats.median, x2: x + half, y2: stats.median, color: Color::White });

    // Whiskers with caps
    ctx.draw(&CanvasLine { x1: x, y1: stats.min_whisker, x2: x, y2: stats.q1, color });
    ctx.draw(&CanvasLine { x1: x, y1: stats.q3, x2: x, y2: stats.max_whisker, color });
    for y in [stats.min_whisker, stats.max_whisker] {
        ctx.draw(&CanvasLine { x1: x - half / 2.0, y1: y, x2: x + half / 2.0, y2: y, color });
    }

    let outliers: Vec<(f64, f64)> = stats.outliers.iter().map(|e| (x, *e)).collect();
    ctx.draw(&Points { coords: &outliers, color });
}

fn render_box_plot(f: &mut Frame, area: Rect, block: Block, model: &BoxPlotModel) {
    let canvas = Canvas::default()
        .block(block.title_bottom(model.y_label.clone()))
        .marker(Marker::Braille)
        .x_bounds([0.0, model.groups.len() as f64 + 1.0])
        .y_bounds([0.0, model.y_max])
        .paint(|ctx| {
            for (i, group) in model.groups.iter().enumerate() {
                let x = (i + 1) as f64;
                ctx.print(x - 0.2, 0.0, group.label.clone());
                match &group.stats {
                    Some(stats) => draw_box(ctx, x, stats, group.color),
                    None => ctx.print(x - 0.2, model.y_max / 2.0, "no games"),
                }
            }
        });
    f.render_widget(canvas, area);
}
