//! Rendering.
//!
//! Two screens: the picker draws a braille canvas world map with a crosshair
//! cursor and the rasterized car marker; the detail screen renders the shared
//! value as plain text. A tab row on top and a status/notice line at the
//! bottom frame both screens.

use parkspot_app::{App, Screen, Viewport};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Tabs,
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution, Points},
    },
};

use crate::icon::{self, CAR_ICON};

/// Pixel size of the rasterized marker.
const MARKER_RASTER: (usize, usize) = (24, 12);

/// Marker footprint as a fraction of the visible span.
const MARKER_FOOTPRINT_FRACTION: f64 = 0.10;

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let [tabs_area, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, app, tabs_area);
    match app.screen() {
        Screen::Picker => draw_picker(frame, app, body),
        Screen::Detail => draw_detail(frame, app, body),
    }
    draw_status(frame, app, status);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(vec!["Map", "Details"])
        .select(screen_index(app.screen()))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider(symbols::DOT);
    frame.render_widget(tabs, area);
}

fn draw_picker(frame: &mut Frame, app: &App, area: Rect) {
    let picker = app.picker();
    let viewport = picker.viewport;
    let (lon_footprint, lat_footprint) = marker_footprint(&viewport);

    let marker_points = picker.marker.map(|marker| {
        let bitmap = CAR_ICON.rasterize(MARKER_RASTER.0, MARKER_RASTER.1);
        icon::project(
            &bitmap,
            marker.position.lon,
            marker.position.lat,
            lon_footprint,
            lat_footprint,
        )
    });

    let canvas = Canvas::default()
        .block(Block::bordered().title(" Pick parking location "))
        .marker(symbols::Marker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(|ctx| {
            ctx.draw(&Map { resolution: MapResolution::High, color: Color::DarkGray });

            if let Some(points) = &marker_points {
                ctx.draw(&Points { coords: points, color: Color::Yellow });
            }

            // Crosshair around the cursor.
            let cursor = picker.cursor;
            let arm_x = viewport.lon_span() * 0.04;
            let arm_y = viewport.lat_span() * 0.04;
            ctx.draw(&CanvasLine {
                x1: cursor.lon - arm_x,
                y1: cursor.lat,
                x2: cursor.lon + arm_x,
                y2: cursor.lat,
                color: Color::Cyan,
            });
            ctx.draw(&CanvasLine {
                x1: cursor.lon,
                y1: cursor.lat - arm_y,
                x2: cursor.lon,
                y2: cursor.lat + arm_y,
                color: Color::Cyan,
            });

            if let Some(marker) = picker.marker {
                ctx.print(
                    marker.position.lon,
                    marker.position.lat + lat_footprint * 0.75,
                    Line::styled(marker.source.label(), Style::default().fg(Color::Yellow)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Last parked location ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the one line of text vertically.
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let styled = match app.detail_text() {
        Some(value) => Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        None => Line::styled(detail_body(app), Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(styled).centered(), middle);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(notice) = app.notice() {
        Line::styled(notice.to_string(), Style::default().fg(Color::Black).bg(Color::Yellow))
    } else {
        match app.screen() {
            Screen::Picker => {
                let picker = app.picker();
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", picker.cursor),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!("zoom {:.0}  ", picker.viewport.zoom)),
                    Span::styled(
                        "arrows move · enter park · p parked-here · +/- zoom · tab details · q quit",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            },
            Screen::Detail => Line::styled(
                " tab map · q quit",
                Style::default().fg(Color::DarkGray),
            ),
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Text shown by the detail screen when no location was ever saved.
pub(crate) fn detail_body(app: &App) -> String {
    app.detail_text()
        .unwrap_or_else(|| "No parking location saved yet".to_string())
}

fn screen_index(screen: Screen) -> usize {
    match screen {
        Screen::Picker => 0,
        Screen::Detail => 1,
    }
}

fn marker_footprint(viewport: &Viewport) -> (f64, f64) {
    (
        viewport.lon_span() * MARKER_FOOTPRINT_FRACTION,
        viewport.lat_span() * MARKER_FOOTPRINT_FRACTION,
    )
}

#[cfg(test)]
mod tests {
    use parkspot_app::AppConfig;
    use parkspot_core::{LocationStore, Position};

    use super::*;

    #[test]
    fn detail_body_placeholder_until_set() {
        let mut app = App::new(LocationStore::new(), AppConfig::default());
        app.show_detail();
        assert_eq!(detail_body(&app), "No parking location saved yet");
        app.store().set_location("37.422, -122.0841");
        assert_eq!(detail_body(&app), "37.422, -122.0841");
    }

    #[test]
    fn screen_indices_match_tab_order() {
        assert_eq!(screen_index(Screen::Picker), 0);
        assert_eq!(screen_index(Screen::Detail), 1);
    }

    #[test]
    fn marker_footprint_scales_with_zoom() {
        let wide = Viewport { center: Position::new(0.0, 0.0), zoom: 2.0 };
        let tight = Viewport { center: Position::new(0.0, 0.0), zoom: 15.0 };
        let (wide_lon, wide_lat) = marker_footprint(&wide);
        let (tight_lon, tight_lat) = marker_footprint(&tight);
        assert!(wide_lon > tight_lon && wide_lat > tight_lat);
        assert!(tight_lon > 0.0 && tight_lat > 0.0);
    }
}
