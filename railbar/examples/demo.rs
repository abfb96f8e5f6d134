use std::cell::Cell;
use std::fs::File;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    MouseButton, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};

use railbar::{
    Key, PointerEvent, PointerId, Rect, ScrollBar, ScrollTarget, ScrollView, TrackMode,
};

/// Content pane driven by the scrollbar through the target binder.
struct ContentView {
    top: Rc<Cell<f32>>,
}

impl ScrollView for ContentView {
    fn set_scroll(&mut self, position: f32) {
        self.top.set(position);
    }
}

fn bar_bounds(cols: u16, rows: u16) -> Rect {
    Rect::new(f32::from(cols.saturating_sub(1)), 0.0, 1.0, f32::from(rows))
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let lines: Vec<String> = (1..=200)
        .map(|i| format!("{:>4}  the quick brown fox jumps over the lazy dog", i))
        .collect();
    let top = Rc::new(Cell::new(0.0f32));

    let (cols, rows) = terminal::size()?;
    let viewport = f32::from(rows);

    let mut bar = ScrollBar::with_name("demo");
    bar.set_scroll_properties(viewport, 0.0, (lines.len() as f32 - viewport).max(0.0));
    bar.set_page_scroll_size(1.0);
    bar.set_scroll_target(ScrollTarget::Generic(Box::new(ContentView {
        top: Rc::clone(&top),
    })));
    bar.init(bar_bounds(cols, rows))
        .expect("scrollbar init failed");
    log::info!("demo: {} up, {} lines", bar.name(), lines.len());

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run(&mut bar, &lines, &top);

    execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(bar: &mut ScrollBar, lines: &[String], top: &Rc<Cell<f32>>) -> std::io::Result<()> {
    loop {
        draw(bar, lines, top.get())?;

        if !event::poll(Duration::from_millis(60))? {
            // Auto-repeat beat for held arrows and the track.
            bar.tick();
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('m') => {
                    // Toggle the track behavior.
                    let mode = match bar.track_mode() {
                        TrackMode::ScrollPage => TrackMode::ScrollToCursor,
                        TrackMode::ScrollToCursor => TrackMode::ScrollPage,
                    };
                    bar.set_track_mode(mode);
                }
                code => {
                    if let Some(key) = Key::from_code(code) {
                        bar.handle_key(key);
                    }
                }
            },
            CrosstermEvent::Mouse(mouse) => {
                let x = f32::from(mouse.column);
                let y = f32::from(mouse.row);
                let pointer = PointerId(0);
                let event = match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press {
                        pointer,
                        x,
                        y,
                        modifiers: mouse.modifiers.into(),
                    }),
                    MouseEventKind::Drag(MouseButton::Left) => {
                        Some(PointerEvent::Move { pointer, x, y })
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        Some(PointerEvent::Release { pointer, x, y })
                    }
                    MouseEventKind::ScrollUp => Some(PointerEvent::Wheel { delta: 1.0 }),
                    MouseEventKind::ScrollDown => Some(PointerEvent::Wheel { delta: -1.0 }),
                    _ => None,
                };
                if let Some(event) = event {
                    bar.handle_pointer(event);
                }
            }
            CrosstermEvent::Resize(cols, rows) => {
                let viewport = f32::from(rows);
                bar.set_scroll_properties(
                    viewport,
                    0.0,
                    (lines.len() as f32 - viewport).max(0.0),
                );
                bar.layout(bar_bounds(cols, rows));
            }
            _ => {}
        }

        for note in bar.take_notifications() {
            log::debug!("demo: notification {:?}", note);
        }
    }
}

fn draw(bar: &ScrollBar, lines: &[String], top: f32) -> std::io::Result<()> {
    let mut out = stdout();
    let (cols, rows) = terminal::size()?;
    queue!(out, Clear(ClearType::All))?;

    let first = top.max(0.0) as usize;
    let width = usize::from(cols.saturating_sub(2));
    for row in 0..rows {
        let Some(line) = lines.get(first + usize::from(row)) else {
            break;
        };
        let clipped = &line[..line.len().min(width)];
        queue!(out, MoveTo(0, row), Print(clipped))?;
    }

    let x = cols.saturating_sub(1);
    let span = |rect: Rect| (rect.y.max(0.0) as u16, rect.bottom().max(0.0) as u16);

    let (track_top, track_bottom) = span(bar.track().rect);
    for row in track_top..track_bottom.min(rows) {
        queue!(out, MoveTo(x, row), Print("│"))?;
    }
    if bar.geometry().visible {
        let (thumb_top, thumb_bottom) = span(bar.thumb().rect);
        for row in thumb_top..thumb_bottom.min(rows) {
            queue!(out, MoveTo(x, row), Print("█"))?;
        }
    }
    if let Some(up) = bar.up_arrow() {
        queue!(out, MoveTo(x, up.rect.y.max(0.0) as u16), Print("▲"))?;
    }
    if let Some(down) = bar.down_arrow() {
        queue!(out, MoveTo(x, down.rect.y.max(0.0) as u16), Print("▼"))?;
    }

    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        Print(format!(
            " q quit · m mode ({:?}) · wheel/drag/track/arrows scroll ",
            bar.track_mode()
        ))
    )?;
    out.flush()
}
