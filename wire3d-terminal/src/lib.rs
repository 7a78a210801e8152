/// Terminal frame driver for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Camera, Color as DeviceColor, Device, Mesh};

pub mod present;

pub use present::TerminalSurface;

/// Owns the frame loop: clears the device, advances mesh rotation,
/// renders, and presents the back buffer to the terminal. The render
/// core takes no input and keeps no clock; all of that lives here.
pub struct TerminalApp {
    device: Device,
    surface: TerminalSurface,
    mesh: Mesh,
    camera: Camera,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let surface = TerminalSurface::new(columns, rows);
        let (width, height) = surface.device_size();

        Ok(Self {
            device: Device::new(width, height),
            surface,
            mesh,
            camera: Camera::default(),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        log::info!(
            "starting frame loop: {}x{} pixels, mesh '{}'",
            self.device.width(),
            self.device.height(),
            self.mesh.name
        );

        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        log::info!("frame loop stopped");
        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                self.running = false;
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.mesh.rotate(0.01, 0.015, 0.0);
    }

    fn render(&mut self) -> io::Result<()> {
        self.device.clear(DeviceColor::black());
        self.device
            .render(&self.camera, std::slice::from_ref(&self.mesh));

        let mut stdout = stdout();
        self.surface.present(&self.device, &mut stdout)?;

        // Status overlay on top of the frame
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wire3D Terminal | FPS: {:.1} | Q/ESC = Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
