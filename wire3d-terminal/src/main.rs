/// Wire3D Terminal Demo - Rotating Wireframe Cube
///
/// Drives the software wireframe pipeline at 30 FPS and presents the
/// back buffer as colored half-block cells. Press Q or ESC to quit.

use anyhow::Result;
use wire3d_core::Mesh;
use wire3d_terminal::TerminalApp;

fn main() -> Result<()> {
    env_logger::init();

    let cube = Mesh::cube();

    let mut app = TerminalApp::new(cube)?;
    app.run()?;

    Ok(())
}
