use anyhow::Result;
use glam::Vec3;
use winit::keyboard::KeyCode;

use morph_renderer::config::MorphConfig;
use morph_renderer::prelude::*;
use morph_renderer::scene::cpu::mesh::{
  Face,
  Mesh,
};

/// A two-face wedge used when no pose assets are configured.
fn wedge(offset: Vec3) -> Mesh {
  Mesh {
    positions: vec![
      Vec3::new(-1.0, 0.0, 0.0) + offset,
      Vec3::new(1.0, 0.0, 0.0) + offset,
      Vec3::new(0.0, 2.0, 0.0) + offset,
      Vec3::new(0.0, 2.0, -1.0) + offset,
    ],
    normals: vec![Vec3::Z; 4],
    faces: vec![
      Face { vertices: [0, 1, 2], normals: [0, 1, 2] },
      Face { vertices: [1, 3, 2], normals: [1, 3, 2] },
    ],
  }
}

fn print_frame(renderer: &MorphRenderer) {
  for line in renderer.overlay_text() {
    println!("  {line}");
  }
}

/// Drives one full left punch cycle and a few manual adjustments without a
/// window: the text overlay lines stand in for the frame output.
fn main() -> Result<()> {
  let config = MorphConfig::load("config.json").unwrap_or_default();

  let mut renderer = match MorphRenderer::new("punch_demo", &config) {
    Ok(renderer) => renderer,
    Err(err) => {
      println!("No pose assets ({err}); using the built-in wedge poses.");
      let scene = MorphScene::with_poses(
        wedge(Vec3::ZERO),
        wedge(Vec3::new(0.0, 0.0, 2.0)),
        wedge(Vec3::new(1.5, 0.5, 0.0)),
      );
      MorphRenderer::with_scene("punch_demo", &config, scene)?
    }
  };

  println!(
    "Packed {} morph records ({} delta texels).",
    renderer.morph_buffer().vertex_count(),
    renderer.morph_buffer().delta_texels().len(),
  );

  println!("Manual adjust, two steps up on pose one:");
  renderer.on_key(KeyCode::KeyW);
  renderer.on_key(KeyCode::KeyW);
  print_frame(&renderer);

  println!("Left punch:");
  renderer.on_key(KeyCode::KeyZ);
  while renderer.animator().is_punching(Side::Left) {
    renderer.on_punch_tick(Side::Left);
    renderer.update(config.tick_period().as_secs_f64());
    print_frame(&renderer);
  }

  println!("Cycle complete.");
  print_frame(&renderer);
  Ok(())
}
