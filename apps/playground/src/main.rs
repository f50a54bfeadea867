use std::collections::HashMap;
use std::time::Duration;

use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude as mq;
use macroquad::window::Conf;
use tracing_subscriber::EnvFilter;
use transform_canvas::math::quad_corners;
use transform_canvas::render::DrawCommand;
use transform_canvas::sprite::ImageId;
use transform_canvas::{AnimationConfig, Stage, SurfaceSize};

const ASSET_DIR: &str = "assets";
const PLACEHOLDER_SIZE: u16 = 20;

fn window_conf() -> Conf {
    Conf {
        window_title: "Transform Animation".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        // Antialias the rotated and stretched quads.
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Initialize Stage
    let mut stage = match Stage::new(AnimationConfig::default()) {
        Ok(stage) => stage,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create stage");
            return;
        }
    };

    // 2. Load the three bitmaps
    let mut textures = HashMap::new();
    for id in ImageId::ALL {
        textures.insert(id, load_image(id).await);
    }
    tracing::info!(count = textures.len(), "Textures ready");

    loop {
        let surface = match SurfaceSize::try_new(
            mq::screen_width() as u32,
            mq::screen_height() as u32,
        ) {
            Ok(surface) => surface,
            Err(_) => {
                // Minimized; nothing to map onto.
                mq::next_frame().await;
                continue;
            }
        };

        // 3. Update Logic
        let dt = Duration::from_secs_f32(mq::get_frame_time());
        let (frame, events) = stage.update(dt, surface);
        for event in events {
            tracing::debug!(?event, pixel_size = frame.mapping.pixel_size, "Stage event");
        }

        // 4. Render
        for cmd in frame.commands {
            match cmd {
                DrawCommand::Clear { color } => {
                    mq::clear_background(mq::Color::new(color.x, color.y, color.z, color.w));
                }
                DrawCommand::Image { image, transform } => {
                    if let Some(texture) = textures.get(&image) {
                        draw_transformed(texture, transform);
                    }
                }
            }
        }

        mq::next_frame().await
    }
}

/// Loads `assets/<name>`, falling back to a flat colored square so the
/// animation still runs without the files.
async fn load_image(id: ImageId) -> mq::Texture2D {
    let path = format!("{ASSET_DIR}/{}", id.file_name());
    match mq::load_texture(&path).await {
        Ok(texture) => {
            texture.set_filter(mq::FilterMode::Linear);
            tracing::info!(%path, "Loaded texture");
            texture
        }
        Err(e) => {
            tracing::warn!(%path, error = ?e, "Using placeholder texture");
            let color = match id {
                ImageId::Beaker => mq::SKYBLUE,
                ImageId::Cross => mq::RED,
                ImageId::WelderMask => mq::DARKGRAY,
            };
            let image = mq::Image::gen_image_color(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, color);
            mq::Texture2D::from_image(&image)
        }
    }
}

/// Draws `texture` as a quad whose corners go through `transform`.
///
/// An arbitrary affine can shear the image, which `draw_texture_ex` cannot express.
fn draw_transformed(texture: &mq::Texture2D, transform: glam::DAffine2) {
    let size = glam::DVec2::new(f64::from(texture.width()), f64::from(texture.height()));
    let uvs = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    let vertices = quad_corners(size)
        .into_iter()
        .zip(uvs)
        .map(|(corner, (u, v))| {
            let p = transform.transform_point2(corner);
            Vertex::new(p.x as f32, p.y as f32, 0.0, u, v, mq::WHITE)
        })
        .collect();

    draw_mesh(&Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
        texture: Some(texture.clone()),
    });
}
