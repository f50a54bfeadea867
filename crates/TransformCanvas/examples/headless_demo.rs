use std::time::Duration;

use glam::DVec2;
use transform_canvas::render::DrawCommand;
use transform_canvas::{AnimationConfig, Stage, SurfaceSize};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== TransformCanvas Headless Demo ===");

    // 1. Initialize Stage
    let config = AnimationConfig::default();
    let mut stage = match Stage::new(config) {
        Ok(stage) => stage,
        Err(e) => {
            eprintln!("Failed to create stage: {e}");
            return;
        }
    };

    // Simulate an 800x600 window at roughly 4 frames per second.
    let surface = SurfaceSize::new(800, 600);
    let dt = Duration::from_millis(250);

    for step in 0..24 {
        let (frame, events) = stage.update(dt, surface);
        if events.is_empty() && step != 0 {
            continue;
        }

        println!(
            "\n--- t={:.2}s frame {} ---",
            stage.clock().elapsed().as_secs_f64(),
            frame.index
        );
        println!(
            "  Window: left={:.1} right={:.1} bottom={:.1} top={:.1} (pixel size {:.3})",
            frame.mapping.window.left,
            frame.mapping.window.right,
            frame.mapping.window.bottom,
            frame.mapping.window.top,
            frame.mapping.pixel_size
        );
        println!(
            "  Pose: translate={} rotate={:.3}rad scale={}",
            frame.pose.translation, frame.pose.rotation, frame.pose.scale
        );

        for cmd in &frame.commands {
            if let DrawCommand::Image { image, transform } = cmd {
                let origin = transform.transform_point2(DVec2::ZERO);
                println!("  {:?} origin at ({:.1}, {:.1})", image, origin.x, origin.y);
            }
        }
    }

    println!("\nDemo Complete.");
}
