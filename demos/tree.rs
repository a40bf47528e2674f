fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut scene = tether::Scene::new();
    let camera = scene.insert(
        None,
        tether::NodeSpec::image(
            "camera",
            tether::ImageHandle { key: 1, width: 640, height: 480 },
        )
        .at(glam::dvec2(300.0, 300.0)),
    );
    scene.insert(
        Some(camera),
        tether::NodeSpec::text("status", "recording").at(glam::dvec2(0.0, 300.0)),
    );
    scene.insert(
        Some(camera),
        tether::NodeSpec::text("timestamp", "12:41:05").at(glam::dvec2(300.0, 600.0)),
    );

    match scene.paint() {
        Ok((commands, damage)) => {
            for command in &commands {
                println!("{:?}", command);
            }
            if let Some(union) = damage.union_rect() {
                println!("repaint {}", union);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
