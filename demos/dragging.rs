fn main() {
    // Drag a label away from its hub and watch how little needs
    // repainting once the first full paint is done.
    let mut scene = tether::Scene::new();
    let hub = scene.insert(
        None,
        tether::NodeSpec::text("hub", "hub").at(glam::dvec2(300.0, 0.0)),
    );
    let label = scene.insert(Some(hub), tether::NodeSpec::text("label", "drag me"));
    scene.paint().expect("first paint");

    scene.pointer_press(glam::dvec2(50.0, 50.0), tether::PointerButton::Primary);
    for step in 1..=4 {
        let cursor = glam::dvec2(50.0 - 25.0 * step as f64, 50.0);
        scene.pointer_move(cursor);
        match scene.paint() {
            Ok((_, damage)) => match damage.union_rect() {
                Some(union) => println!("frame {}: repaint {}", step, union),
                None => println!("frame {}: clean", step),
            },
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    scene.pointer_release(tether::PointerButton::Primary);

    let node = scene.get(label).expect("label still present");
    println!("label ended at {}", node.content_pos());
}
