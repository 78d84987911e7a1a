use bevy::prelude::*;
use pretty_assertions::assert_eq;
use skyrunner::components::{CraftVisual, ModelCandidates};
use std::{thread, time::Duration};

use crate::common::{TestApp, TestAppBuilder};

/// Step until the craft visual leaves `Pending`, giving the asset IO tasks time to run
fn wait_for_visual(app: &mut TestApp, max_steps: usize) -> CraftVisual {
    for _ in 0..max_steps {
        let visual = *app.query_single::<CraftVisual>().unwrap();
        if visual.is_resolved() {
            return visual;
        }
        thread::sleep(Duration::from_millis(5));
        app.run_frame();
    }
    *app.query_single::<CraftVisual>().unwrap()
}

#[test]
fn test_missing_models_fall_back_to_primitive_craft() {
    let mut app = TestAppBuilder::new()
        .with_model_candidates(&["missing/craft.gltf", "missing/craft.glb"])
        .build();

    assert_eq!(app.query_single::<CraftVisual>(), Some(&CraftVisual::Pending));

    // Physics holds the craft on its spawn point while the model loads
    app.run_frame();
    assert_eq!(app.craft().position.y, 2.0);

    let visual = wait_for_visual(&mut app, 1000);
    assert_eq!(visual, CraftVisual::Fallback);
    assert!(app.query_single::<ModelCandidates>().unwrap().is_exhausted());

    // Physics runs from the frame the visual resolves, lifting the craft to
    // the altitude floor
    assert_eq!(app.craft().position.y, 10.0);

    // Fuselage, wing and tail hang off the craft
    let world = app.app.world_mut();
    let mut craft = world.query_filtered::<&Children, With<CraftVisual>>();
    let children: Vec<Entity> = craft.single(world).iter().copied().collect();
    let mut meshes = world.query::<&Mesh3d>();
    let geometry = children
        .iter()
        .filter(|child| meshes.get(world, **child).is_ok())
        .count();
    assert_eq!(geometry, 3);
}
