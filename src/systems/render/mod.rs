mod craft;
mod scenery;
mod sync;

pub use craft::{attach_fallback_geometry, craft_model_system};
pub use scenery::{
    attach_segment_meshes, decorate_chase_camera, ocean_surface_system, setup_environment,
    setup_runway_assets, OceanSurface, RunwayAssets,
};
pub use sync::{camera_transform_system, craft_transform_system};
