mod flight;

pub use flight::{
    flight_physics_system, integrate_flight, resolve, Effect, ROTATION_PRECEDENCE,
    THRUST_PRECEDENCE,
};
