mod keyboard;

pub use keyboard::keyboard_input_system;
