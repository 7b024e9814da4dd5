// Shared tuning constants used by the core and both frontends.

// Motion
pub const ROTATION_STEP: f32 = 0.01; // rotation phase added per frame
pub const FRICTION: f32 = 0.98; // per-frame velocity decay
pub const DRAG_SCALE: f32 = 0.01; // host pixels -> world units while dragging

// Visual rotation: phase * angular_speed * factor
pub const YAW_FACTOR: f32 = 100.0;
pub const PITCH_FACTOR: f32 = 50.0;

// Scene population
pub const RANDOM_SPHERE_COUNT: usize = 20;
pub const RANDOM_BOUNDS_CUBE: f32 = 20.0; // edge length of the spawn cube
pub const ANGULAR_SPEED_MIN: f32 = 0.01;
pub const ANGULAR_SPEED_MAX: f32 = 0.04;

// Fixed seed spheres: [x, y, z, angular_speed]
pub const SEED_SPHERES: [[f32; 4]; 10] = [
    [-4.0, 0.0, -10.0, 0.01],
    [2.0, 0.0, -5.0, 0.015],
    [0.0, 2.0, -6.0, 0.02],
    [1.0, 0.0, 5.0, 0.02],
    [2.0, 5.0, 10.0, 0.02],
    [-3.0, -2.0, -8.0, 0.018],
    [4.0, 3.0, -12.0, 0.022],
    [-2.0, 1.0, 7.0, 0.017],
    [3.0, -1.0, -3.0, 0.019],
    [-5.0, 4.0, 9.0, 0.025],
];

// Camera
pub const FOVY_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Mesh tessellation
pub const SPHERE_LATITUDE_BANDS: u16 = 30;
pub const SPHERE_LONGITUDE_BANDS: u16 = 30;

// Presentation
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.2];
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_FLOOR: f32 = 0.2; // minimum diffuse intensity
