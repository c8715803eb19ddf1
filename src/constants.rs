use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_FILL: f32 = 0.9;              // Largest share of the window a slide may cover
pub const ARROW_SIZE: f32 = 48.0;             // Side of an arrow's square hit-box (pixels)
pub const ARROW_MARGIN: f32 = 16.0;           // Gap between an arrow and the window edge (pixels)

pub const ARROW_BACKGROUND: Color = Color::new(0, 0, 0, 120);
pub const ARROW_COLOR: Color = Color::new(255, 255, 255, 220);

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
