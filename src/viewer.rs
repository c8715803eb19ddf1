use raylib::prelude::*;
use slidenav::{Navigation, Stage, StageElement};
use crate::constants::*;

/// Screen-space hit-boxes of the previous and next arrows.
pub struct ArrowLayout {
    pub prev: Rectangle,
    pub next: Rectangle,
}

impl ArrowLayout {
    pub fn for_screen(screen_width: f32, screen_height: f32) -> Self {
        let y = (screen_height - ARROW_SIZE) * 0.5;
        Self {
            prev: Rectangle::new(ARROW_MARGIN, y, ARROW_SIZE, ARROW_SIZE),
            next: Rectangle::new(screen_width - ARROW_MARGIN - ARROW_SIZE, y, ARROW_SIZE, ARROW_SIZE),
        }
    }

    /// Which visible arrow, if any, sits under `point`.
    pub fn hit(&self, point: Vector2, stage: &Stage<Texture2D>) -> Option<Navigation> {
        if stage.is_shown(StageElement::Previous) && self.prev.check_collision_point_rec(point) {
            Some(Navigation::Previous)
        } else if stage.is_shown(StageElement::Next) && self.next.check_collision_point_rec(point) {
            Some(Navigation::Next)
        } else {
            None
        }
    }
}

/// Translates this frame's keyboard and mouse input into a navigation intent.
pub fn poll_navigation(rl: &RaylibHandle, stage: &Stage<Texture2D>) -> Option<Navigation> {
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) || rl.is_key_pressed(KeyboardKey::KEY_A) {
        return Some(Navigation::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_D) {
        return Some(Navigation::Next);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let layout = ArrowLayout::for_screen(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        return layout.hit(rl.get_mouse_position(), stage);
    }
    None
}

/// Scale that makes a `width` x `height` texture fit inside the screen,
/// never enlarging it.
pub fn fit_scale(width: f32, height: f32, screen_width: f32, screen_height: f32) -> f32 {
    let max_width = screen_width * SLIDE_FILL;
    let max_height = screen_height * SLIDE_FILL;
    (max_width / width).min(max_height / height).min(1.0)
}

fn draw_slide(d: &mut RaylibDrawHandle, texture: &Texture2D) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;

    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);

    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            (screen_width - scaled_width) * 0.5,
            (screen_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_arrow(d: &mut RaylibDrawHandle, hit_box: Rectangle, navigation: Navigation) {
    d.draw_rectangle_rec(hit_box, ARROW_BACKGROUND);

    let inset = hit_box.width * 0.3;
    let left = hit_box.x + inset;
    let right = hit_box.x + hit_box.width - inset;
    let top = hit_box.y + inset;
    let bottom = hit_box.y + hit_box.height - inset;
    let middle = hit_box.y + hit_box.height * 0.5;

    // Vertices in counter-clockwise order
    match navigation {
        Navigation::Previous => d.draw_triangle(
            Vector2::new(left, middle),
            Vector2::new(right, bottom),
            Vector2::new(right, top),
            ARROW_COLOR,
        ),
        Navigation::Next => d.draw_triangle(
            Vector2::new(right, middle),
            Vector2::new(left, top),
            Vector2::new(left, bottom),
            ARROW_COLOR,
        ),
    }
}

pub fn draw_stage(d: &mut RaylibDrawHandle, stage: &Stage<Texture2D>) {
    d.clear_background(Color::BLACK);

    if stage.is_empty() {
        d.draw_text("No slides loaded.", 20, 20, 20, Color::RED);
        return;
    }

    for texture in stage.visible_slides() {
        draw_slide(d, texture);
    }

    let layout = ArrowLayout::for_screen(d.get_screen_width() as f32, d.get_screen_height() as f32);
    if stage.is_shown(StageElement::Previous) {
        draw_arrow(d, layout.prev, Navigation::Previous);
    }
    if stage.is_shown(StageElement::Next) {
        draw_arrow(d, layout.next, Navigation::Next);
    }
}
