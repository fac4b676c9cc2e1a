//! All drawing: the menu screens, the playfield, and the lighting pass.
//!
//! Text uses the fixed 8x8 glyph set from SDL2_gfx, scaled up through the
//! canvas scale factor. The light cone is composed on an offscreen texture
//! with multiplicative blending, so darkness dims the scene instead of
//! painting over it.

use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::constants::{
    BLACK, BLUE, COIN_RADIUS, COIN_RIM, CYAN, DARKNESS, ENEMY_RADIUS, GREEN, LIGHT_FALLOFF, LIGHT_RADIUS,
    LIGHT_RING_STEP, PLAYER_SIZE, RED, WHITE, YELLOW,
};
use crate::entity::{Collectible, Player};
use crate::error::{GameError, GameResult};
use crate::level::LevelConfig;
use crate::session::GameSession;
use crate::video::VideoSettings;

/// Height and width of one glyph in the gfx built-in font.
const GLYPH_SIZE: f32 = 8.0;
/// Scale for headlines and the countdown digit.
const TITLE_SCALE: f32 = 8.0;
/// Scale for list items, status lines, and the HUD.
const ITEM_SCALE: f32 = 4.0;

const PLAYER_CORNER_RADIUS: i16 = 6;

const TITLE_Y: i32 = 120;
const LIST_START_Y: i32 = 300;
const LIST_SPACING: i32 = 60;
const END_LIST_SPACING: i32 = 80;
const HUD_POS: (i32, i32) = (20, 20);

const MENU_ITEMS: [&str; 3] = ["START GAME", "SETTINGS", "QUIT"];
const SETTINGS_ITEMS: [&str; 3] = ["VIDEO", "AUDIO", "BACK"];
const END_ITEMS: [&str; 2] = ["TRY AGAIN", "BACK TO MENU"];

/// Owns the offscreen textures: the player sprite and the light map.
pub struct Renderer {
    player_texture: Texture,
    light_texture: Texture,
}

impl Renderer {
    pub fn new(
        canvas: &mut Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        bounds: Vec2,
    ) -> GameResult<Self> {
        let mut player_texture = texture_creator
            .create_texture_target(PixelFormatEnum::RGBA8888, PLAYER_SIZE, PLAYER_SIZE)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        player_texture.set_blend_mode(BlendMode::Blend);

        // The sprite is drawn once; rotation happens at copy time
        canvas
            .with_texture_canvas(&mut player_texture, |sprite| {
                sprite.set_draw_color(Color::RGBA(0, 0, 0, 0));
                sprite.clear();
                let edge = PLAYER_SIZE as i16 - 1;
                let _ = sprite.rounded_box(0, 0, edge, edge, PLAYER_CORNER_RADIUS, BLUE);
            })
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        Ok(Self {
            player_texture,
            light_texture: Self::create_light_texture(texture_creator, bounds)?,
        })
    }

    /// Replaces the light map after the drawable size changed.
    pub fn rebuild_light_texture(
        &mut self,
        texture_creator: &TextureCreator<WindowContext>,
        bounds: Vec2,
    ) -> GameResult<()> {
        let replaced = std::mem::replace(
            &mut self.light_texture,
            Self::create_light_texture(texture_creator, bounds)?,
        );
        // With `unsafe_textures` the old texture is not freed on drop
        unsafe { replaced.destroy() };
        Ok(())
    }

    fn create_light_texture(texture_creator: &TextureCreator<WindowContext>, bounds: Vec2) -> GameResult<Texture> {
        let mut texture = texture_creator
            .create_texture_target(None, bounds.x as u32, bounds.y as u32)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        texture.set_blend_mode(BlendMode::Mod);
        Ok(texture)
    }

    pub fn draw_menu(&self, canvas: &mut Canvas<Window>, bounds: Vec2, selected: usize) -> GameResult<()> {
        clear(canvas, BLACK);
        draw_center(canvas, bounds, "NEON COIN", TITLE_Y, TITLE_SCALE, CYAN)?;
        draw_list(canvas, bounds, &MENU_ITEMS, selected)
    }

    pub fn draw_settings_menu(&self, canvas: &mut Canvas<Window>, bounds: Vec2, selected: usize) -> GameResult<()> {
        clear(canvas, BLACK);
        draw_center(canvas, bounds, "SETTINGS", TITLE_Y, TITLE_SCALE, YELLOW)?;
        draw_list(canvas, bounds, &SETTINGS_ITEMS, selected)
    }

    pub fn draw_video_menu(
        &self,
        canvas: &mut Canvas<Window>,
        bounds: Vec2,
        selected: usize,
        video: &VideoSettings,
    ) -> GameResult<()> {
        let (width, height) = video.resolution();

        clear(canvas, BLACK);
        draw_center(canvas, bounds, "VIDEO", TITLE_Y, TITLE_SCALE, YELLOW)?;

        let resolution = format!("Res: {width}x{height}");
        let fullscreen = format!("Fullscreen: {}", on_off(video.fullscreen));
        draw_list(canvas, bounds, &[resolution.as_str(), fullscreen.as_str(), "BACK"], selected)
    }

    pub fn draw_audio_menu(
        &self,
        canvas: &mut Canvas<Window>,
        bounds: Vec2,
        selected: usize,
        menu_music_on: bool,
        game_music_on: bool,
    ) -> GameResult<()> {
        clear(canvas, BLACK);
        draw_center(canvas, bounds, "AUDIO", TITLE_Y, TITLE_SCALE, YELLOW)?;

        let menu_music = format!("Menu Music: {}", on_off(menu_music_on));
        let game_music = format!("Game Music: {}", on_off(game_music_on));
        draw_list(canvas, bounds, &[menu_music.as_str(), game_music.as_str(), "BACK"], selected)
    }

    pub fn draw_countdown(&self, canvas: &mut Canvas<Window>, bounds: Vec2, digit: u64) -> GameResult<()> {
        clear(canvas, BLACK);
        draw_center(
            canvas,
            bounds,
            &digit.to_string(),
            bounds.y as i32 / 2 - 50,
            TITLE_SCALE,
            YELLOW,
        )
    }

    pub fn draw_game_over(
        &self,
        canvas: &mut Canvas<Window>,
        bounds: Vec2,
        selected: usize,
        session: &GameSession,
    ) -> GameResult<()> {
        clear(canvas, BLACK);

        let center_y = bounds.y as i32 / 2;
        draw_center(canvas, bounds, "GAME OVER", center_y - 150, TITLE_SCALE, RED)?;

        let score = format!("Score: {}/{}", session.score, session.target_score);
        draw_center(canvas, bounds, &score, center_y - 50, TITLE_SCALE, YELLOW)?;

        draw_end_list(canvas, bounds, center_y + 50, selected)
    }

    pub fn draw_win(&self, canvas: &mut Canvas<Window>, bounds: Vec2, selected: usize) -> GameResult<()> {
        clear(canvas, BLACK);

        let center_y = bounds.y as i32 / 2;
        draw_center(canvas, bounds, "YOU WIN!", center_y - 150, TITLE_SCALE, GREEN)?;
        draw_center(canvas, bounds, "ALL LEVELS CLEAR!", center_y - 70, ITEM_SCALE, CYAN)?;

        draw_end_list(canvas, bounds, center_y + 60, selected)
    }

    /// Draws one frame of play: backdrop, walls, coin, player, pursuers,
    /// then the light map over the scene. The HUD comes last so the text is
    /// never dimmed.
    pub fn draw_playing(&mut self, canvas: &mut Canvas<Window>, session: &GameSession) -> GameResult<()> {
        clear(canvas, LevelConfig::get(session.level).background);

        canvas.set_draw_color(GREEN);
        for wall in &session.walls {
            canvas
                .fill_rect(Rect::new(wall.x as i32, wall.y as i32, wall.w as u32, wall.h as u32))
                .map_err(GameError::Sdl)?;
        }

        draw_collectible(canvas, &session.collectible)?;
        self.draw_player(canvas, &session.player)?;

        for enemy in &session.enemies {
            canvas
                .filled_circle(enemy.pos.x as i16, enemy.pos.y as i16, ENEMY_RADIUS as i16, RED)
                .map_err(GameError::Sdl)?;
        }

        self.draw_lighting(canvas, session.player.pos)?;

        let hud = format!(
            "Level {} - Coins: {}/{}",
            session.level, session.score, session.target_score
        );
        draw_text(canvas, HUD_POS.0, HUD_POS.1, ITEM_SCALE, &hud, WHITE)
    }

    fn draw_player(&self, canvas: &mut Canvas<Window>, player: &Player) -> GameResult<()> {
        let half = PLAYER_SIZE as f32 / 2.0;
        let dest = Rect::new(
            (player.pos.x - half) as i32,
            (player.pos.y - half) as i32,
            PLAYER_SIZE,
            PLAYER_SIZE,
        );

        // SDL rotates clockwise for positive angles; facing is counter-clockwise
        canvas
            .copy_ex(&self.player_texture, None, dest, -f64::from(player.angle), None, false, false)
            .map_err(GameError::Sdl)
    }

    fn draw_lighting(&mut self, canvas: &mut Canvas<Window>, player_pos: Vec2) -> GameResult<()> {
        canvas
            .with_texture_canvas(&mut self.light_texture, |light| {
                light.set_draw_color(DARKNESS);
                light.clear();

                let x = player_pos.x as i16;
                let y = player_pos.y as i16;
                let mut radius = LIGHT_RADIUS;
                while radius > 0 {
                    let brightness = (255.0 - f32::from(radius) * LIGHT_FALLOFF).max(0.0) as u8;
                    let _ = light.filled_circle(x, y, radius, Color::RGB(brightness, brightness, brightness));
                    radius -= LIGHT_RING_STEP;
                }
            })
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        canvas.copy(&self.light_texture, None, None).map_err(GameError::Sdl)
    }
}

fn draw_collectible(canvas: &mut Canvas<Window>, collectible: &Collectible) -> GameResult<()> {
    let x = collectible.pos.x as i16;
    let y = collectible.pos.y as i16;
    let radius = COIN_RADIUS as i16;

    canvas.filled_circle(x, y, radius, YELLOW).map_err(GameError::Sdl)?;

    // A 3px rim plus a thin inner ring; the gfx circle is one pixel wide
    for inset in 0..3 {
        canvas.circle(x, y, radius - inset, COIN_RIM).map_err(GameError::Sdl)?;
    }
    canvas.circle(x, y, radius / 2, COIN_RIM).map_err(GameError::Sdl)
}

fn clear(canvas: &mut Canvas<Window>, color: Color) {
    canvas.set_draw_color(color);
    canvas.clear();
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

/// Draws `text` with its top-left corner at `(x, y)` in screen pixels.
fn draw_text(canvas: &mut Canvas<Window>, x: i32, y: i32, scale: f32, text: &str, color: Color) -> GameResult<()> {
    canvas.set_scale(scale, scale).map_err(GameError::Sdl)?;
    canvas
        .string((x as f32 / scale) as i16, (y as f32 / scale) as i16, text, color)
        .map_err(GameError::Sdl)?;
    canvas.set_scale(1.0, 1.0).map_err(GameError::Sdl)
}

/// Draws `text` horizontally centered with its vertical center on `y`.
fn draw_center(canvas: &mut Canvas<Window>, bounds: Vec2, text: &str, y: i32, scale: f32, color: Color) -> GameResult<()> {
    let width = text.len() as f32 * GLYPH_SIZE * scale;
    let x = (bounds.x - width) / 2.0;
    let top = y as f32 - GLYPH_SIZE * scale / 2.0;
    draw_text(canvas, x as i32, top as i32, scale, text, color)
}

fn draw_list(canvas: &mut Canvas<Window>, bounds: Vec2, items: &[&str], selected: usize) -> GameResult<()> {
    for (index, item) in items.iter().enumerate() {
        let color = if index == selected { YELLOW } else { WHITE };
        let y = LIST_START_Y + index as i32 * LIST_SPACING;
        draw_center(canvas, bounds, item, y, ITEM_SCALE, color)?;
    }
    Ok(())
}

fn draw_end_list(canvas: &mut Canvas<Window>, bounds: Vec2, start_y: i32, selected: usize) -> GameResult<()> {
    for (index, item) in END_ITEMS.iter().enumerate() {
        let color = if index == selected { YELLOW } else { WHITE };
        let y = start_y + index as i32 * END_LIST_SPACING;
        draw_center(canvas, bounds, item, y, ITEM_SCALE, color)?;
    }
    Ok(())
}
