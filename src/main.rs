//! Vigil - headless host for the follow camera
//!
//! Drives the camera rig from a scripted player, cursor and inventory,
//! the way the game's render loop does each frame.

mod settings;
mod sim;

use anyhow::Result;
use glam::Vec2;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event::MouseScrollDelta;

use vigil_core::FrameClock;
use vigil_game::{CameraRig, FrameOutput, HintIcon, ItemId, ScrollAccumulator};

use settings::GameSettings;
use sim::{Interactable, SimWorld};

/// Application state
struct VigilApp {
    settings: GameSettings,
    clock: FrameClock,
    rig: CameraRig,
    world: SimWorld,
    scroll: ScrollAccumulator,
    interactables: Vec<Interactable>,
    hints_shown: u32,
}

impl VigilApp {
    fn new(settings: GameSettings) -> Self {
        let world = SimWorld::new(vec![
            Some(ItemId::new("revolver")),
            Some(ItemId::new("crowbar")),
            None,
        ]);
        world.set_player(Some(sim::player_at(0.0)));

        let mut rig = CameraRig::new(
            settings.camera.clone(),
            Box::new(world.clone()),
            Box::new(world.clone()),
            Box::new(world.clone()),
        )
        .with_occluder(Box::new(world.clone()))
        .with_weapon_rack(Box::new(world.clone()));
        rig.snap_to(Vec2::new(0.0, 100.0 - settings.camera.vertical_offset()));

        let interactables = vec![
            Interactable::new("Door", HintIcon::Hand, Vec2::new(60.0, 100.0)),
            Interactable::new("Terminal", HintIcon::Gear, Vec2::new(150.0, 100.0)),
            Interactable::new("Poster", HintIcon::Eye, Vec2::new(100.0, 100.0)),
        ];

        Self {
            clock: FrameClock::new(settings.time.clone()),
            settings,
            rig,
            world,
            scroll: ScrollAccumulator::new(),
            interactables,
            hints_shown: 0,
        }
    }

    fn update(&mut self, frame: u32, raw_delta: f32) -> FrameOutput {
        let delta = self.clock.advance(raw_delta);
        let time = self.clock.total_time as f32;

        let player = sim::player_at(time);
        self.world.set_player(Some(player));
        self.world.set_cursor(sim::cursor_at(time, player.position));
        self.world
            .set_inventory_open(self.settings.session.inventory_open(frame));

        if self.settings.session.scrolls_on(frame) {
            let wheel = MouseScrollDelta::LineDelta(0.0, -1.0);
            for command in self.scroll.push(wheel) {
                if self.rig.handle_scroll(command) {
                    info!("Weapon slot {} selected", self.rig.selected_slot());
                } else {
                    debug!(?command, "Scroll ignored");
                }
            }
        }

        if let Some(target) = sim::nearest_in_range(&self.interactables, player.position) {
            if self.rig.show_hint(target.label.clone(), target.icon, target.position) {
                debug!(icon = target.icon.animation_name(), "Restarting hint icon animation");
            }
            self.hints_shown += 1;
        }

        self.rig.tick(delta)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Vigil camera host...");

    let first_run = GameSettings::settings_path().is_some_and(|p| !p.exists());
    let mut settings = GameSettings::load();
    if let Err(e) = settings.validate() {
        warn!("Invalid settings ({}), using defaults", e);
        settings = GameSettings::default();
    }
    if first_run {
        if let Err(e) = settings.save() {
            warn!("Could not write default settings: {:#}", e);
        }
    }

    let frame_time = settings.time.target_frame_time;
    let frames = settings.session.frames;
    let mut app = VigilApp::new(settings);

    let mut last = None;
    for frame in 0..frames {
        let output = app.update(frame, frame_time);
        if frame % 60 == 0 {
            info!(
                frame,
                x = output.camera_position.x,
                y = output.camera_position.y,
                slot = output.selected_slot,
                hint = output.hint_visible,
                "Camera"
            );
        }
        last = Some(output);
    }

    if let Some(output) = last {
        info!(
            "Finished {} frames: camera at ({:.1}, {:.1}), slot {}, weapon {:?}",
            frames,
            output.camera_position.x,
            output.camera_position.y,
            output.selected_slot,
            app.rig.selected_weapon().map(ItemId::as_str),
        );
    }
    info!(
        "Field-of-view rebuilds: {}, hint refreshes: {}",
        app.world.fov_rebuilds(),
        app.hints_shown
    );

    Ok(())
}
