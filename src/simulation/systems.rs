use crate::loading::EarthAssets;
use crate::simulation::components::*;
use crate::simulation::events::{ResetSimulation, SliderChanged};
use crate::simulation::resources::*;
use bevy::prelude::*;
use greenhouse::constants::{CO2_COLOR, METHANE_COLOR, OVERLAY_COLOR};
use greenhouse::coupling::Gas;

const EARTH_Z: f32 = 0.0;
const OVERLAY_Z: f32 = 1.0;
const PARTICLE_Z: f32 = 2.0;

const HUD_FONT_SIZE: f32 = 16.0;
const HUD_MARGIN: f32 = 10.0;
// three lines of text above the bottom edge of the canvas
const HUD_VALUES_OFFSET: f32 = 76.0;

fn rgba(color: [u8; 3], alpha: f32) -> Color {
    Color::srgba_u8(color[0], color[1], color[2], alpha.clamp(0.0, 255.0).round() as u8)
}

pub fn setup_simulation_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<SimulationSettings>,
) {
    let particle_alpha = settings.simulation.config().particles.alpha as f32;

    // alpha below 1 selects blended materials
    commands.insert_resource(SimulationMeshes {
        circle: meshes.add(Circle::new(1.0)),
        overlay: materials.add(rgba(OVERLAY_COLOR, 0.0)),
        methane: materials.add(rgba(METHANE_COLOR, particle_alpha)),
        co2: materials.add(rgba(CO2_COLOR, particle_alpha)),
    });
}

/// Spawn the earth, overlay and HUD once loading is over
pub fn spawn_scene(
    mut commands: Commands,
    settings: Res<SimulationSettings>,
    simulation_meshes: Res<SimulationMeshes>,
    earth_assets: Option<Res<EarthAssets>>,
) {
    match earth_assets {
        Some(assets) => {
            commands.spawn((
                Sprite {
                    image: assets.earth.clone(),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, EARTH_Z),
                Visibility::Hidden,
                EarthSprite,
            ));
        }
        None => warn!("Earth image not loaded, skipping earth rendering"),
    }

    commands.spawn((
        Mesh2d(simulation_meshes.circle.clone()),
        MeshMaterial2d(simulation_meshes.overlay.clone()),
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
        TemperatureOverlay,
    ));

    let canvas_height = settings.simulation.config().canvas.height;
    let hud_font = TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    };

    commands.spawn((
        Text::new(""),
        hud_font.clone(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN / 2.0),
            ..default()
        },
        TemperatureLabel,
    ));

    commands.spawn((
        Text::new(""),
        hud_font,
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(canvas_height - HUD_VALUES_OFFSET),
            ..default()
        },
        SliderValuesLabel,
    ));

    info!("Simulation scene spawned");
}

/// Fold this frame's slider messages into the simulation state
pub fn apply_slider_changes(
    mut slider_events: MessageReader<SliderChanged>,
    mut reset_events: MessageReader<ResetSimulation>,
    settings: Res<SimulationSettings>,
    mut current: ResMut<CurrentSimulation>,
) {
    if reset_events.read().count() > 0 {
        current.state = settings.simulation.initial_state();
        info!("Simulation reset to defaults");
    }

    let simulation = &settings.simulation;
    for event in slider_events.read() {
        current.state = simulation.handle_slider_change(current.state, event.slider, event.value);
        debug!(
            "{:?} set to {}, temperature now {:.2}°C",
            event.slider, event.value, current.state.temperature.celsius
        );
    }
}

pub fn prepare_frame(
    settings: Res<SimulationSettings>,
    current: Res<CurrentSimulation>,
    mut rng: ResMut<ParticleRng>,
    earth_assets: Option<Res<EarthAssets>>,
    images: Res<Assets<Image>>,
    mut frame: ResMut<CurrentFrame>,
) {
    let image_size = earth_assets
        .as_ref()
        .and_then(|assets| images.get(&assets.earth))
        .map(|image| image.size_f32());

    frame.directives = Some(
        settings
            .simulation
            .build_frame(&current.state, image_size, &mut rng.0),
    );
}

pub fn draw_earth(
    frame: Res<CurrentFrame>,
    settings: Res<SimulationSettings>,
    mut earth_query: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<EarthSprite>>,
) {
    let Ok((mut sprite, mut transform, mut visibility)) = earth_query.single_mut() else {
        return;
    };
    let Some(placement) = frame.directives.as_ref().and_then(|d| d.earth) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let layout = settings.canvas_layout();
    sprite.custom_size = Some(placement.size);
    transform.translation = layout.canvas_to_world(placement.center).extend(EARTH_Z);
    *visibility = Visibility::Visible;
}

pub fn draw_overlay(
    frame: Res<CurrentFrame>,
    settings: Res<SimulationSettings>,
    simulation_meshes: Res<SimulationMeshes>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut overlay_query: Query<&mut Transform, With<TemperatureOverlay>>,
) {
    let Some(directives) = frame.directives.as_ref() else {
        return;
    };
    let overlay = &directives.overlay;

    if let Ok(mut transform) = overlay_query.single_mut() {
        let layout = settings.canvas_layout();
        transform.translation = layout.canvas_to_world(overlay.center).extend(OVERLAY_Z);
        transform.scale = Vec3::splat(overlay.diameter / 2.0);
    }

    let color = rgba(overlay.color, overlay.alpha);
    let needs_update = materials
        .get(&simulation_meshes.overlay)
        .is_some_and(|material| material.color != color);
    if needs_update {
        if let Some(material) = materials.get_mut(&simulation_meshes.overlay) {
            material.color = color;
        }
    }
}

/// Match the particle pool to this frame's points, spawning or despawning the difference
pub fn draw_particles(
    mut commands: Commands,
    frame: Res<CurrentFrame>,
    settings: Res<SimulationSettings>,
    simulation_meshes: Res<SimulationMeshes>,
    mut particle_query: Query<(Entity, &Particle, &mut Transform)>,
) {
    let Some(directives) = frame.directives.as_ref() else {
        return;
    };
    let layout = settings.canvas_layout();

    for gas in Gas::ALL {
        let directive = directives.particles(gas);
        let scale = Vec3::splat(directive.radius);
        let mut points = directive.points.iter();

        for (entity, _, mut transform) in particle_query
            .iter_mut()
            .filter(|(_, particle, _)| particle.gas == gas)
        {
            match points.next() {
                Some(point) => {
                    transform.translation =
                        layout.canvas_to_world(point.position).extend(PARTICLE_Z);
                }
                None => commands.entity(entity).despawn(),
            }
        }

        let material = match gas {
            Gas::Methane => simulation_meshes.methane.clone(),
            Gas::Co2 => simulation_meshes.co2.clone(),
        };
        for point in points {
            commands.spawn((
                Mesh2d(simulation_meshes.circle.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_translation(
                    layout.canvas_to_world(point.position).extend(PARTICLE_Z),
                )
                .with_scale(scale),
                Particle { gas },
            ));
        }
    }
}

pub fn update_hud(
    frame: Res<CurrentFrame>,
    mut temperature_query: Query<&mut Text, (With<TemperatureLabel>, Without<SliderValuesLabel>)>,
    mut values_query: Query<&mut Text, (With<SliderValuesLabel>, Without<TemperatureLabel>)>,
) {
    let Some(directives) = frame.directives.as_ref() else {
        return;
    };
    let hud = &directives.hud;

    for mut text in &mut temperature_query {
        if text.0 != hud.temperature {
            text.0 = hud.temperature.clone();
        }
    }
    for mut text in &mut values_query {
        if text.0 != hud.slider_values {
            text.0 = hud.slider_values.clone();
        }
    }
}
