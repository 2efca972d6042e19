use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Surface};
use crate::simulation::driver::advance_frame;
use crate::simulation::bezier::{cubic_point, cubic_tangent};

/// Component tagging each marker dot with its index into
/// `RopeState::marker_positions` (start, end, control A, control B)
#[derive(Component)]
struct DotIndex(pub usize);

/// Gizmo group for the curve polyline (thick stroke)
#[derive(Default, Reflect, GizmoConfigGroup)]
struct CurveGizmos;

/// Gizmo group for the tangent ticks (thin stroke)
#[derive(Default, Reflect, GizmoConfigGroup)]
struct TangentGizmos;

const CURVE_COLOR: Color = Color::srgb(0.0, 1.0, 0.835); // #00ffd5
const TANGENT_COLOR: Color = Color::srgb(1.0, 0.933, 0.345); // #ffee58
const ANCHOR_COLOR: Color = Color::srgb(1.0, 0.322, 0.322); // #ff5252
const CONTROL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0); // #ffffff

const CURVE_WIDTH: f32 = 3.0;
const TANGENT_WIDTH: f32 = 1.0;
const DOT_RADIUS: f32 = 5.0;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer at {}x{}", scenario.surface.width, scenario.surface.height);

    let resolution = WindowResolution::new(scenario.surface.width as f32, scenario.surface.height as f32);

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ropesim".to_string(),
                resolution,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .init_gizmo_group::<CurveGizmos>()
        .init_gizmo_group::<TangentGizmos>()
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                pointer_input_system,
                resize_system,
                physics_step_system,
                draw_curve_system,
                sync_markers_system,
            )
                .chain(),
        )
        .run();
}

/// Surface coordinates (origin top-left, y down) to Bevy world coordinates
/// (origin centered, y up), using the live surface dimensions
fn to_world(p: NVec2, surface: &Surface) -> Vec2 {
    Vec2::new(
        (p.x - surface.width * 0.5) as f32,
        (surface.height * 0.5 - p.y) as f32,
    )
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    // 2D camera on a black background
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        ..Default::default()
    });

    // Stroke widths per gizmo group
    let (curve_config, _) = config_store.config_mut::<CurveGizmos>();
    curve_config.line_width = CURVE_WIDTH;
    let (tangent_config, _) = config_store.config_mut::<TangentGizmos>();
    tangent_config.line_width = TANGENT_WIDTH;

    // One filled circle per marker: anchors first, then control points
    for (i, p) in scenario.state.marker_positions().iter().enumerate() {
        let color = if i < 2 { ANCHOR_COLOR } else { CONTROL_COLOR };
        let world = to_world(*p, &scenario.surface);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(DOT_RADIUS))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(world.x, world.y, 1.0),
                ..Default::default()
            },
            DotIndex(i),
        ));
    }
}

/// Copy the latest cursor position into the scenario, in surface coordinates.
/// Last write wins; the frame driver reads it once at the next tick
fn pointer_input_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        // cursor_position is already top-left-origin logical pixels
        scenario.pointer = NVec2::new(cursor.x as f64, cursor.y as f64);
    }
}

/// Track viewport resizes. The anchors stay where the startup dimensions
/// put them; only the coordinate mapping follows the new size
fn resize_system(mut events: EventReader<WindowResized>, mut scenario: ResMut<Scenario>) {
    for e in events.read() {
        scenario.surface.width = e.width as f64;
        scenario.surface.height = e.height as f64;
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        state,
        parameters,
        pointer,
        ..
    } = &mut *scenario;

    // Match signature: (state, pointer, parameters)
    advance_frame(state, *pointer, parameters);
}

fn draw_curve_system(
    scenario: Res<Scenario>,
    mut curve_gizmos: Gizmos<CurveGizmos>,
    mut tangent_gizmos: Gizmos<TangentGizmos>,
) {
    let state = &scenario.state;
    let params = &scenario.parameters;
    let surface = &scenario.surface;

    let p0 = state.start;
    let p1 = state.control_a.x;
    let p2 = state.control_b.x;
    let p3 = state.end;

    // Curve polyline. The loop bound overshoots t = 1 slightly so the
    // endpoint sample is always emitted despite step accumulation
    let mut points = Vec::new();
    let mut t = 0.0;
    while t <= 1.001 {
        points.push(to_world(cubic_point(t, p0, p1, p2, p3), surface));
        t += params.curve_step;
    }
    curve_gizmos.linestrip_2d(points, CURVE_COLOR);

    // Tangent ticks: short segment along the unit tangent at a coarser step
    let mut t = 0.0;
    while t <= 1.0 {
        let p = cubic_point(t, p0, p1, p2, p3);
        let dir = cubic_tangent(t, p0, p1, p2, p3);
        let tip = p + dir * params.tangent_len;

        tangent_gizmos.line_2d(to_world(p, surface), to_world(tip, surface), TANGENT_COLOR);
        t += params.tangent_step;
    }
}

fn sync_markers_system(scenario: Res<Scenario>, mut query: Query<(&DotIndex, &mut Transform)>) {
    let positions = scenario.state.marker_positions();
    for (DotIndex(i), mut transform) in &mut query {
        if let Some(p) = positions.get(*i) {
            let world = to_world(*p, &scenario.surface);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}
