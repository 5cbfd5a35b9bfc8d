//! Transform handles demo
//!
//! Scripts a camera, a target and a cursor path through translate, rotate
//! and scale drags, logging the events, the resulting transform and the
//! draw statistics of every frame.
//!
//! An optional first argument names a handle profile in RON format.

use glam::{Vec2, Vec3};
use th_core::{
    HandleProfile, HandleTarget, PerspectiveCamera, PointerState, Transform, TransformHandles,
    ViewCamera,
};
use th_renderer::{DrawBackend, GizmoVertex, HandleRenderer, PrimitiveTopology};

/// Backend that only counts what it is asked to draw
#[derive(Debug, Default)]
struct StatsBackend {
    calls: usize,
    lines: usize,
    triangles: usize,
    quads: usize,
    bytes: usize,
}

impl DrawBackend for StatsBackend {
    fn draw(&mut self, topology: PrimitiveTopology, vertices: &[GizmoVertex]) {
        self.calls += 1;
        self.bytes += std::mem::size_of_val(vertices);
        let primitives = vertices.len() / topology.vertices_per_primitive();
        match topology {
            PrimitiveTopology::LineList => self.lines += primitives,
            PrimitiveTopology::TriangleList => self.triangles += primitives,
            PrimitiveTopology::QuadList => self.quads += primitives,
        }
    }
}

struct Session {
    handles: TransformHandles,
    renderer: HandleRenderer,
    camera: PerspectiveCamera,
    target: Transform,
    frame: usize,
}

impl Session {
    /// Run one frame with `input` and render the result
    fn step(&mut self, input: PointerState) {
        self.frame += 1;
        let events = self
            .handles
            .update(Some(&mut self.target), &self.camera, &input);

        let mut stats = StatsBackend::default();
        self.renderer
            .render(&self.handles, &self.target, &self.camera, &mut stats);

        tracing::info!(
            "frame {:>2} cursor ({:>6.1}, {:>6.1}) hovered {:?} dragged {:?}",
            self.frame,
            input.cursor.x,
            input.cursor.y,
            self.handles.hovered_axis(),
            self.handles.dragged_axis(),
        );
        for event in &events {
            tracing::info!("  event {:?}", event);
        }
        tracing::debug!(
            "  draw: {} calls, {} lines, {} triangles, {} quads, {} bytes",
            stats.calls,
            stats.lines,
            stats.triangles,
            stats.quads,
            stats.bytes
        );
    }

    /// Hover, press, drag in `steps` frames and release
    fn drag(&mut self, from: Vec2, to: Vec2, steps: usize) {
        self.step(PointerState::at(from));
        self.step(PointerState::press(from));
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.step(PointerState::hold(from.lerp(to, t)));
        }
        self.step(PointerState::release(to));
        self.log_target();
    }

    fn log_target(&self) {
        let (axis, angle) = self.target.rotation().to_axis_angle();
        tracing::info!(
            "target position {:?} rotation {:.1} deg about {:?} scale {:?}",
            self.target.position(),
            angle.to_degrees(),
            axis,
            self.target.local_scale()
        );
    }

    fn screen(&self, point: Vec3) -> Vec2 {
        self.camera.world_to_screen(point).position
    }

    fn handle_scale(&self) -> f32 {
        self.handles.handle_scale(&self.camera, self.target.position())
    }

    fn key(&mut self, key: char) {
        let event = self
            .handles
            .handle_key(key, &PointerState::at(Vec2::ZERO));
        tracing::info!("key '{}' -> {:?}", key, event);
    }
}

fn load_profile() -> Option<HandleProfile> {
    let path = std::env::args().nth(1)?;
    match HandleProfile::load(&path) {
        Ok(profile) => {
            tracing::info!("Loaded profile '{}' from {}", profile.name, path);
            Some(profile)
        }
        Err(e) => {
            tracing::warn!("Ignoring profile {}: {}", path, e);
            None
        }
    }
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "th_demo=info,th_core=debug,th_renderer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting transform handles demo");

    let mut handles = TransformHandles::default();
    if let Some(profile) = load_profile() {
        handles.attach_profile(profile);
    }

    let mut session = Session {
        handles,
        renderer: HandleRenderer::new(),
        camera: PerspectiveCamera::new(Vec3::new(3.0, 4.0, -8.0), Vec3::ZERO, 1280.0, 720.0),
        target: Transform::default(),
        frame: 0,
    };
    session.log_target();

    // Translate along X
    let scale = session.handle_scale();
    let grab = session.screen(Vec3::X * scale * 0.8);
    session.drag(grab, grab + Vec2::new(120.0, 0.0), 4);

    // Rotate about Y, grabbing the circle on the side facing the camera
    session.key('e');
    let origin = session.target.position();
    let scale = session.handle_scale();
    let toward_camera = (session.camera.position() - origin) * Vec3::new(1.0, 0.0, 1.0);
    let on_circle = origin + toward_camera.normalize_or(Vec3::NEG_Z) * scale;
    let grab = session.screen(on_circle);
    session.drag(grab, grab + Vec2::new(-90.0, 0.0), 3);

    // Uniform scale from the center box
    session.key('r');
    let grab = session.screen(session.target.position());
    session.drag(grab, grab + Vec2::new(60.0, 0.0), 3);

    // Back to translation in global space
    session.key('w');
    session.key('x');
    let scale = session.handle_scale();
    let grab = session.screen(session.target.position() + Vec3::Y * scale * 0.7);
    session.drag(grab, grab + Vec2::new(0.0, -80.0), 2);

    // Focus loss mid-drag
    session.step(PointerState::press(grab));
    if let Some(event) = session.handles.force_end_drag() {
        tracing::info!("focus lost: {:?}", event);
    }
    session.step(PointerState::at(grab));
}
