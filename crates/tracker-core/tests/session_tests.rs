// Session lifecycle and per-frame pose binding against a recording backend.

use glam::DVec3;
use std::cell::RefCell;
use std::future::{ready, Future};
use tracker_core::*;

const SWAP: [f64; 9] = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
const IDENTITY: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
const DEGENERATE: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];

#[derive(Default)]
struct RecordingBackend {
    setup: Option<SceneSetup>,
    bounds: Vec<OrthoBounds>,
    next_node: u32,
    wrapped: Vec<(u32, String, f64)>,
    attached: Vec<u32>,
    poses: Vec<(u32, Pose)>,
    renders: u32,
    disposed: bool,
}

impl SceneBackend for RecordingBackend {
    type Asset = String;
    type Node = u32;

    fn create_scene(&mut self, setup: &SceneSetup) -> Result<(), TrackerError> {
        self.setup = Some(setup.clone());
        Ok(())
    }

    fn set_camera_bounds(&mut self, bounds: &OrthoBounds) {
        self.bounds.push(*bounds);
    }

    fn wrap_asset(&mut self, asset: String, scale: f64) -> u32 {
        self.next_node += 1;
        self.wrapped.push((self.next_node, asset, scale));
        self.next_node
    }

    fn add_node(&mut self, node: &u32) {
        self.attached.push(*node);
    }

    fn remove_node(&mut self, node: &u32) {
        self.attached.retain(|n| n != node);
    }

    fn set_node_pose(&mut self, node: &u32, pose: &Pose) {
        self.poses.push((*node, *pose));
    }

    fn render(&mut self) {
        self.renders += 1;
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

#[derive(Default)]
struct RecordingHost {
    events: RefCell<Vec<String>>,
}

impl Host for RecordingHost {
    fn pixel_ratio(&self) -> f64 {
        2.0
    }

    fn show_loading(&self, title: &str) {
        self.events.borrow_mut().push(format!("loading:{title}"));
    }

    fn hide_loading(&self) {
        self.events.borrow_mut().push("hide".to_string());
    }

    fn show_toast(&self, title: &str, duration_ms: u32) {
        self.events
            .borrow_mut()
            .push(format!("toast:{title}:{duration_ms}"));
    }
}

/// Resolves immediately; URLs containing "missing" fail.
struct FakeLoader;

impl ModelLoader for FakeLoader {
    type Asset = String;

    fn load(&self, url: &str) -> impl Future<Output = Result<String, LoadError>> {
        let result = if url.contains("missing") {
            Err(LoadError::Fetch(format!("404 {url}")))
        } else {
            Ok(url.to_string())
        };
        ready(result)
    }
}

fn make_session() -> TrackerSession<RecordingBackend> {
    let host = RecordingHost::default();
    TrackerSession::new(
        RecordingBackend::default(),
        TrackerConfig::default(),
        host.pixel_ratio(),
    )
    .unwrap()
}

fn loaded_session(url: &str) -> TrackerSession<RecordingBackend> {
    let mut session = make_session();
    let host = RecordingHost::default();
    pollster::block_on(session.load_model(&FakeLoader, &host, url)).unwrap();
    session
}

#[test]
fn new_session_builds_scene_with_placeholder_camera() {
    let session = make_session();
    let backend = session.backend();
    let setup = backend.setup.as_ref().expect("scene created");
    assert_eq!(setup.pixel_ratio, 2.0);
    assert_eq!(setup.ambient_color, 0xffffff);
    assert_eq!(backend.bounds, vec![OrthoBounds::unit(-1000.0, 1000.0)]);
    assert_eq!(session.frustum_updates(), 0);
    assert!(!session.has_model());
}

#[test]
fn set_model_without_model_only_updates_viewport() {
    let mut session = make_session();
    let outcome = session.set_model(&SWAP, 300.0, 300.0).unwrap();
    assert_eq!(outcome, FrameOutcome::NoModel);
    assert_eq!(session.frustum_updates(), 1);
    assert!(session.backend().poses.is_empty());
    assert!(session.backend().attached.is_empty());
}

#[test]
fn repeated_viewport_does_not_recompute_frustum() {
    let mut session = loaded_session("duck.glb");
    session.set_model(&SWAP, 300.0, 200.0).unwrap();
    session.set_model(&IDENTITY, 300.0, 200.0).unwrap();
    assert_eq!(session.frustum_updates(), 1);

    let last = *session.backend().bounds.last().unwrap();
    assert_eq!((last.left, last.right), (-150.0, 150.0));
    assert_eq!((last.top, last.bottom), (100.0, -100.0));

    // height-only change still keeps bounds equal to the viewport
    session.set_model(&SWAP, 300.0, 400.0).unwrap();
    assert_eq!(session.frustum_updates(), 2);
    let last = *session.backend().bounds.last().unwrap();
    assert_eq!((last.top, last.bottom), (200.0, -200.0));
}

#[test]
fn swap_transform_positions_model_end_to_end() {
    let mut session = loaded_session("duck.glb");
    let outcome = session.set_model(&SWAP, 300.0, 300.0).unwrap();
    let FrameOutcome::Applied(pose) = outcome else {
        panic!("expected applied pose, got {outcome:?}");
    };
    assert_eq!(pose.position, DVec3::new(-10.0, -35.0, 0.0));
    assert!((pose.scale - 0.29).abs() < 1e-12);

    let (node, recorded) = session.backend().poses[0];
    assert_eq!(Some(&node), session.model());
    assert_eq!(recorded, pose);
}

#[test]
fn degenerate_frame_is_skipped_and_keeps_last_pose() {
    let mut session = loaded_session("duck.glb");
    session.set_model(&IDENTITY, 300.0, 300.0).unwrap();
    let outcome = session.set_model(&DEGENERATE, 300.0, 300.0).unwrap();
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert_eq!(session.backend().poses.len(), 1);
    let (_, pose) = session.backend().poses[0];
    assert!(pose.position.is_finite());
}

#[test]
fn malformed_transform_is_an_error() {
    let mut session = loaded_session("duck.glb");
    let err = session.set_model(&[1.0, 0.0, 0.0], 300.0, 300.0).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidTransform(_)));

    let mut bad = IDENTITY;
    bad[2] = f64::NAN;
    assert!(session.set_model(&bad, 300.0, 300.0).is_err());
    assert!(session.backend().poses.is_empty());
}

#[test]
fn invalid_viewport_is_rejected() {
    let mut session = make_session();
    let err = session.set_model(&IDENTITY, 0.0, 300.0).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidViewport { .. }));
    assert_eq!(session.frustum_updates(), 0);
}

#[test]
fn load_wraps_asset_at_initial_scale_with_feedback() {
    let mut session = make_session();
    let host = RecordingHost::default();
    let replaced = pollster::block_on(session.load_model(&FakeLoader, &host, "duck.glb")).unwrap();
    assert!(!replaced);
    assert_eq!(
        session.backend().wrapped,
        vec![(1, "duck.glb".to_string(), 0.29)]
    );
    assert_eq!(session.backend().attached, vec![1]);
    assert_eq!(
        *host.events.borrow(),
        vec!["loading:Loading Model...".to_string(), "hide".to_string()]
    );
}

#[test]
fn update_replaces_previous_model_atomically() {
    let mut session = loaded_session("duck.glb");
    let host = RecordingHost::default();
    let replaced = pollster::block_on(session.load_model(&FakeLoader, &host, "fox.glb")).unwrap();
    assert!(replaced);
    assert_eq!(session.backend().attached, vec![2]);
    assert_eq!(session.model(), Some(&2));
}

#[test]
fn failed_load_keeps_previous_model_and_toasts_once() {
    let mut session = loaded_session("duck.glb");
    let host = RecordingHost::default();
    let err = pollster::block_on(session.load_model(&FakeLoader, &host, "missing.glb")).unwrap_err();
    match err {
        TrackerError::AssetLoad { url, .. } => assert_eq!(url, "missing.glb"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(session.backend().attached, vec![1]);
    let toasts: Vec<_> = host
        .events
        .borrow()
        .iter()
        .filter(|e| e.starts_with("toast:"))
        .cloned()
        .collect();
    assert_eq!(toasts, vec!["toast:Loading model failed.:3000".to_string()]);
    assert_eq!(host.events.borrow().last().map(String::as_str), Some(toasts[0].as_str()));
}

#[test]
fn render_frame_reaches_backend() {
    let mut session = make_session();
    session.render_frame().unwrap();
    session.render_frame().unwrap();
    assert_eq!(session.backend().renders, 2);
}

#[test]
fn dispose_detaches_model_and_fails_later_calls() {
    let mut session = loaded_session("duck.glb");
    session.dispose().unwrap();
    assert!(session.is_disposed());
    assert!(session.backend().disposed);
    assert!(session.backend().attached.is_empty());
    assert!(!session.has_model());

    assert!(matches!(session.dispose(), Err(TrackerError::Disposed)));
    assert!(matches!(
        session.set_model(&IDENTITY, 300.0, 300.0),
        Err(TrackerError::Disposed)
    ));
    assert!(matches!(session.render_frame(), Err(TrackerError::Disposed)));
    assert!(matches!(
        session.install_model("fox.glb".to_string()),
        Err(TrackerError::Disposed)
    ));
    let host = RecordingHost::default();
    let load = pollster::block_on(session.load_model(&FakeLoader, &host, "fox.glb"));
    assert!(matches!(load, Err(TrackerError::Disposed)));
    assert!(host.events.borrow().is_empty());
}

#[test]
fn custom_config_changes_scale_and_anchor() {
    let config = TrackerConfig {
        init_scale: 1.0,
        track_point: glam::DVec2::new(0.0, 0.0),
        ..TrackerConfig::default()
    };
    let mut session = TrackerSession::new(RecordingBackend::default(), config, 1.0).unwrap();
    session.install_model("duck.glb".to_string()).unwrap();
    let outcome = session.set_model(&IDENTITY, 200.0, 100.0).unwrap();
    assert_eq!(
        outcome,
        FrameOutcome::Applied(Pose {
            position: DVec3::new(-100.0, 50.0, 0.0),
            rotation: glam::DMat4::IDENTITY,
            scale: 1.0,
        })
    );
}
