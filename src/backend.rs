use crate::constants::{RENDERER_ALPHA, RENDERER_ANTIALIAS};
use crate::dom;
use crate::three;
use js_sys::{Object, Reflect};
use tracker_core::{OrthoBounds, Pose, SceneBackend, SceneSetup, TrackerError};
use wasm_bindgen::JsValue;
use web_sys as web;

/// three.js scene bound to one canvas.
pub struct ThreeBackend {
    canvas: web::HtmlCanvasElement,
    scene: Option<three::Scene>,
    camera: Option<three::OrthographicCamera>,
    renderer: Option<three::WebGlRenderer>,
}

impl ThreeBackend {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self {
            canvas,
            scene: None,
            camera: None,
            renderer: None,
        }
    }

    fn build_renderer(&self, pixel_ratio: f64) -> anyhow::Result<three::WebGlRenderer> {
        let params = Object::new();
        for (key, value) in [
            ("canvas", JsValue::from(self.canvas.clone())),
            ("antialias", JsValue::from_bool(RENDERER_ANTIALIAS)),
            ("alpha", JsValue::from_bool(RENDERER_ALPHA)),
        ] {
            Reflect::set(&params, &JsValue::from_str(key), &value)
                .map_err(|e| anyhow::anyhow!("renderer option {key}: {}", dom::describe(&e)))?;
        }
        let renderer = three::WebGlRenderer::new(&params)
            .map_err(|e| anyhow::anyhow!("WebGLRenderer: {}", dom::describe(&e)))?;
        renderer.set_pixel_ratio(pixel_ratio);
        renderer.set_size(self.canvas.width() as f64, self.canvas.height() as f64);
        Ok(renderer)
    }
}

impl SceneBackend for ThreeBackend {
    type Asset = three::Object3D;
    type Node = three::Group;

    fn create_scene(&mut self, setup: &SceneSetup) -> Result<(), TrackerError> {
        let camera = three::OrthographicCamera::new(1.0, 1.0, 1.0, 1.0, setup.near, setup.far);
        let scene = three::Scene::new();

        scene.add(&three::AmbientLight::new(setup.ambient_color));
        let directional =
            three::DirectionalLight::new(setup.directional_color, setup.directional_intensity);
        let p = setup.directional_position;
        directional.position().set(p.x, p.y, p.z);
        scene.add(&directional);

        let renderer = self
            .build_renderer(setup.pixel_ratio)
            .map_err(|e| TrackerError::Backend(format!("{e:#}")))?;

        self.camera = Some(camera);
        self.scene = Some(scene);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn set_camera_bounds(&mut self, bounds: &OrthoBounds) {
        if let Some(camera) = &self.camera {
            camera.set_left(bounds.left);
            camera.set_right(bounds.right);
            camera.set_top(bounds.top);
            camera.set_bottom(bounds.bottom);
            camera.set_near(bounds.near);
            camera.set_far(bounds.far);
            camera.update_projection_matrix();
        }
    }

    fn wrap_asset(&mut self, asset: three::Object3D, scale: f64) -> three::Group {
        let group = three::Group::new();
        group.scale().set_scalar(scale);
        group.add(&asset);
        group
    }

    fn add_node(&mut self, node: &three::Group) {
        if let Some(scene) = &self.scene {
            scene.add(node);
        }
    }

    fn remove_node(&mut self, node: &three::Group) {
        if let Some(scene) = &self.scene {
            scene.remove(node);
        }
    }

    fn set_node_pose(&mut self, node: &three::Group, pose: &Pose) {
        node.position()
            .set(pose.position.x, pose.position.y, pose.position.z);
        let rotation = three::Matrix4::new();
        rotation.from_array(&pose.rotation.to_cols_array());
        node.rotation().set_from_rotation_matrix(&rotation);
        node.scale().set_scalar(pose.scale);
    }

    fn render(&mut self) {
        if let (Some(renderer), Some(scene), Some(camera)) =
            (&self.renderer, &self.scene, &self.camera)
        {
            renderer.render(scene, camera);
        }
    }

    fn dispose(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.dispose();
        }
        self.scene = None;
        self.camera = None;
    }
}
