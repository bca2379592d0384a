//! Bindings to the slice of three.js the tracker drives.
//!
//! Expects a global `THREE` with `THREE.GLTFLoader` registered on it.

use js_sys::{Object, Promise};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Debug, Clone)]
    pub type Object3D;

    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;

    // ---- math ----

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Debug, Clone)]
    pub type Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64);

    #[wasm_bindgen(method, js_name = setScalar)]
    pub fn set_scalar(this: &Vector3, scalar: f64);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Debug, Clone)]
    pub type Euler;

    #[wasm_bindgen(method, js_name = setFromRotationMatrix)]
    pub fn set_from_rotation_matrix(this: &Euler, m: &Matrix4);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Debug, Clone)]
    pub type Matrix4;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Matrix4;

    /// Reads 16 values in column-major order.
    #[wasm_bindgen(method, js_name = fromArray)]
    pub fn from_array(this: &Matrix4, array: &[f64]);

    // ---- scene graph ----

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Debug, Clone)]
    pub type Scene;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Scene;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Debug, Clone)]
    pub type Group;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Group;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Debug, Clone)]
    pub type OrthographicCamera;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> OrthographicCamera;

    #[wasm_bindgen(method, setter)]
    pub fn set_left(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, setter)]
    pub fn set_right(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, setter)]
    pub fn set_top(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, setter)]
    pub fn set_bottom(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, setter)]
    pub fn set_near(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, setter)]
    pub fn set_far(this: &OrthographicCamera, value: f64);

    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &OrthographicCamera);

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Debug, Clone)]
    pub type AmbientLight;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32) -> AmbientLight;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Debug, Clone)]
    pub type DirectionalLight;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    // ---- renderer ----

    #[wasm_bindgen(js_namespace = THREE, js_name = WebGLRenderer)]
    #[derive(Debug, Clone)]
    pub type WebGlRenderer;

    #[wasm_bindgen(constructor, js_namespace = THREE, js_class = "WebGLRenderer", catch)]
    pub fn new(parameters: &Object) -> Result<WebGlRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGlRenderer, ratio: f64);

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGlRenderer, width: f64, height: f64);

    #[wasm_bindgen(method)]
    pub fn render(this: &WebGlRenderer, scene: &Scene, camera: &OrthographicCamera);

    #[wasm_bindgen(method)]
    pub fn dispose(this: &WebGlRenderer);

    // ---- assets ----

    #[wasm_bindgen(js_namespace = THREE, js_name = GLTFLoader)]
    #[derive(Debug, Clone)]
    pub type GltfLoader;

    #[wasm_bindgen(constructor, js_namespace = THREE, js_class = "GLTFLoader", catch)]
    pub fn new() -> Result<GltfLoader, JsValue>;

    /// Resolves to the parsed glTF object (`{ scene, scenes, animations, ... }`).
    #[wasm_bindgen(method, js_name = loadAsync)]
    pub fn load_async(this: &GltfLoader, url: &str) -> Promise;
}
