use crate::dom;
use crate::three;
use js_sys::Reflect;
use std::future::Future;
use tracker_core::{LoadError, ModelLoader};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// glTF loading through `THREE.GLTFLoader`; yields the default scene.
#[derive(Clone)]
pub struct GltfModelLoader {
    inner: three::GltfLoader,
}

impl GltfModelLoader {
    pub fn new() -> anyhow::Result<Self> {
        three::GltfLoader::new()
            .map(|inner| Self { inner })
            .map_err(|e| anyhow::anyhow!("THREE.GLTFLoader unavailable: {}", dom::describe(&e)))
    }
}

impl ModelLoader for GltfModelLoader {
    type Asset = three::Object3D;

    fn load(&self, url: &str) -> impl Future<Output = Result<three::Object3D, LoadError>> {
        let promise = self.inner.load_async(url);
        async move {
            let gltf = JsFuture::from(promise)
                .await
                .map_err(|e| LoadError::Fetch(dom::describe(&e)))?;
            let scene = Reflect::get(&gltf, &JsValue::from_str("scene"))
                .map_err(|e| LoadError::Parse(dom::describe(&e)))?;
            if scene.is_undefined() || scene.is_null() {
                return Err(LoadError::Parse("glTF has no default scene".to_string()));
            }
            Ok(scene.unchecked_into())
        }
    }
}
