pub mod gltf_loader;

pub use gltf_loader::GltfLoader;
