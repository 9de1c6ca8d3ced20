use std::path::Path;

use glam::Vec3;

use crate::error::MorphRendererError;
use crate::scene::cpu::mesh::{
  Face,
  Mesh,
};

/// The glTF pose loader.
pub struct GltfLoader;

/// The implementation of the glTF pose loader.
impl GltfLoader {
  /// Load one pose mesh from the given glTF file.
  /// Only the first primitive of the first mesh is read; anything else in
  /// the file is ignored with a warning.
  /// param path: The path of the glTF file.
  /// return: The loaded pose mesh.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh, MorphRendererError> {
    let path = path.as_ref();
    let (gltf, mesh_data, _image_data) = gltf::import(path)
      .map_err(|err| MorphRendererError::asset(&format!("Load glTF file \"{:?}\" failed.", path), Some(Box::new(err))))?;

    let mut meshes = gltf.meshes();
    let mesh = meshes.next()
      .ok_or(MorphRendererError::asset(&format!("No mesh in glTF file \"{:?}\".", path), None))?;
    if meshes.next().is_some() {
      log::warn!("More than one mesh in glTF file \"{:?}\". Only the first mesh will be loaded.", path);
    }

    let mesh_name = mesh.name().unwrap_or("<Unnamed>");
    log::debug!("Loading pose mesh \"{}\".", mesh_name);
    let mut primitives = mesh.primitives();
    let primitive = primitives.next()
      .ok_or(MorphRendererError::asset(&format!("No primitive in mesh \"{}\".", mesh_name), None))?;
    if primitives.next().is_some() {
      log::warn!("More than one primitive in mesh \"{}\". Only the first primitive will be loaded.", mesh_name);
    }

    let reader = primitive.reader(|i| Some(&mesh_data[i.index()]));
    let indices = reader.read_indices()
      .ok_or(MorphRendererError::asset(&format!("Read indices from mesh \"{}\" failed.", mesh_name), None))?
      .into_u32().collect::<Vec<_>>();
    let positions = reader.read_positions()
      .ok_or(MorphRendererError::asset(&format!("Read positions from mesh \"{}\" failed.", mesh_name), None))?
      .map(Vec3::from).collect::<Vec<_>>();
    let normals = reader.read_normals()
      .ok_or(MorphRendererError::asset(&format!("Read normals from mesh \"{}\" failed.", mesh_name), None))?
      .map(Vec3::from).collect::<Vec<_>>();

    if indices.len() % 3 != 0 {
      return Err(MorphRendererError::asset(
        &format!("Mesh \"{}\" is not triangulated ({} indices).", mesh_name, indices.len()),
        None,
      ));
    }

    // glTF indexes positions and normals with one stream, so both corner
    // slots carry the same index.
    let faces = indices.chunks_exact(3)
      .map(|corner| Face {
        vertices: [corner[0], corner[1], corner[2]],
        normals: [corner[0], corner[1], corner[2]],
      })
      .collect::<Vec<_>>();

    Ok(Mesh {
      positions,
      normals,
      faces,
    })
  }
}
