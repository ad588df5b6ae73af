use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::EfieldError;

/// Resolves `#import efield::camera` and `#import efield::lighting` in the
/// mesh shaders.
///
/// The shared modules are registered once at construction. Composed shaders
/// are handed to wgpu as `naga::Module` IR, so WGSL is parsed only once.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/camera.wgsl"),
        file_path: "modules/camera.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/lighting.wgsl"),
        file_path: "modules/lighting.wgsl",
    },
];

/// Lit mesh shader source (ground, charge discs).
pub const LAMBERT_SHADER: &str =
    include_str!("../../assets/shaders/raster/mesh/lambert.wgsl");
/// Unlit mesh shader source (field arrows).
pub const UNLIT_SHADER: &str =
    include_str!("../../assets/shaders/raster/mesh/unlit.wgsl");

impl ShaderComposer {
    /// Composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, EfieldError> {
        let mut composer = Composer::default();

        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    EfieldError::Shader(format!(
                        "failed to register module '{}': {e:?}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, EfieldError> {
        let naga_module = self.compose_naga(source, file_path).map_err(|e| {
            EfieldError::Shader(format!("failed to compose '{file_path}': {e}"))
        })?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose to a `naga::Module` only; needs no GPU device.
    ///
    /// # Errors
    ///
    /// Returns the composer error if imports cannot be resolved or the
    /// source fails to parse.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, Box<naga_oil::compose::ComposerError>> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for (source, file_path) in [
            (LAMBERT_SHADER, "lambert.wgsl"),
            (UNLIT_SHADER, "unlit.wgsl"),
        ] {
            let module =
                composer.compose_naga(source, file_path).unwrap_or_else(|e| {
                    panic!("{file_path} failed to compose: {e}")
                });
            let entry_points: Vec<_> =
                module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
            assert!(entry_points.contains(&"vs_main"), "{file_path}");
            assert!(entry_points.contains(&"fs_main"), "{file_path}");
        }
    }

    #[test]
    fn unresolved_import_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let source =
            "#import efield::missing::Thing\n@fragment fn fs_main() {}";
        assert!(composer.compose_naga(source, "bad.wgsl").is_err());
    }
}
