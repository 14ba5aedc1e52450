use bevy::asset::Asset;
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::*;

// sun direction data (needs to be in a struct)
// this is how to pass sun vector3 data to the shaders
// https://www.w3.org/TR/WGSL/#address-space-layout-constraints
#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct SunUniform {
    pub direction: Vec3,
    pub _padding: f32, // ensures proper 16-byte GPU alignment
}

// flat glow color for the atmosphere shell and city markers
#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct GlowUniform {
    pub color: Vec3,
    pub _padding: f32,
}

// earth surface material, day/night blend happens in the fragment shader
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct EarthMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub day_texture: Handle<Image>,
    #[texture(2)]
    #[sampler(3)]
    pub night_texture: Handle<Image>,
    #[uniform(4)]
    pub sun_uniform: SunUniform,
}

impl Material for EarthMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/earth.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }
}

// cloud material
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct CloudMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub cloud_texture: Handle<Image>,
    #[uniform(2)]
    pub sun_uniform: SunUniform,
    #[uniform(3)]
    pub opacity: f32,
}

impl Material for CloudMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/clouds.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add // additive transparency
    }
}

// atmosphere shell material
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    #[uniform(0)]
    pub glow: GlowUniform,
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &bevy::pbr::MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &bevy::render::mesh::MeshVertexBufferLayoutRef,
        _key: bevy::pbr::MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // only the back faces are visible, the glow wraps around the globe
        descriptor.primitive.cull_mode = Some(Face::Front);
        Ok(())
    }
}

// fresnel glow for city markers
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct CityGlowMaterial {
    #[uniform(0)]
    pub glow: GlowUniform,
}

impl Material for CityGlowMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/city_glow.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
