//! Material definitions for the viewer
//!
//! A scene mixes several material kinds. Only the PBR kinds ([`MaterialKind::Standard`]
//! and [`MaterialKind::Physical`]) expose metalness and roughness; everything else
//! (unlit, line, point, custom shader) has no such parameters and is left alone by
//! the material sliders. Meshes reference either one material or an ordered list of
//! them, one per polygon group.

/// Physically-based shading parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PbrParams {
    /// Metalness factor, conventionally 0.0 (dielectric) to 1.0 (metal)
    pub metalness: f32,
    /// Surface roughness, conventionally 0.0 (mirror) to 1.0 (rough)
    pub roughness: f32,
    /// Strength of environment-map reflections, non-negative
    pub env_map_intensity: f32,
}

impl Default for PbrParams {
    fn default() -> Self {
        Self {
            metalness: 0.0,
            roughness: 0.5,
            env_map_intensity: 1.0,
        }
    }
}

/// The shading model a material uses
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    /// Metallic-roughness PBR
    Standard(PbrParams),
    /// PBR with a clearcoat layer
    Physical { pbr: PbrParams, clearcoat: f32 },
    /// Unlit color
    Basic,
    /// Blinn-Phong, as produced by OBJ/MTL files without PBR extensions
    Phong { shininess: f32 },
    Line { width: f32 },
    Points { size: f32 },
    /// Custom shader; parameters live in the shader source
    Shader { source_label: String },
}

impl MaterialKind {
    /// True for kinds exposing metalness and roughness
    pub fn is_pbr(&self) -> bool {
        matches!(self, MaterialKind::Standard(_) | MaterialKind::Physical { .. })
    }
}

/// Material with a name, base color and shading model
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub kind: MaterialKind,
    /// Set when parameters changed and the renderer must re-upload them
    pub needs_update: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::standard("Default", [0.8, 0.8, 0.8, 1.0], 0.0, 0.5)
    }
}

impl Material {
    fn with_kind(name: &str, base_color: [f32; 4], kind: MaterialKind) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            kind,
            needs_update: false,
        }
    }

    /// Creates a metallic-roughness PBR material
    ///
    /// # Arguments
    /// * `name` - Name for this material
    /// * `base_color` - RGBA base color
    /// * `metalness` - Metalness factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn standard(name: &str, base_color: [f32; 4], metalness: f32, roughness: f32) -> Self {
        Self::with_kind(
            name,
            base_color,
            MaterialKind::Standard(PbrParams {
                metalness,
                roughness,
                ..PbrParams::default()
            }),
        )
    }

    /// Creates a PBR material with a clearcoat layer
    pub fn physical(
        name: &str,
        base_color: [f32; 4],
        metalness: f32,
        roughness: f32,
        clearcoat: f32,
    ) -> Self {
        Self::with_kind(
            name,
            base_color,
            MaterialKind::Physical {
                pbr: PbrParams {
                    metalness,
                    roughness,
                    ..PbrParams::default()
                },
                clearcoat,
            },
        )
    }

    pub fn basic(name: &str, base_color: [f32; 4]) -> Self {
        Self::with_kind(name, base_color, MaterialKind::Basic)
    }

    pub fn phong(name: &str, base_color: [f32; 4], shininess: f32) -> Self {
        Self::with_kind(name, base_color, MaterialKind::Phong { shininess })
    }

    pub fn line(name: &str, base_color: [f32; 4], width: f32) -> Self {
        Self::with_kind(name, base_color, MaterialKind::Line { width })
    }

    pub fn points(name: &str, base_color: [f32; 4], size: f32) -> Self {
        Self::with_kind(name, base_color, MaterialKind::Points { size })
    }

    pub fn shader(name: &str, source_label: &str) -> Self {
        Self::with_kind(
            name,
            [1.0, 1.0, 1.0, 1.0],
            MaterialKind::Shader {
                source_label: source_label.to_string(),
            },
        )
    }

    /// Builder pattern: Set base color from RGB values
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b, self.base_color[3]];
        self
    }

    /// Builder pattern: Set metalness. Ignored for non-PBR kinds.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        if let Some(pbr) = self.pbr_mut() {
            pbr.metalness = metalness;
        }
        self
    }

    /// Builder pattern: Set roughness. Ignored for non-PBR kinds.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        if let Some(pbr) = self.pbr_mut() {
            pbr.roughness = roughness;
        }
        self
    }

    pub fn is_pbr(&self) -> bool {
        self.kind.is_pbr()
    }

    /// PBR parameters, if this kind has them
    pub fn pbr(&self) -> Option<&PbrParams> {
        match &self.kind {
            MaterialKind::Standard(pbr) | MaterialKind::Physical { pbr, .. } => Some(pbr),
            _ => None,
        }
    }

    pub fn pbr_mut(&mut self) -> Option<&mut PbrParams> {
        match &mut self.kind {
            MaterialKind::Standard(pbr) | MaterialKind::Physical { pbr, .. } => Some(pbr),
            _ => None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_update = true;
    }

    /// Called by the renderer once the material has been re-uploaded
    pub fn clear_dirty(&mut self) {
        self.needs_update = false;
    }
}

/// The material(s) a mesh renders with
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialRef {
    Single(Material),
    /// One material per polygon group, in group order
    Multi(Vec<Material>),
}

impl MaterialRef {
    pub fn len(&self) -> usize {
        match self {
            MaterialRef::Single(_) => 1,
            MaterialRef::Multi(materials) => materials.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        match self {
            MaterialRef::Single(material) => std::slice::from_ref(material).iter(),
            MaterialRef::Multi(materials) => materials.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Material> {
        match self {
            MaterialRef::Single(material) => std::slice::from_mut(material).iter_mut(),
            MaterialRef::Multi(materials) => materials.iter_mut(),
        }
    }
}

impl From<Material> for MaterialRef {
    fn from(material: Material) -> Self {
        MaterialRef::Single(material)
    }
}

impl From<Vec<Material>> for MaterialRef {
    fn from(materials: Vec<Material>) -> Self {
        MaterialRef::Multi(materials)
    }
}
