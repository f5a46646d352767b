/// Display metadata of one scene.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneInfo {
    /// Scene title; may be empty.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

/// Read-only lookup from scene index to display metadata.
pub trait SceneCatalog {
    /// Metadata for `index`, if the scene exists.
    fn scene(&self, index: usize) -> Option<&SceneInfo>;
}

impl SceneCatalog for [SceneInfo] {
    fn scene(&self, index: usize) -> Option<&SceneInfo> {
        self.get(index)
    }
}

impl SceneCatalog for Vec<SceneInfo> {
    fn scene(&self, index: usize) -> Option<&SceneInfo> {
        self.get(index)
    }
}

/// Title to show for `index`, falling back to `Scene N` (1-based) for unknown or untitled scenes.
pub fn display_title<C: SceneCatalog + ?Sized>(catalog: &C, index: usize) -> String {
    match catalog.scene(index) {
        Some(info) if !info.title.trim().is_empty() => info.title.clone(),
        _ => format!("Scene {}", index + 1),
    }
}
