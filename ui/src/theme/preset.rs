use crate::error::AppResult;

/// Where the name of the selected theme preset is persisted.
pub trait PresetStore {
    fn current_preset(&self) -> Option<String>;

    fn store_preset(&mut self, name: &str) -> AppResult<()>;
}

/// Keeps the preset name in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryPresetStore {
    preset: Option<String>,
}

impl MemoryPresetStore {
    pub fn new(preset: Option<&str>) -> Self {
        Self {
            preset: preset.map(str::to_owned),
        }
    }
}

impl PresetStore for MemoryPresetStore {
    fn current_preset(&self) -> Option<String> {
        self.preset.clone()
    }

    fn store_preset(&mut self, name: &str) -> AppResult<()> {
        self.preset = Some(name.to_string());
        Ok(())
    }
}
