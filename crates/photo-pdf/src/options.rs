use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-run document configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DocumentOptions {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub fit: FitStrategy,
    pub quality: QualityLevel,
}

impl DocumentOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| PhotoPdfError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PhotoPdfError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.paper_size
        {
            if !(width_mm.is_finite() && width_mm > 0.0 && height_mm.is_finite() && height_mm > 0.0)
            {
                return Err(PhotoPdfError::Config(format!(
                    "Custom paper size must be positive, got {} x {} mm",
                    width_mm, height_mm
                )));
            }
        }
        Ok(())
    }

    /// Page geometry for these options
    pub fn page_geometry(&self) -> PageGeometry {
        self.paper_size.geometry(self.orientation)
    }
}
