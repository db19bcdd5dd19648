use std::path::{Path, PathBuf};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::model::ServiceModel;

/// A memory-mapped `service-2.json` file.
pub struct ModelLoader {
  path: PathBuf,
  file: AsyncMmapFile,
}

impl ModelLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open model {}", path.display()))?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
    })
  }

  pub fn parse(&self) -> anyhow::Result<ServiceModel> {
    ServiceModel::from_slice(self.file.as_slice()).with_context(|| format!("failed to parse model {}", self.path.display()))
  }
}

/// Loads every input in order and merges them; later files win on name
/// collisions.
pub async fn load_models(paths: &[PathBuf]) -> anyhow::Result<ServiceModel> {
  let Some((first, rest)) = paths.split_first() else {
    anyhow::bail!("at least one input model is required");
  };

  let mut model = ModelLoader::open(first).await?.parse()?;
  for path in rest {
    model.merge(ModelLoader::open(path).await?.parse()?);
  }
  Ok(model)
}
