use log::info;

use crate::{
    config::ProcessConfig,
    error::Result,
    hit_test::LabelTable,
    manifest::{AssetJob, AssetKind},
    registry::UsedColourRegistry,
    remapper::{TransformReport, transform_button, transform_part},
};

pub mod config;
pub mod error;
pub mod manifest;
pub mod palette;
pub mod registry;
pub mod remapper;
pub mod transform;
pub mod utils;


pub mod prelude {
    pub use crate::palette::{ButtonStyle, ColourKey, RoleTable};
    pub use crate::transform::prelude::*;
    pub use crate::utils::prelude::*;
}

/// Encode every asset of `manifest`, in order.
///
/// Colour clashes are reported before any file is touched. Otherwise the
/// first failure stops the batch and files after it are left as they were.
pub fn run(config: &ProcessConfig, manifest: &[AssetJob]) -> Result<Vec<TransformReport>> {
    check_part_targets(config, manifest)?;
    let labels = LabelTable::from_manifest(manifest)?;
    info!(
        "encoding {} assets under {} ({} distinct colours)",
        manifest.len(),
        config.asset_root.display(),
        labels.len()
    );

    let mut registry = UsedColourRegistry::new();
    let mut reports = Vec::with_capacity(manifest.len());

    for job in manifest {
        let source = config.resolve(job.path);
        let report = match &job.kind {
            AssetKind::Part(roles) => transform_part(&source, roles, &mut registry)?,
            AssetKind::Button(style) => {
                transform_button(&source, &config.button_output(&source), style)?
            }
        };

        info!(
            "{}: {} -> {} ({} pixels remapped)",
            job.label,
            report.source.display(),
            report.destination.display(),
            report.remapped
        );
        reports.push(report);
    }

    Ok(reports)
}

/// Claim every part's targets in a throwaway registry, so a reused black or
/// white surfaces as [crate::error::ColourIdError::DuplicateColour] naming the part's file.
fn check_part_targets(config: &ProcessConfig, manifest: &[AssetJob]) -> Result {
    let mut registry = UsedColourRegistry::new();
    for job in manifest {
        if let AssetKind::Part(roles) = &job.kind {
            registry.claim(&config.resolve(job.path), roles)?;
        }
    }
    Ok(())
}
