#[cfg(test)]
mod batch_tests {
    use std::{fs, path::Path};

    use image::{Rgba, RgbaImage};

    use crate::{
        config::ProcessConfig,
        error::ColourIdError,
        hit_test::LabelTable,
        manifest::{AssetJob, AssetKind, default_manifest},
        palette::{ButtonStyle, ColourKey},
        run,
        tests::utils::*,
        utils::{
            image::{read_rgba_image, write_png},
            pixel::Colour,
        },
    };

    const SIZE: u32 = 8;

    fn config_for(dir: &Path) -> ProcessConfig {
        ProcessConfig {
            asset_root: dir.to_path_buf(),
            ..ProcessConfig::default()
        }
    }

    fn button_source() -> RgbaImage {
        RgbaImage::from_fn(SIZE, SIZE, |x, _| match x % 4 {
            0 => Rgba([0, 0, 0, 0]),
            1 => Rgba([255, 0, 0, 255]),
            2 => Rgba([0, 255, 0, 255]),
            _ => Rgba([255, 255, 255, 255]),
        })
    }

    /// Lay out a source file for every job under `root`.
    fn seed(root: &Path, manifest: &[AssetJob]) {
        for job in manifest {
            let path = root.join(job.path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            let image = match job.kind {
                AssetKind::Part(_) => gen_silhouette(SIZE),
                AssetKind::Button(_) => button_source(),
            };
            write_png(&image, &path).unwrap();
        }
    }

    #[test]
    fn test_default_manifest_end_to_end() {
        let dir = scratch_dir("default_manifest_end_to_end");
        let manifest = default_manifest();
        seed(&dir, &manifest);

        let config = config_for(&dir);
        let reports = run(&config, &manifest).unwrap();
        assert_eq!(reports.len(), manifest.len());

        let labels = LabelTable::from_manifest(&manifest).unwrap();
        for (job, report) in manifest.iter().zip(&reports) {
            let source = dir.join(job.path);
            assert_eq!(report.source, source);

            let output = read_rgba_image(&report.destination).unwrap();
            match job.kind {
                AssetKind::Part(_) => {
                    assert_eq!(report.destination, source);
                    assert_eq!(report.remapped, ((SIZE - 2) * (SIZE - 2)) as usize);
                }
                AssetKind::Button(_) => {
                    assert_eq!(report.destination, config.button_output(&source));
                    // the source stays around for the next run
                    assert_eq!(read_rgba_image(&source).unwrap(), button_source());
                }
            }

            // every opaque pixel now decodes back to its own asset
            for pixel in output.pixels().map(|p| Colour::from(*p)) {
                if pixel.is_opaque() {
                    assert_eq!(labels.label_of(pixel), Some(job.label), "{}", job.path);
                } else {
                    assert_eq!(pixel, Colour::TRANSPARENT);
                }
            }
        }
    }

    #[test]
    fn test_duplicate_stops_the_batch() {
        let dir = scratch_dir("duplicate_stops_the_batch");
        let black = Colour::opaque(1, 0, 0);
        let manifest = [
            AssetJob::part("frame", "frame.png", black, Colour::opaque(254, 255, 255)),
            AssetJob::part("fork", "fork.png", black, Colour::opaque(255, 254, 255)),
            AssetJob::part(
                "seat",
                "seat.png",
                Colour::opaque(0, 1, 0),
                Colour::opaque(255, 255, 254),
            ),
        ];
        seed(&dir, &manifest);

        let err = run(&config_for(&dir), &manifest).unwrap_err();
        match err {
            ColourIdError::DuplicateColour { role, path, colour } => {
                assert_eq!(role, ColourKey::Black);
                assert_eq!(path, dir.join("fork.png"));
                assert_eq!(colour, black);
            }
            other => panic!("unexpected error {other:?}"),
        }

        // the clash is found up front, so not even the first part is written
        for job in &manifest {
            assert_eq!(
                read_rgba_image(&dir.join(job.path)).unwrap(),
                gen_silhouette(SIZE),
                "{}",
                job.path
            );
        }
    }

    #[test]
    fn test_duplicate_message_names_the_file() {
        let dir = scratch_dir("duplicate_message_names_the_file");
        let white = Colour::opaque(254, 255, 255);
        let manifest = [
            AssetJob::part("frame", "frame.png", Colour::opaque(1, 0, 0), white),
            AssetJob::part("stem", "stem.png", Colour::opaque(0, 0, 1), white),
        ];
        seed(&dir, &manifest);

        let err = run(&config_for(&dir), &manifest).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "{} re-uses white value (254, 255, 255, 255)",
                dir.join("stem.png").display()
            )
        );
    }

    #[test]
    fn test_missing_asset_stops_the_batch() {
        let dir = scratch_dir("missing_asset_stops_the_batch");
        let present = AssetJob::part(
            "fork",
            "fork.png",
            Colour::opaque(0, 1, 0),
            Colour::opaque(255, 254, 255),
        );
        seed(&dir, &[present]);

        let manifest = [
            AssetJob::button("explode", "gone.png", ButtonStyle::explode(Colour::opaque(2, 3, 2))),
            present,
        ];
        let err = run(&config_for(&dir), &manifest).unwrap_err();
        assert!(matches!(err, ColourIdError::Io(_)));
        assert_eq!(
            read_rgba_image(&dir.join("fork.png")).unwrap(),
            gen_silhouette(SIZE)
        );
    }

    #[test]
    fn test_ambiguous_manifest_touches_nothing() {
        let dir = scratch_dir("ambiguous_manifest_touches_nothing");
        let manifest = [
            AssetJob::part(
                "stem",
                "stem.png",
                Colour::opaque(0, 0, 1),
                Colour::opaque(255, 255, 254),
            ),
            AssetJob::button("back", "back.png", ButtonStyle::back(Colour::opaque(0, 0, 1))),
        ];
        seed(&dir, &manifest);

        let err = run(&config_for(&dir), &manifest).unwrap_err();
        assert!(matches!(err, ColourIdError::AmbiguousLabel { .. }));
        assert_eq!(
            read_rgba_image(&dir.join("stem.png")).unwrap(),
            gen_silhouette(SIZE)
        );
    }
}
