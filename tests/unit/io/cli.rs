//! Tests for argument parsing, view tunable validation and run orchestration

#[cfg(test)]
mod tests {
    use clap::Parser;
    use sheetsmith::SpriteError;
    use sheetsmith::io::cli::{Cli, Command, Generator, view_params};
    use sheetsmith::io::configuration::{
        BACK_VIEW_BRIGHTNESS, DEFAULT_ASSET_ROOT, DEFAULT_SKIN_PALETTE, SIDE_VIEW_WIDTH_RATIO,
    };
    use sheetsmith::io::progress::ProgressManager;
    use sheetsmith::source::layers::{DEFAULT_LAYERS, LayerId};
    use sheetsmith::source::photo::ViewParams;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn quiet_cli(command: Command, output: PathBuf) -> Cli {
        Cli {
            command,
            output,
            quiet: true,
        }
    }

    // Tests procedural defaults
    #[test]
    fn test_parse_procedural_defaults() {
        let cli = Cli::try_parse_from(["sheetsmith", "procedural"]).expect("Failed to parse");
        assert_eq!(
            cli.command,
            Command::Procedural {
                skin: DEFAULT_SKIN_PALETTE
            }
        );
        assert_eq!(cli.output, PathBuf::from(DEFAULT_ASSET_ROOT));
        assert!(cli.should_show_progress());
    }

    // Tests photo arguments and global flags after the subcommand
    #[test]
    fn test_parse_photo_with_globals() {
        let cli = Cli::try_parse_from([
            "sheetsmith",
            "photo",
            "hero.png",
            "--brightness",
            "0.5",
            "-o",
            "out",
            "-q",
        ])
        .expect("Failed to parse");

        assert_eq!(
            cli.command,
            Command::Photo {
                input: PathBuf::from("hero.png"),
                brightness: 0.5,
                width_ratio: SIDE_VIEW_WIDTH_RATIO,
            }
        );
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(!cli.should_show_progress());
    }

    // Tests a subcommand is required
    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["sheetsmith"]).is_err());
        assert!(Cli::try_parse_from(["sheetsmith", "photo"]).is_err());
    }

    // Tests default tunables map onto the default view parameters
    #[test]
    fn test_view_params_defaults() {
        let params =
            view_params(BACK_VIEW_BRIGHTNESS, SIDE_VIEW_WIDTH_RATIO).expect("Defaults rejected");
        assert_eq!(params, ViewParams::default());
    }

    // Tests out of range tunables are rejected
    #[test]
    fn test_view_params_rejects_out_of_range() {
        for (brightness, width_ratio) in [(-0.1, 0.8), (1.5, 0.8), (0.3, 0.0), (0.3, 1.2)] {
            assert!(matches!(
                view_params(brightness, width_ratio),
                Err(SpriteError::InvalidParameter { .. })
            ));
        }
        assert!(view_params(f32::NAN, 0.8).is_err());
        assert!(view_params(0.3, f32::NAN).is_err());
        assert!(view_params(0.0, 1.0).is_ok());
    }

    // Tests an unknown skin fails before anything is written
    #[test]
    fn test_bad_skin_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join("assets");
        let generator = Generator::new(quiet_cli(Command::Procedural { skin: 9 }, root.clone()))
            .expect("Failed to create generator");

        assert!(matches!(
            generator.process(),
            Err(SpriteError::InvalidParameter {
                parameter: "skin",
                ..
            })
        ));
        assert!(!root.exists());
    }

    // Tests a missing photo fails before anything is written
    #[test]
    fn test_missing_photo_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join("assets");
        let command = Command::Photo {
            input: dir.path().join("absent.png"),
            brightness: BACK_VIEW_BRIGHTNESS,
            width_ratio: SIDE_VIEW_WIDTH_RATIO,
        };
        let generator =
            Generator::new(quiet_cli(command, root.clone())).expect("Failed to create generator");

        assert!(matches!(
            generator.process(),
            Err(SpriteError::InputNotFound { .. })
        ));
        assert!(!root.exists());
    }

    // Tests a failed render still clears the progress bar
    #[test]
    fn test_failed_render_finishes_progress() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let cli = Cli {
            command: Command::Procedural { skin: 9 },
            output: dir.path().join("assets"),
            quiet: false,
        };
        let generator = Generator::new(cli).expect("Failed to create generator");

        assert!(generator.process().is_err());
        assert!(generator.progress().is_some_and(ProgressManager::is_finished));
    }

    // Tests the procedural run renders every default layer in order
    #[test]
    fn test_procedural_render_covers_default_layers() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let generator = Generator::new(quiet_cli(
            Command::Procedural { skin: 0 },
            dir.path().to_path_buf(),
        ))
        .expect("Failed to create generator");

        let rendered = generator.render().expect("Render failed");
        let layers: Vec<LayerId> = rendered.iter().map(|(layer, _)| *layer).collect();
        assert_eq!(layers, DEFAULT_LAYERS.to_vec());
    }
}
