//! Command-line interface and the run orchestration behind it

use crate::frame::transform::{BackViewTint, SideViewSquish};
use crate::io::configuration::{
    BACK_VIEW_BRIGHTNESS, DEFAULT_ASSET_ROOT, DEFAULT_SKIN_PALETTE, SIDE_VIEW_WIDTH_RATIO,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::write_outputs;
use crate::io::progress::ProgressManager;
use crate::schedule::registry::ScheduleRegistry;
use crate::sheet::assembler::{Sheet, SheetAssembler};
use crate::source::layers::{DEFAULT_LAYERS, LayerId, plan_outputs};
use crate::source::photo::{PhotoSource, ViewParams};
use crate::source::procedural::{ProceduralSource, default_layers, skin_palette};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, info_span};

#[derive(Parser)]
#[command(name = "sheetsmith")]
#[command(
    author,
    version,
    about = "Generate character sprite sheets from a photo cutout or drawn layers"
)]
/// Command-line arguments for the sheet generator
pub struct Cli {
    /// Which source the sheets are built from
    #[command(subcommand)]
    pub command: Command,

    /// Asset root the `<category>/<variant>.png` files are written under
    #[arg(short, long, global = true, default_value = DEFAULT_ASSET_ROOT)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Source selection
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build the body sheet from a character cutout; other layers are left transparent
    Photo {
        /// Character image, any size, converted to RGBA
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Back view brightness factor (0 to 1)
        #[arg(long, default_value_t = BACK_VIEW_BRIGHTNESS)]
        brightness: f32,

        /// Side view width ratio (above 0, at most 1)
        #[arg(long, default_value_t = SIDE_VIEW_WIDTH_RATIO)]
        width_ratio: f32,
    },

    /// Draw every default layer from geometric primitives
    Procedural {
        /// Skin palette index for the body layer
        #[arg(long, default_value_t = DEFAULT_SKIN_PALETTE)]
        skin: usize,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Validate the photo view tunables
///
/// # Errors
///
/// Returns an error if the brightness is outside 0..=1 or the width ratio is
/// outside (0, 1]
pub fn view_params(brightness: f32, width_ratio: f32) -> Result<ViewParams> {
    if !(0.0..=1.0).contains(&brightness) {
        return Err(invalid_parameter(
            "brightness",
            &brightness,
            &"must be between 0 and 1",
        ));
    }
    if !(width_ratio > 0.0 && width_ratio <= 1.0) {
        return Err(invalid_parameter(
            "width-ratio",
            &width_ratio,
            &"must be above 0 and at most 1",
        ));
    }

    Ok(ViewParams {
        tint: BackViewTint {
            brightness,
            ..BackViewTint::default()
        },
        squish: SideViewSquish {
            width_ratio,
            ..SideViewSquish::default()
        },
    })
}

/// Runs one generation: render sheets, plan layer files, write them
pub struct Generator {
    cli: Cli,
    registry: ScheduleRegistry,
    progress_manager: Option<ProgressManager>,
}

impl Generator {
    /// Create a generator, validating the animation registry up front
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in animation registry is inconsistent
    pub fn new(cli: Cli) -> Result<Self> {
        let registry = ScheduleRegistry::canonical()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            registry,
            progress_manager,
        })
    }

    /// Render, plan and write every layer sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded, a parameter is out of
    /// range, or any sheet fails to write. Nothing is written unless every
    /// sheet was rendered.
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let result = self.render().and_then(|rendered| {
            let plan = plan_outputs(rendered, &DEFAULT_LAYERS);
            let placeholders = plan.iter().filter(|output| output.placeholder).count();
            info!(
                sheets = plan.len(),
                placeholders,
                root = %self.cli.output.display(),
                "writing layer sheets"
            );
            write_outputs(&self.cli.output, &plan, self.progress_manager.as_ref())
        });

        // The bar is cleared on failure too, before the error is logged
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        result
    }

    /// Progress display, present unless `--quiet` was given
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Render the sheets the selected source produces
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or a parameter is out
    /// of range
    pub fn render(&self) -> Result<Vec<(LayerId, Sheet)>> {
        let assembler = SheetAssembler::new(&self.registry);

        match &self.cli.command {
            Command::Photo {
                input,
                brightness,
                width_ratio,
            } => {
                let _span = info_span!("photo", input = %input.display()).entered();
                let params = view_params(*brightness, *width_ratio)?;
                let source = PhotoSource::from_path(input, &params)?;

                self.start_stage("assemble", 1);
                let sheet = assembler.assemble(&source)?;
                self.advance(&LayerId::BODY.to_string());
                Ok(vec![(LayerId::BODY, sheet)])
            }
            Command::Procedural { skin } => {
                let _span = info_span!("procedural", skin).entered();
                let layers = default_layers(skin_palette(*skin)?);

                self.start_stage("assemble", layers.len());
                let mut sheets = Vec::with_capacity(layers.len());
                for layer in layers {
                    info!(layer = %layer.layer, "{}", layer.description);
                    let sheet = assembler.assemble(&ProceduralSource::new(layer))?;
                    self.advance(&layer.layer.to_string());
                    sheets.push((layer.layer, sheet));
                }
                Ok(sheets)
            }
        }
    }

    fn start_stage(&self, stage: &str, total: usize) {
        if let Some(ref pm) = self.progress_manager {
            pm.start_stage(stage, total);
        }
    }

    fn advance(&self, label: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.advance(label);
        }
    }
}
