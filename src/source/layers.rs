//! Layer identifiers, asset naming and output planning
//!
//! Every run writes every default layer. Layers a source does not render are
//! planned as transparent sheets so the game can load all of them without
//! checking which generator produced the character.

use crate::io::configuration::SHEET_EXTENSION;
use crate::sheet::assembler::Sheet;
use std::fmt;
use std::path::PathBuf;

/// Category and variant of one visual layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    /// Directory under the asset root (`body`, `hair`, ...)
    pub category: &'static str,
    /// File stem inside the category directory
    pub variant: &'static str,
}

impl LayerId {
    /// Default body layer
    pub const BODY: Self = Self::new("body", "body_default");
    /// Default hair layer
    pub const HAIR: Self = Self::new("hair", "hair_short");
    /// Default eyes layer
    pub const EYES: Self = Self::new("eyes", "eyes_round");
    /// Default eyebrows layer
    pub const EYEBROWS: Self = Self::new("eyebrows", "eyebrows_natural");
    /// Default nose layer
    pub const NOSE: Self = Self::new("nose", "nose_button");
    /// Default mouth layer
    pub const MOUTH: Self = Self::new("mouth", "mouth_smile");
    /// Default clothing layer
    pub const TOP: Self = Self::new("top", "top_tshirt");

    /// Create a layer identifier
    pub const fn new(category: &'static str, variant: &'static str) -> Self {
        Self { category, variant }
    }

    /// Path relative to the asset root: `<category>/<variant>.png`
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category).join(format!("{}.{SHEET_EXTENSION}", self.variant))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.variant)
    }
}

/// Layers every character is expected to ship, in draw order
pub const DEFAULT_LAYERS: [LayerId; 7] = [
    LayerId::BODY,
    LayerId::HAIR,
    LayerId::EYES,
    LayerId::EYEBROWS,
    LayerId::NOSE,
    LayerId::MOUTH,
    LayerId::TOP,
];

/// A sheet destined for one layer file
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Layer the sheet belongs to
    pub layer: LayerId,
    /// Pixels to write
    pub sheet: Sheet,
    /// Whether the sheet is a transparent stand-in
    pub placeholder: bool,
}

impl OutputFile {
    /// Path relative to the asset root
    pub fn relative_path(&self) -> PathBuf {
        self.layer.relative_path()
    }
}

/// Decide which sheet is written for each layer
///
/// Each layer in `layers` gets its rendered sheet when one exists, otherwise a
/// transparent placeholder. Rendered sheets for layers outside `layers` are
/// appended in the order they were rendered.
pub fn plan_outputs(rendered: Vec<(LayerId, Sheet)>, layers: &[LayerId]) -> Vec<OutputFile> {
    let mut pending: Vec<Option<(LayerId, Sheet)>> = rendered.into_iter().map(Some).collect();
    let mut plan = Vec::with_capacity(layers.len() + pending.len());

    for &layer in layers {
        let found = pending
            .iter_mut()
            .find(|entry| entry.as_ref().is_some_and(|(id, _)| *id == layer))
            .and_then(Option::take);

        plan.push(match found {
            Some((_, sheet)) => OutputFile {
                layer,
                sheet,
                placeholder: false,
            },
            None => OutputFile {
                layer,
                sheet: Sheet::blank(),
                placeholder: true,
            },
        });
    }

    plan.extend(pending.into_iter().flatten().map(|(layer, sheet)| OutputFile {
        layer,
        sheet,
        placeholder: false,
    }));

    plan
}
