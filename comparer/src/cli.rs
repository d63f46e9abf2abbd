use crate::app::ComparerOptions;
use crate::errors::ComparerError;
use clap::Parser;
use egui::Color32;
use egui_compare::{CompareStyle, HandleIcon};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "comparer")]
#[command(author, version, about = "Compare two images with a draggable divider", long_about = None)]
pub struct Args {
    /// "Before" image, shown left of the divider
    #[arg(long)]
    pub left: Option<PathBuf>,

    /// "After" image, shown right of the divider
    #[arg(long)]
    pub right: Option<PathBuf>,

    /// Image drawn inside the handle instead of the arrow glyph
    #[arg(long)]
    pub handle_icon: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    pub divider_width: f32,

    /// Divider line color, e.g. #FFFFFF or #FFFFFF80
    #[arg(long)]
    pub divider_color: Option<String>,
}

impl Args {
    pub fn into_options(self) -> Result<ComparerOptions, ComparerError> {
        let mut style = CompareStyle::default().with_divider_width(self.divider_width);
        if let Some(color) = self.divider_color.as_deref() {
            style = style.with_divider_color(parse_color(color)?);
        }
        if let Some(icon) = self.handle_icon.as_deref() {
            style = style.with_handle_icon(HandleIcon::Uri(file_uri(icon)?));
        }

        Ok(ComparerOptions {
            left: self.left.as_deref().map(file_uri).transpose()?,
            right: self.right.as_deref().map(file_uri).transpose()?,
            style,
        })
    }
}

pub fn parse_color(input: &str) -> Result<Color32, ComparerError> {
    let hex = if input.starts_with('#') {
        input.to_owned()
    } else {
        format!("#{input}")
    };
    Color32::from_hex(&hex).map_err(|_| ComparerError::InvalidColor(input.to_owned()))
}

/// `file://` URI for an existing file, resolved by egui_extras' file loader.
pub fn file_uri(path: &Path) -> Result<String, ComparerError> {
    if !path.is_file() {
        return Err(ComparerError::MissingFile(path.to_path_buf()));
    }
    let path = path.canonicalize()?;
    Ok(format!("file://{}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("comparer").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn no_arguments_shows_painted_panes() {
        let options = args(&[]).into_options().expect("valid options");
        assert_eq!(options.left, None);
        assert_eq!(options.right, None);
        assert_eq!(options.style, CompareStyle::default());
    }

    #[test]
    fn divider_flags_reach_the_style() {
        let options = args(&["--divider-width", "3", "--divider-color", "#ff0000"])
            .into_options()
            .expect("valid options");
        assert_eq!(options.style.divider_width, 3.0);
        assert_eq!(options.style.divider_color, Color32::RED);
    }

    #[test]
    fn colors_accept_missing_hash() {
        assert_eq!(
            parse_color("00ff00").expect("valid color"),
            Color32::from_rgb(0, 255, 0)
        );
        assert!(matches!(
            parse_color("nope"),
            Err(ComparerError::InvalidColor(color)) if color == "nope"
        ));
    }

    #[test]
    fn missing_image_is_reported() {
        let err = args(&["--left", "/definitely/not/here.png"])
            .into_options()
            .expect_err("missing file");
        assert!(matches!(err, ComparerError::MissingFile(_)));
    }

    #[test]
    fn existing_file_becomes_file_uri() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let uri = file_uri(Path::new(manifest)).expect("manifest exists");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("Cargo.toml"));
    }
}
