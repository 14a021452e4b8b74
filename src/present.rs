use crate::draw;
use crate::error::PlotError;
use crate::figure::Figure;
use std::path::PathBuf;
use tracing::info;

/// Where a finished figure goes.
/// Production code writes it out; tests keep it in memory and inspect it.
pub trait Presenter {
    fn present(&mut self, figure: &Figure) -> Result<(), PlotError>;
}

/// Draws the figure to a file, png when the extension says so, svg otherwise.
#[derive(Debug, Clone)]
pub struct FilePresenter {
    pub path: PathBuf,
}

impl FilePresenter {
    pub fn new(path: PathBuf) -> FilePresenter {
        FilePresenter { path }
    }

    fn is_bitmap(&self) -> bool {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "bmp" | "jpg" | "jpeg"),
            None => false,
        }
    }
}

impl Presenter for FilePresenter {
    fn present(&mut self, figure: &Figure) -> Result<(), PlotError> {
        if self.is_bitmap() {
            draw::to_bitmap_file(figure, &self.path)?;
        } else {
            draw::to_svg_file(figure, &self.path)?;
        }
        info!("chart written to {}", self.path.display());
        Ok(())
    }
}

/// Keeps every presented figure, never touches a display or the disk.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    pub figures: Vec<Figure>,
}

impl HeadlessPresenter {
    pub fn new() -> HeadlessPresenter {
        HeadlessPresenter::default()
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, figure: &Figure) -> Result<(), PlotError> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
